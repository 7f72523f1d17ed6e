//! Domain models: normalized records and status events.

pub mod change_request;
pub mod config;
pub mod status;

pub use change_request::{ChangeRequestDraft, ChangeRequestRecord};
pub use config::AdapterConfig;
pub use status::{AdapterStatus, StatusEvent};
