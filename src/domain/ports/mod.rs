//! Port trait definitions.
//!
//! The adapter interacts with the external ticketing system exclusively
//! through these traits, keeping the domain layer decoupled from the
//! concrete HTTP client.

pub mod transport;

pub use transport::{RawResponse, TicketTransport};
