//! Snowline - ServiceNow change-request adapter.
//!
//! Snowline lets an automation platform poll and mutate change-request
//! records in a ServiceNow instance over its Table REST API. It exposes a
//! connect/healthcheck lifecycle, publishes ONLINE/OFFLINE status events,
//! and normalizes the remote JSON schema into an internal record shape.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): normalized models, error taxonomy, and
//!   the transport port trait
//! - **Service Layer** (`services`): broadcast-based status event bus
//! - **Adapter Layer** (`adapters`): the ServiceNow HTTP client and the
//!   adapter itself
//! - **Infrastructure Layer** (`infrastructure`): configuration loading
//!   and logging setup
//!
//! # Example
//!
//! ```no_run
//! use snowline::{AdapterConfig, ServiceNowAdapter};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AdapterConfig {
//!         url: "https://dev12345.service-now.com".into(),
//!         username: "admin".into(),
//!         password: "secret".into(),
//!         ..AdapterConfig::default()
//!     };
//!
//!     let adapter = ServiceNowAdapter::new("a1", config)?;
//!     let mut events = adapter.subscribe();
//!
//!     adapter.connect().await;
//!     let event = events.recv().await?;
//!     println!("{}: {}", event.adapter_id, event.status);
//!
//!     for record in adapter.get_record().await? {
//!         println!("{}", record.change_ticket_number);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::servicenow::{ServiceNowAdapter, ServiceNowClient};
pub use domain::errors::{AdapterError, AdapterResult};
pub use domain::models::{
    AdapterConfig, AdapterStatus, ChangeRequestDraft, ChangeRequestRecord, StatusEvent,
};
pub use domain::ports::{RawResponse, TicketTransport};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::StatusBus;
