//! Adapter availability status and the event envelope that carries it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Availability of the remote instance as seen by the most recent probe.
///
/// Serialized names match the event names the host platform subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdapterStatus {
    /// The instance answered the health probe.
    #[serde(rename = "ONLINE")]
    Online,
    /// The probe failed (transport error or hibernating instance).
    #[serde(rename = "OFFLINE")]
    Offline,
}

impl AdapterStatus {
    /// Returns the event name for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "ONLINE",
            Self::Offline => "OFFLINE",
        }
    }
}

impl std::fmt::Display for AdapterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status-change notification published on the adapter's event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    /// The id the adapter was constructed with.
    pub adapter_id: String,
    /// The observed availability.
    pub status: AdapterStatus,
    /// When the probe completed.
    pub timestamp: DateTime<Utc>,
}

impl StatusEvent {
    /// Create an event stamped with the current time.
    pub fn now(adapter_id: impl Into<String>, status: AdapterStatus) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status,
            timestamp: Utc::now(),
        }
    }
}
