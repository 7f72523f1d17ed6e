//! Normalized change-request models.
//!
//! These are the shapes the automation platform consumes. The ServiceNow
//! wire format lives in the adapter layer; only the normalized form
//! crosses the domain boundary.

use serde::{Deserialize, Serialize};

/// A change request normalized from the remote ticketing system.
///
/// Field values are passed through as the strings ServiceNow returns;
/// the platform owns any further typing (dates, booleans).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRequestRecord {
    /// Human-facing ticket number (e.g., "CHG0000001").
    pub change_ticket_number: String,
    /// Whether the ticket is active ("true" / "false" as returned).
    pub active: String,
    /// Priority value as returned by the remote system.
    pub priority: String,
    /// Free-text description of the change.
    pub description: String,
    /// Planned start of the change window.
    pub work_start: String,
    /// Planned end of the change window.
    pub work_end: String,
    /// The remote system's internal record identifier (sys_id).
    pub change_ticket_key: String,
}

/// Seed fields for creating a new change request.
///
/// All fields are optional: ServiceNow accepts an empty body and fills in
/// defaults, which is exactly what a bare `ChangeRequestDraft::default()`
/// produces on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeRequestDraft {
    /// Short description for the new ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Priority to request for the new ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Planned start of the change window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_start: Option<String>,
    /// Planned end of the change window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_end: Option<String>,
}

impl ChangeRequestDraft {
    /// Create an empty draft (remote defaults apply to every field).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Set the change window.
    pub fn with_window(
        mut self,
        work_start: impl Into<String>,
        work_end: impl Into<String>,
    ) -> Self {
        self.work_start = Some(work_start.into());
        self.work_end = Some(work_end.into());
        self
    }
}
