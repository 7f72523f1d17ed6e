//! ServiceNow Table API response models.
//!
//! These structs map to the table-API JSON payloads for the change_request
//! table. They are internal to the ServiceNow adapter; only the normalized
//! [`ChangeRequestRecord`] crosses into the domain.

use serde::{Deserialize, Serialize};

use crate::domain::models::ChangeRequestRecord;

/// A change request as returned by the Table API.
///
/// ServiceNow serializes every field as a string; ones missing from the
/// response default to empty rather than failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceNowRecord {
    /// Human-facing ticket number (e.g., "CHG0000001").
    #[serde(default)]
    pub number: String,
    /// "true" / "false" activity flag.
    #[serde(default)]
    pub active: String,
    /// Priority value ("1" = critical .. "5" = planning).
    #[serde(default)]
    pub priority: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Planned start of the change window.
    #[serde(default)]
    pub work_start: String,
    /// Planned end of the change window.
    #[serde(default)]
    pub work_end: String,
    /// Internal record identifier.
    #[serde(default)]
    pub sys_id: String,
}

impl ServiceNowRecord {
    /// Normalize into the shape the platform consumes.
    pub fn normalize(&self) -> ChangeRequestRecord {
        ChangeRequestRecord {
            change_ticket_number: self.number.clone(),
            active: self.active.clone(),
            priority: self.priority.clone(),
            description: self.description.clone(),
            work_start: self.work_start.clone(),
            work_end: self.work_end.clone(),
            change_ticket_key: self.sys_id.clone(),
        }
    }
}

/// Response wrapper for table queries: a `result` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableQueryResponse {
    /// The records returned, in table order.
    pub result: Vec<ServiceNowRecord>,
}

/// Response wrapper for record creation: a single `result` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreateResponse {
    /// The created record.
    pub result: ServiceNowRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_response_deserialization() {
        let json = r#"{
            "result": [
                {
                    "number": "CHG0000001",
                    "active": "true",
                    "priority": "2",
                    "description": "Upgrade edge routers",
                    "work_start": "2026-09-01 01:00:00",
                    "work_end": "2026-09-01 03:00:00",
                    "sys_id": "a9e30c7dc61122760116894de7bcc7bd"
                }
            ]
        }"#;
        let resp: TableQueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.result.len(), 1);
        assert_eq!(resp.result[0].number, "CHG0000001");
        assert_eq!(resp.result[0].sys_id, "a9e30c7dc61122760116894de7bcc7bd");
    }

    #[test]
    fn test_create_response_deserialization() {
        let json = r#"{
            "result": {
                "number": "CHG0000099",
                "active": "true",
                "priority": "4",
                "description": "",
                "work_start": "",
                "work_end": "",
                "sys_id": "sys99"
            }
        }"#;
        let resp: TableCreateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.result.number, "CHG0000099");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let json = r#"{ "number": "CHG0000002", "sys_id": "sys2" }"#;
        let record: ServiceNowRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.number, "CHG0000002");
        assert_eq!(record.active, "");
        assert_eq!(record.work_start, "");
    }

    #[test]
    fn test_normalize_maps_every_field() {
        let record = ServiceNowRecord {
            number: "CHG1".into(),
            active: "true".into(),
            priority: "1".into(),
            description: "d".into(),
            work_start: "t0".into(),
            work_end: "t1".into(),
            sys_id: "sys1".into(),
        };
        let normalized = record.normalize();
        assert_eq!(normalized.change_ticket_number, "CHG1");
        assert_eq!(normalized.active, "true");
        assert_eq!(normalized.priority, "1");
        assert_eq!(normalized.description, "d");
        assert_eq!(normalized.work_start, "t0");
        assert_eq!(normalized.work_end, "t1");
        assert_eq!(normalized.change_ticket_key, "sys1");
    }
}
