//! Adapter connection configuration.

use serde::{Deserialize, Serialize};

fn default_table() -> String {
    "change_request".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Connection properties for one ServiceNow instance.
///
/// Fully populated before the first request and immutable afterwards; the
/// adapter owns its copy for the lifetime of the connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Base URL of the instance (e.g., "https://dev12345.service-now.com").
    pub url: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// Table to operate on.
    #[serde(default = "default_table")]
    pub table: String,
    /// Request timeout applied by the HTTP transport.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: String::new(),
            password: String::new(),
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdapterConfig::default();
        assert_eq!(config.table, "change_request");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let yaml_equivalent = serde_json::json!({
            "url": "https://dev1.service-now.com",
            "username": "admin",
            "password": "secret"
        });
        let config: AdapterConfig = serde_json::from_value(yaml_equivalent).unwrap();
        assert_eq!(config.url, "https://dev1.service-now.com");
        assert_eq!(config.table, "change_request");
        assert_eq!(config.timeout_secs, 30);
    }
}
