//! Lookup configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default MediaWiki API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Settings for encyclopedia lookups (the `[lookup]` config section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// MediaWiki `api.php` URL
    pub endpoint: String,
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Skip the network entirely
    pub offline: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: format!("volcano-atlas/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            offline: false,
        }
    }
}

impl LookupConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LookupConfig::default();
        assert_eq!(config.endpoint, "https://en.wikipedia.org/w/api.php");
        assert_eq!(config.timeout(), Duration::from_secs(15));
        assert!(config.user_agent.starts_with("volcano-atlas/"));
        assert!(!config.offline);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: LookupConfig = serde_json::from_str(r#"{"offline": true}"#).unwrap();
        assert!(config.offline);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
