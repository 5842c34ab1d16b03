//! Configuration management for the MCP server.
//!
//! Defaults are compiled in; `Config::from_env` overrides them from the
//! environment (and a `.env` file when present).

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default campaign summary reports endpoint.
pub const DEFAULT_REPORT_ENDPOINT: &str =
    "http://vertica-csr-348419287.us-east-1.elb.amazonaws.com/v1/campaign-summary-reports";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Analytics service configuration.
    pub reports: ReportsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Campaign summary reports service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    /// URL the report requests are POSTed to.
    pub endpoint: String,

    /// Request timeout in seconds. `None` leaves the HTTP client default
    /// (no timeout).
    pub timeout_secs: Option<u64>,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_REPORT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "campaign-sent-count-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            reports: ReportsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_REPORT_ENDPOINT`, `MCP_REPORT_TIMEOUT_SECS`, plus the transport
    /// variables read by [`TransportConfig::from_env`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(endpoint) = std::env::var("MCP_REPORT_ENDPOINT") {
            info!("Report endpoint overridden: {}", endpoint);
            config.reports.endpoint = endpoint;
        }

        if let Ok(timeout) = std::env::var("MCP_REPORT_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.reports.timeout_secs = Some(secs),
                Err(_) => warn!(
                    "Ignoring invalid MCP_REPORT_TIMEOUT_SECS value: {:?}",
                    timeout
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_report_endpoint_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_REPORT_ENDPOINT", "http://localhost:9999/reports");
        }
        let config = Config::from_env();
        assert_eq!(config.reports.endpoint, "http://localhost:9999/reports");
        unsafe {
            std::env::remove_var("MCP_REPORT_ENDPOINT");
        }
    }

    #[test]
    fn test_report_endpoint_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_REPORT_ENDPOINT");
        }
        let config = Config::from_env();
        assert_eq!(config.reports.endpoint, DEFAULT_REPORT_ENDPOINT);
    }

    #[test]
    fn test_report_timeout_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_REPORT_TIMEOUT_SECS", "15");
        }
        assert_eq!(Config::from_env().reports.timeout_secs, Some(15));

        unsafe {
            std::env::set_var("MCP_REPORT_TIMEOUT_SECS", "soon");
        }
        assert_eq!(Config::from_env().reports.timeout_secs, None);

        unsafe {
            std::env::remove_var("MCP_REPORT_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_default_has_no_timeout() {
        let config = Config::default();
        assert!(config.reports.timeout_secs.is_none());
        assert_eq!(config.logging.level, "info");
    }
}
