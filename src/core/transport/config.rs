//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// TCP socket transport with JSON-RPC messages.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

#[cfg(feature = "tcp")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "tcp")]
fn default_port() -> u16 {
    3000
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    /// Read `MCP_TCP_HOST` / `MCP_TCP_PORT`, falling back to defaults.
    fn from_env() -> Self {
        let port = std::env::var("MCP_TCP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);
        let host = std::env::var("MCP_TCP_HOST").unwrap_or_else(|_| default_host());
        Self { port, host }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            return Self::Tcp(TcpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or tcp");
        }
    }
}

impl TransportConfig {
    /// Load transport config from `MCP_TRANSPORT` (`stdio` or `tcp`).
    ///
    /// Unknown or disabled transports fall back to the default.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig::from_env()),
            _ => Self::default(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
        }
    }
}
