//! Error types and handling for the MCP server.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
///
/// Only start-up and transport failures end up here; report lookups recover
/// inside the tools.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the reports domain.
    #[error("Report error: {0}")]
    Report(#[from] crate::domains::reports::ReportError),

    /// Error raised by the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
