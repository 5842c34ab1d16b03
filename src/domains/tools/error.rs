//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors raised before a tool's pipeline runs.
///
/// Lookup failures inside a tool are reported as text, never through this type.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::InvalidArguments(_) => McpError::invalid_params(err.to_string(), None),
        }
    }
}
