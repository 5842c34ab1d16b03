//! Report client error types.

use thiserror::Error;

/// Errors raised while talking to the campaign summary reports service.
///
/// Fetch errors never escape a tool call: the client folds them into a
/// [`ReportResponse::Failure`](super::ReportResponse::Failure) whose message is
/// this error's `Display` output.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The service answered with a non-success HTTP status.
    #[error("API error: {0}")]
    Status(u16),

    /// DNS, connect, timeout or reset before a response was read.
    #[error("{0}")]
    Network(String),

    /// A success response whose body is not JSON.
    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ReportError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_decode() {
            Self::InvalidBody(err.to_string())
        } else {
            Self::Network(error_chain(&err))
        }
    }
}

/// Render an error followed by each of its causes, joined by `": "`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.ends_with(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct Outer(#[source] Middle);

    #[derive(Debug, Error)]
    #[error("tcp connect error")]
    struct Middle(#[source] std::io::Error);

    #[test]
    fn test_error_chain_includes_causes() {
        let err = Outer(Middle(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        )));
        assert_eq!(
            error_chain(&err),
            "error sending request: tcp connect error: Connection refused"
        );
    }

    #[test]
    fn test_error_chain_without_source() {
        let err = std::io::Error::other("timed out");
        assert_eq!(error_chain(&err), "timed out");
    }
}
