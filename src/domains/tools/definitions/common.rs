//! Helpers shared by the tool definitions.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::de::DeserializeOwned;

use crate::domains::reports::{Channel, SentCountResult};
use crate::domains::tools::ToolError;

pub const SUCCESS_GLYPH: &str = "✅";
pub const WARNING_GLYPH: &str = "⚠️";
pub const SUMMARY_GLYPH: &str = "📦";

/// Deserialize rmcp call arguments into a tool's parameter struct.
pub fn parse_arguments<T: DeserializeOwned>(arguments: Option<JsonObject>) -> Result<T, ToolError> {
    let args = serde_json::Value::Object(arguments.unwrap_or_default());
    serde_json::from_value(args).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Create a success result with a single text block.
pub fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Line reported by a single-channel lookup.
pub fn format_channel_line(channel: Channel, client_id: u64, result: &SentCountResult) -> String {
    match result {
        SentCountResult::Value(sent) => format!(
            "{} {} sent count for client ID {} is {}.",
            SUCCESS_GLYPH,
            channel.label(),
            client_id,
            sent
        ),
        SentCountResult::Unavailable { reason } => format!(
            "{} Unable to retrieve {} sent count for client ID {}. Reason: {}",
            WARNING_GLYPH,
            channel.label(),
            client_id,
            reason
        ),
    }
}

/// Line reported for one channel of the aggregate lookup.
pub fn format_summary_line(channel: Channel, result: &SentCountResult) -> String {
    match result {
        SentCountResult::Value(sent) => {
            format!("{} {}: {}", SUCCESS_GLYPH, channel.label(), sent)
        }
        SentCountResult::Unavailable { reason } => format!(
            "{} {} failed. Reason: {}",
            WARNING_GLYPH,
            channel.label(),
            reason
        ),
    }
}

/// Header line of the aggregate lookup.
pub fn format_summary_header(client_id: u64) -> String {
    format!("{} Sent counts for client ID {}:", SUMMARY_GLYPH, client_id)
}

/// Pull the text out of a single-block tool result.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    #[test]
    fn test_format_channel_line_success() {
        let result = SentCountResult::Value(Number::from(4821));
        assert_eq!(
            format_channel_line(Channel::Email, 55, &result),
            "✅ EMAIL sent count for client ID 55 is 4821."
        );
    }

    #[test]
    fn test_format_channel_line_failure() {
        let result = SentCountResult::unavailable("Missing total_sent data.");
        assert_eq!(
            format_channel_line(Channel::Sms, 9, &result),
            "⚠️ Unable to retrieve SMS sent count for client ID 9. Reason: Missing total_sent data."
        );
    }

    #[test]
    fn test_format_summary_lines() {
        let ok = SentCountResult::Value(Number::from(100));
        let failed = SentCountResult::unavailable("API error: 500");
        assert_eq!(format_summary_line(Channel::Email, &ok), "✅ EMAIL: 100");
        assert_eq!(
            format_summary_line(Channel::Apn, &failed),
            "⚠️ APN failed. Reason: API error: 500"
        );
        assert_eq!(format_summary_header(3), "📦 Sent counts for client ID 3:");
    }

    #[test]
    fn test_parse_arguments_missing_required() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Params {
            name: String,
        }

        let err = parse_arguments::<Params>(None).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
