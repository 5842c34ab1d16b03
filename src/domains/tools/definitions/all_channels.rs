//! Aggregate sent-count tool.
//!
//! Looks up several channels for one client and reports one line per channel.
//! Channels are fetched one after another, in the order requested.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::domains::reports::{
    Channel, ReportRequest, ReportSource, ReportWindow, lookup_sent_count,
};

use super::common::{format_summary_header, format_summary_line, parse_arguments, text_result};

/// Parameters for the aggregate lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllChannelSentCountsParams {
    /// Client identifier.
    #[schemars(description = "Numeric client ID")]
    pub client_id: u64,

    /// Channels to report, in output order. Empty or absent means all.
    #[serde(default)]
    #[schemars(
        description = "Channels to look up, in output order (email, sms, apn, whatsapp). Defaults to all four."
    )]
    pub channels: Vec<Channel>,

    #[serde(flatten)]
    pub window: ReportWindow,
}

impl AllChannelSentCountsParams {
    /// Requested channels, falling back to every channel.
    pub fn channels(&self) -> &[Channel] {
        if self.channels.is_empty() {
            let all: &'static [Channel] = &Channel::ALL;
            all
        } else {
            self.channels.as_slice()
        }
    }
}

pub struct AllChannelSentCountsTool;

impl AllChannelSentCountsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getAllChannelSentCounts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get broadcast sent counts for a client ID across several channels \
         (email, sms, apn, whatsapp), one line per channel. Optional channel subset and date range \
         (defaults: 2025-03-18 00:00:00 to 2025-03-18 23:59:59, Asia/Jakarta).";

    #[instrument(skip_all, fields(client_id = params.client_id))]
    pub async fn execute(
        reports: &dyn ReportSource,
        params: &AllChannelSentCountsParams,
    ) -> CallToolResult {
        let channels = params.channels();
        info!("Sent counts requested for {} channel(s)", channels.len());

        let mut lines = Vec::with_capacity(channels.len() + 1);
        lines.push(format_summary_header(params.client_id));

        for &channel in channels {
            let request = ReportRequest::new(params.client_id, channel, params.window.clone());
            let result = lookup_sent_count(reports, &request).await;
            debug!(channel = %channel, available = result.value().is_some(), "Channel resolved");
            lines.push(format_summary_line(channel, &result));
        }

        text_result(lines.join("\n"))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AllChannelSentCountsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(reports: Arc<dyn ReportSource>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let reports = reports.clone();
            async move {
                let params: AllChannelSentCountsParams = parse_arguments(args)?;
                Ok::<_, McpError>(Self::execute(reports.as_ref(), &params).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::reports::ReportResponse;
    use crate::domains::reports::testing::StaticReportSource;
    use crate::domains::tools::definitions::common::result_text;

    fn params(client_id: u64, channels: Vec<Channel>) -> AllChannelSentCountsParams {
        AllChannelSentCountsParams {
            client_id,
            channels,
            window: ReportWindow::default(),
        }
    }

    #[test]
    fn test_params_default_to_all_channels() {
        let params: AllChannelSentCountsParams =
            serde_json::from_str(r#"{"clientId": 55}"#).unwrap();
        assert_eq!(params.channels(), &Channel::ALL);
        assert_eq!(params.window, ReportWindow::default());
    }

    #[test]
    fn test_params_keep_caller_order() {
        let params: AllChannelSentCountsParams =
            serde_json::from_str(r#"{"clientId": 55, "channels": ["whatsapp", "email"]}"#).unwrap();
        assert_eq!(params.channels(), &[Channel::Whatsapp, Channel::Email]);
    }

    #[test]
    fn test_params_reject_unknown_channel() {
        let parsed = serde_json::from_str::<AllChannelSentCountsParams>(
            r#"{"clientId": 55, "channels": ["pigeon"]}"#,
        );
        assert!(parsed.is_err());
    }

    #[tokio::test]
    async fn test_mixed_success_and_failure() {
        let source = StaticReportSource::new().with_sent(Channel::Email, 100);

        let result = AllChannelSentCountsTool::execute(
            &source,
            &params(55, vec![Channel::Email, Channel::Sms]),
        )
        .await;

        assert!(!result.is_error.unwrap_or(false));
        let lines: Vec<_> = result_text(&result).lines().collect();
        assert_eq!(
            lines,
            vec![
                "📦 Sent counts for client ID 55:",
                "✅ EMAIL: 100",
                "⚠️ SMS failed. Reason: series array is missing or not in expected format.",
            ]
        );
    }

    #[tokio::test]
    async fn test_fetches_sequentially_in_requested_order() {
        let source = StaticReportSource::new()
            .with_sent(Channel::Sms, 2)
            .with(Channel::Apn, ReportResponse::failure("API error: 500"));

        let result = AllChannelSentCountsTool::execute(
            &source,
            &params(7, vec![Channel::Apn, Channel::Sms, Channel::Email]),
        )
        .await;

        let order: Vec<_> = source.calls().iter().map(|r| r.channel).collect();
        assert_eq!(order, vec![Channel::Apn, Channel::Sms, Channel::Email]);

        let lines: Vec<_> = result_text(&result).lines().collect();
        assert_eq!(lines[1], "⚠️ APN failed. Reason: API error: 500");
        assert_eq!(lines[2], "✅ SMS: 2");
        assert!(lines[3].starts_with("⚠️ EMAIL failed."));
    }

    #[tokio::test]
    async fn test_default_channels_cover_all() {
        let source = StaticReportSource::new();

        let result = AllChannelSentCountsTool::execute(&source, &params(1, Vec::new())).await;

        assert_eq!(source.calls().len(), 4);
        assert_eq!(result_text(&result).lines().count(), 5);
    }
}
