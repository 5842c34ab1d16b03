//! Per-channel sent-count tool.
//!
//! One route is created per entry of the channel tool table (see
//! `registry.rs`); all of them share this implementation.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::reports::{
    Channel, ReportRequest, ReportSource, ReportWindow, lookup_sent_count,
};
use crate::domains::tools::ChannelToolDescriptor;

use super::common::{format_channel_line, parse_arguments, text_result};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for a single-channel sent-count lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSentCountParams {
    /// Client identifier.
    #[schemars(description = "Numeric client ID")]
    pub client_id: u64,

    #[serde(flatten)]
    pub window: ReportWindow,
}

// ============================================================================
// Tool Definition
// ============================================================================

pub struct ChannelSentCountTool;

impl ChannelSentCountTool {
    /// Run the lookup for `channel` and format the result.
    #[instrument(skip_all, fields(channel = %channel, client_id = params.client_id))]
    pub async fn execute(
        reports: &dyn ReportSource,
        channel: Channel,
        params: &ChannelSentCountParams,
    ) -> CallToolResult {
        info!("Sent count requested");

        let request = ReportRequest::new(params.client_id, channel, params.window.clone());
        let result = lookup_sent_count(reports, &request).await;

        text_result(format_channel_line(channel, params.client_id, &result))
    }

    /// Create a Tool model for one channel (metadata).
    pub fn to_tool(descriptor: &ChannelToolDescriptor) -> Tool {
        Tool {
            name: descriptor.name.into(),
            description: Some(descriptor.description.into()),
            input_schema: cached_schema_for_type::<ChannelSentCountParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for one channel.
    pub fn create_route<S>(
        descriptor: &'static ChannelToolDescriptor,
        reports: Arc<dyn ReportSource>,
    ) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(descriptor), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let reports = reports.clone();
            async move {
                let params: ChannelSentCountParams = parse_arguments(args)?;
                Ok::<_, McpError>(Self::execute(reports.as_ref(), descriptor.channel, &params).await)
            }
            .boxed()
        })
    }
}
