//! Tool Router - builds the rmcp ToolRouter.
//!
//! Channel routes come from iterating `CHANNEL_TOOLS`; the aggregate and MAU
//! tools are added after them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::reports::ReportSource;

use super::definitions::{AllChannelSentCountsTool, ChannelSentCountTool, MauLookupTool};
use super::registry::CHANNEL_TOOLS;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(reports: Arc<dyn ReportSource>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    CHANNEL_TOOLS
        .iter()
        .fold(ToolRouter::new(), |router, descriptor| {
            router.with_route(ChannelSentCountTool::create_route(descriptor, reports.clone()))
        })
        .with_route(AllChannelSentCountsTool::create_route(reports))
        .with_route(MauLookupTool::create_route())
}
