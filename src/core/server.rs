//! MCP Server implementation and lifecycle management.
//!
//! The server only exposes tools. Routes are built in
//! `domains/tools/router.rs` from the channel tool table; every route shares
//! the same [`ReportSource`].

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Error;
use crate::domains::reports::{ReportClient, ReportSource};
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server backed by the HTTP report client.
    pub fn new(config: Config) -> super::error::Result<Self> {
        if config.reports.endpoint.trim().is_empty() {
            return Err(Error::config("report endpoint must not be empty"));
        }

        let client = ReportClient::new(&config.reports)?;
        info!("Report endpoint: {}", client.endpoint());

        Ok(Self::with_report_source(config, Arc::new(client)))
    }

    /// Create a server whose tools read reports from `reports`.
    pub fn with_report_source(config: Config, reports: Arc<dyn ReportSource>) -> Self {
        info!("Registered tools: {}", ToolRegistry::tool_names().join(", "));

        Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(reports),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Looks up broadcast campaign sent counts per channel (email, sms, apn, whatsapp) \
                 for a numeric client ID, and MAU figures by client name."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::reports::testing::StaticReportSource;

    #[test]
    fn test_new_rejects_empty_endpoint() {
        let mut config = Config::default();
        config.reports.endpoint = "  ".to_string();
        assert!(matches!(McpServer::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn test_server_exposes_all_tools() {
        let server =
            McpServer::with_report_source(Config::default(), Arc::new(StaticReportSource::new()));
        assert_eq!(server.tool_router.list_all().len(), 6);
        assert_eq!(server.name(), "campaign-sent-count-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_server_info_enables_tools_only() {
        let server =
            McpServer::with_report_source(Config::default(), Arc::new(StaticReportSource::new()));
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }
}
