//! Campaign sent-count MCP server.
//!
//! Exposes campaign sent-count lookups to MCP clients. Every lookup POSTs a
//! campaign summary report request for one client and channel, then reads the
//! `total_sent` series from the response.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**
//!   - **reports**: report client and sent-count extraction
//!   - **tools**: the MCP tools (one per channel, an aggregate, and a MAU lookup)
//!
//! # Example
//!
//! ```rust,no_run
//! use campaign_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
