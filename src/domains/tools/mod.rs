//! Tools domain module.
//!
//! Tools are the functions MCP clients call. Every sent-count tool runs the
//! reports pipeline (fetch, then extract) and answers with a single text block.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Static channel tool table and tool listing
//! - `router.rs` - ToolRouter builder for STDIO/TCP transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a Channel
//!
//! Add the variant to `Channel` and a row to `CHANNEL_TOOLS`; the router
//! picks it up without further changes.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::{CHANNEL_TOOLS, ChannelToolDescriptor, ToolRegistry};
pub use router::build_tool_router;
