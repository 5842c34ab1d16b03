//! MAU lookup tool.
//!
//! Answers from a small static table; no network call is made.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use super::common::{parse_arguments, text_result};

/// Known monthly active users, keyed by lower-cased client name.
const MAU_TABLE: [(&str, u64); 2] = [("dream11", 14_050_600), ("swiggy", 9_875_000)];

pub const UNKNOWN_CLIENT: &str = "Unable to get MAU data for the specified client.";

/// Parameters for the MAU lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MauLookupParams {
    #[schemars(description = "Client name (case-insensitive)")]
    pub client_name: String,
}

/// Lookup outcome, serialized as `{"mau": n}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MauLookup {
    Found { mau: u64 },
    NotFound { error: &'static str },
}

pub struct MauLookupTool;

impl MauLookupTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getMauDataByClientName";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get monthly active users (MAU) for a client by name. Returns a JSON object with a 'mau' field, or an 'error' field for unknown clients.";

    pub fn lookup(client_name: &str) -> MauLookup {
        let key = client_name.to_lowercase();
        MAU_TABLE
            .iter()
            .find(|(name, _)| *name == key)
            .map(|&(_, mau)| MauLookup::Found { mau })
            .unwrap_or(MauLookup::NotFound {
                error: UNKNOWN_CLIENT,
            })
    }

    #[instrument(skip_all, fields(client_name = %params.client_name))]
    pub fn execute(params: &MauLookupParams) -> CallToolResult {
        info!("MAU lookup requested");

        let lookup = Self::lookup(&params.client_name);
        match serde_json::to_string(&lookup) {
            Ok(text) => text_result(text),
            Err(e) => {
                error!("Failed to serialize MAU lookup: {}", e);
                text_result(format!(r#"{{"error":"{}"}}"#, UNKNOWN_CLIENT))
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<MauLookupParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            async move {
                let params: MauLookupParams = parse_arguments(args)?;
                Ok::<_, McpError>(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    #[test]
    fn test_lookup_known_client() {
        assert_eq!(
            MauLookupTool::lookup("dream11"),
            MauLookup::Found { mau: 14_050_600 }
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            MauLookupTool::lookup("Dream11"),
            MauLookupTool::lookup("DREAM11")
        );
        assert!(matches!(MauLookupTool::lookup("Swiggy"), MauLookup::Found { .. }));
    }

    #[test]
    fn test_lookup_unknown_client() {
        assert_eq!(
            MauLookupTool::lookup("acme"),
            MauLookup::NotFound {
                error: UNKNOWN_CLIENT
            }
        );
    }

    #[test]
    fn test_execute_renders_json() {
        let found = MauLookupTool::execute(&MauLookupParams {
            client_name: "dream11".to_string(),
        });
        assert_eq!(result_text(&found), r#"{"mau":14050600}"#);

        let missing = MauLookupTool::execute(&MauLookupParams {
            client_name: "acme".to_string(),
        });
        assert!(!missing.is_error.unwrap_or(false));
        assert_eq!(
            result_text(&missing),
            r#"{"error":"Unable to get MAU data for the specified client."}"#
        );
    }

    #[test]
    fn test_params_use_camel_case() {
        let params: MauLookupParams = serde_json::from_str(r#"{"clientName": "dream11"}"#).unwrap();
        assert_eq!(params.client_name, "dream11");
    }
}
