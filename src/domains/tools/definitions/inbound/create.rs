//! Inbound mapping creation tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

use super::super::common::{connect, dsip_result, error_result};
use super::group_ref;
use crate::core::config::Config;

/// Parameters for creating an inbound mapping.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateInboundMappingParams {
    /// The DID (phone number) to route.
    pub did: String,

    /// The endpoint group ID to route calls to.
    pub groupid: i64,
}

/// Inbound mapping creation tool.
pub struct CreateInboundMappingTool;

impl CreateInboundMappingTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_inbound_mapping";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new inbound DID mapping in dSIPRouter, \
        routing calls for the DID to an endpoint group.";

    /// Build the creation payload with the group encoded as a `#` reference.
    fn build_payload(params: &CreateInboundMappingParams) -> Value {
        json!({
            "did": params.did,
            "servers": group_ref(params.groupid),
        })
    }

    /// Execute the tool logic.
    pub async fn execute(params: &CreateInboundMappingParams, config: &Config) -> CallToolResult {
        info!(
            "Creating inbound mapping {} -> group {}",
            params.did, params.groupid
        );
        let data = Self::build_payload(params);
        match connect(config) {
            Ok(client) => dsip_result(client.create_inbound_mapping(&data).await),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: CreateInboundMappingParams =
            serde_json::from_value(arguments).map_err(|e| e.to_string())?;
        let result = Self::execute(&params, &config).await;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateInboundMappingParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: CreateInboundMappingParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_uses_group_reference_syntax() {
        let params = CreateInboundMappingParams {
            did: "5551234567".to_string(),
            groupid: 3,
        };
        let payload = CreateInboundMappingTool::build_payload(&params);
        assert_eq!(payload["did"], "5551234567");
        assert_eq!(payload["servers"], "#3");
    }

    #[test]
    fn test_payload_has_no_extra_keys() {
        let params = CreateInboundMappingParams {
            did: "5551234567".to_string(),
            groupid: 3,
        };
        let payload = CreateInboundMappingTool::build_payload(&params);
        assert_eq!(payload.as_object().unwrap().len(), 2);
    }
}
