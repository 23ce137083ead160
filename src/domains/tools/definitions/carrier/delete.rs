//! Carrier group deletion tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::super::common::{connect, dsip_result, error_result};
use crate::core::config::Config;

/// Parameters for deleting a carrier group.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteCarrierGroupParams {
    /// The gateway group ID of the carrier to delete.
    pub gwgroupid: i64,
}

/// Carrier group deletion tool.
pub struct DeleteCarrierGroupTool;

impl DeleteCarrierGroupTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_carrier_group";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a carrier group from dSIPRouter.";

    /// Execute the tool logic.
    pub async fn execute(params: &DeleteCarrierGroupParams, config: &Config) -> CallToolResult {
        info!("Deleting carrier group {}", params.gwgroupid);
        match connect(config) {
            Ok(client) => dsip_result(client.delete_carrier_group(params.gwgroupid).await),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: DeleteCarrierGroupParams =
            serde_json::from_value(arguments).map_err(|e| e.to_string())?;
        let result = Self::execute(&params, &config).await;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DeleteCarrierGroupParams>(),
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
                let params: DeleteCarrierGroupParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}
