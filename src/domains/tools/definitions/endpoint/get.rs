//! Endpoint group detail tool.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

use super::super::common::{connect, dsip_result, error_result};
use crate::core::config::Config;

/// Parameters for retrieving an endpoint group.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetEndpointGroupParams {
    /// The group ID of the endpoint group to retrieve.
    pub groupid: i64,
}

/// Endpoint group detail tool.
pub struct GetEndpointGroupTool;

impl GetEndpointGroupTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_endpoint_group";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details of a specific endpoint group.";

    /// Execute the tool logic.
    pub async fn execute(params: &GetEndpointGroupParams, config: &Config) -> CallToolResult {
        match connect(config) {
            Ok(client) => dsip_result(client.get_endpoint_group(params.groupid).await),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: GetEndpointGroupParams =
            serde_json::from_value(arguments).map_err(|e| e.to_string())?;
        let result = Self::execute(&params, &config).await;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetEndpointGroupParams>(),
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
                let params: GetEndpointGroupParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}
