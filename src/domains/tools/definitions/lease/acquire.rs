//! Endpoint lease acquisition tool.

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

/// Parameters for acquiring an endpoint lease.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetEndpointLeaseParams {
    /// Time-to-live in minutes for the lease.
    pub ttl: i64,

    /// Email address associated with the lease.
    pub email: String,
}

/// Endpoint lease acquisition tool.
pub struct GetEndpointLeaseTool;

impl GetEndpointLeaseTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_endpoint_lease";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a new endpoint lease from dSIPRouter. \
        The lease grants temporary endpoint registration for the given TTL in minutes.";

    /// Execute the tool logic.
    pub async fn execute(params: &GetEndpointLeaseParams, config: &Config) -> CallToolResult {
        info!("Acquiring endpoint lease (ttl {} min)", params.ttl);
        match connect(config) {
            Ok(client) => dsip_result(client.get_endpoint_lease(params.ttl, &params.email).await),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: GetEndpointLeaseParams =
            serde_json::from_value(arguments).map_err(|e| e.to_string())?;
        let result = Self::execute(&params, &config).await;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetEndpointLeaseParams>(),
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
                let params: GetEndpointLeaseParams =
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
    fn test_params_require_ttl_and_email() {
        let params: Result<GetEndpointLeaseParams, _> =
            serde_json::from_str(r#"{"ttl": 60, "email": "ops@example.com"}"#);
        assert!(params.is_ok());

        let missing: Result<GetEndpointLeaseParams, _> = serde_json::from_str(r#"{"ttl": 60}"#);
        assert!(missing.is_err());
    }
}
