//! Carrier group creation tool.

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
use crate::core::config::Config;

/// Parameters for creating a carrier group.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateCarrierGroupParams {
    /// Name for the carrier group.
    pub name: String,

    /// IP address of the carrier.
    pub ip_addr: String,

    /// Number of digits to strip from dialed numbers (default: 0).
    #[serde(default)]
    pub strip: i64,

    /// Prefix to add to dialed numbers (default: "").
    #[serde(default)]
    pub prefix: String,
}

/// Carrier group creation tool.
pub struct CreateCarrierGroupTool;

impl CreateCarrierGroupTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_carrier_group";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new carrier group in dSIPRouter. \
        The gateway group ID is assigned by the server.";

    /// Build the request payload. Creation always sends all four keys with
    /// their documented defaults.
    fn build_payload(params: &CreateCarrierGroupParams) -> Value {
        json!({
            "name": params.name,
            "ip_addr": params.ip_addr,
            "strip": params.strip,
            "prefix": params.prefix,
        })
    }

    /// Execute the tool logic.
    pub async fn execute(params: &CreateCarrierGroupParams, config: &Config) -> CallToolResult {
        info!("Creating carrier group '{}'", params.name);
        let data = Self::build_payload(params);
        match connect(config) {
            Ok(client) => dsip_result(client.create_carrier_group(&data).await),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: CreateCarrierGroupParams =
            serde_json::from_value(arguments).map_err(|e| e.to_string())?;
        let result = Self::execute(&params, &config).await;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateCarrierGroupParams>(),
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
                let params: CreateCarrierGroupParams =
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
    fn test_payload_includes_defaults() {
        let params: CreateCarrierGroupParams =
            serde_json::from_str(r#"{"name": "acme", "ip_addr": "203.0.113.10"}"#).unwrap();
        let payload = CreateCarrierGroupTool::build_payload(&params);
        assert_eq!(payload["name"], "acme");
        assert_eq!(payload["ip_addr"], "203.0.113.10");
        assert_eq!(payload["strip"], 0);
        assert_eq!(payload["prefix"], "");
    }

    #[test]
    fn test_payload_with_explicit_values() {
        let params: CreateCarrierGroupParams = serde_json::from_str(
            r#"{"name": "acme", "ip_addr": "203.0.113.10", "strip": 2, "prefix": "9"}"#,
        )
        .unwrap();
        let payload = CreateCarrierGroupTool::build_payload(&params);
        assert_eq!(payload["strip"], 2);
        assert_eq!(payload["prefix"], "9");
    }
}
