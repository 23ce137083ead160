//! Carrier group update tool.
//!
//! Partial update semantics: only keys the caller explicitly supplied are
//! sent, so unset fields never overwrite server-side values.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::info;

use super::super::common::{connect, dsip_result, error_result};
use crate::core::config::Config;

/// Parameters for updating a carrier group. All fields other than the
/// group id are optional; omitted fields are left untouched on the server.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateCarrierGroupParams {
    /// The gateway group ID of the carrier to update.
    pub gwgroupid: i64,

    /// New name for the carrier group (optional).
    #[serde(default)]
    pub name: Option<String>,

    /// New IP address of the carrier (optional).
    #[serde(default)]
    pub ip_addr: Option<String>,

    /// New number of digits to strip from dialed numbers (optional).
    #[serde(default)]
    pub strip: Option<i64>,

    /// New prefix to add to dialed numbers (optional).
    #[serde(default)]
    pub prefix: Option<String>,
}

/// Carrier group update tool.
pub struct UpdateCarrierGroupTool;

impl UpdateCarrierGroupTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_carrier_group";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Update an existing carrier group in dSIPRouter. Only provided fields are updated.";

    /// Build the request payload containing only the supplied keys.
    fn build_payload(params: &UpdateCarrierGroupParams) -> Value {
        let mut data = Map::new();
        if let Some(name) = &params.name {
            data.insert("name".to_string(), json!(name));
        }
        if let Some(ip_addr) = &params.ip_addr {
            data.insert("ip_addr".to_string(), json!(ip_addr));
        }
        if let Some(strip) = params.strip {
            data.insert("strip".to_string(), json!(strip));
        }
        if let Some(prefix) = &params.prefix {
            data.insert("prefix".to_string(), json!(prefix));
        }
        Value::Object(data)
    }

    /// Execute the tool logic.
    pub async fn execute(params: &UpdateCarrierGroupParams, config: &Config) -> CallToolResult {
        info!("Updating carrier group {}", params.gwgroupid);
        let data = Self::build_payload(params);
        match connect(config) {
            Ok(client) => dsip_result(client.update_carrier_group(params.gwgroupid, &data).await),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: UpdateCarrierGroupParams =
            serde_json::from_value(arguments).map_err(|e| e.to_string())?;
        let result = Self::execute(&params, &config).await;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateCarrierGroupParams>(),
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
                let params: UpdateCarrierGroupParams =
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
    fn test_unset_fields_omitted() {
        let params: UpdateCarrierGroupParams =
            serde_json::from_str(r#"{"gwgroupid": 12, "name": "new-name"}"#).unwrap();
        let payload = UpdateCarrierGroupTool::build_payload(&params);
        let keys: Vec<&String> = payload.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["name"]);
    }

    #[test]
    fn test_zero_strip_is_sent() {
        // 0 is a valid value, distinct from "unset".
        let params: UpdateCarrierGroupParams =
            serde_json::from_str(r#"{"gwgroupid": 12, "strip": 0}"#).unwrap();
        let payload = UpdateCarrierGroupTool::build_payload(&params);
        assert_eq!(payload["strip"], 0);
    }

    #[test]
    fn test_missing_strip_is_omitted() {
        let params: UpdateCarrierGroupParams =
            serde_json::from_str(r#"{"gwgroupid": 12, "ip_addr": "203.0.113.7"}"#).unwrap();
        let payload = UpdateCarrierGroupTool::build_payload(&params);
        assert!(payload.get("strip").is_none());
        assert_eq!(payload["ip_addr"], "203.0.113.7");
    }

    #[test]
    fn test_empty_update_sends_empty_object() {
        let params: UpdateCarrierGroupParams =
            serde_json::from_str(r#"{"gwgroupid": 12}"#).unwrap();
        let payload = UpdateCarrierGroupTool::build_payload(&params);
        assert!(payload.as_object().unwrap().is_empty());
    }
}
