//! Inbound mapping update tool.

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
use super::group_ref;
use crate::core::config::Config;

/// Parameters for updating an inbound mapping. The DID and target group are
/// optional; omitted fields are left untouched on the server.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateInboundMappingParams {
    /// The rule ID of the inbound mapping to update.
    pub ruleid: i64,

    /// New DID (phone number) for the mapping (optional).
    #[serde(default)]
    pub did: Option<String>,

    /// New endpoint group ID to route calls to (optional).
    #[serde(default)]
    pub groupid: Option<i64>,
}

/// Inbound mapping update tool.
pub struct UpdateInboundMappingTool;

impl UpdateInboundMappingTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_inbound_mapping";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Update an existing inbound mapping in dSIPRouter. Only provided fields are updated.";

    /// Build the request payload containing only the supplied keys.
    fn build_payload(params: &UpdateInboundMappingParams) -> Value {
        let mut data = Map::new();
        if let Some(did) = &params.did {
            data.insert("did".to_string(), json!(did));
        }
        if let Some(groupid) = params.groupid {
            data.insert("servers".to_string(), json!(group_ref(groupid)));
        }
        Value::Object(data)
    }

    /// Execute the tool logic.
    pub async fn execute(params: &UpdateInboundMappingParams, config: &Config) -> CallToolResult {
        info!("Updating inbound mapping rule {}", params.ruleid);
        let data = Self::build_payload(params);
        match connect(config) {
            Ok(client) => dsip_result(client.update_inbound_mapping(params.ruleid, &data).await),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: UpdateInboundMappingParams =
            serde_json::from_value(arguments).map_err(|e| e.to_string())?;
        let result = Self::execute(&params, &config).await;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateInboundMappingParams>(),
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
                let params: UpdateInboundMappingParams =
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
        let params: UpdateInboundMappingParams =
            serde_json::from_str(r#"{"ruleid": 8}"#).unwrap();
        let payload = UpdateInboundMappingTool::build_payload(&params);
        assert!(payload.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_groupid_encoded_as_reference() {
        let params: UpdateInboundMappingParams =
            serde_json::from_str(r#"{"ruleid": 8, "groupid": 12}"#).unwrap();
        let payload = UpdateInboundMappingTool::build_payload(&params);
        assert_eq!(payload["servers"], "#12");
        assert!(payload.get("did").is_none());
    }

    #[test]
    fn test_did_only_update() {
        let params: UpdateInboundMappingParams =
            serde_json::from_str(r#"{"ruleid": 8, "did": "5559876543"}"#).unwrap();
        let payload = UpdateInboundMappingTool::build_payload(&params);
        assert_eq!(payload["did"], "5559876543");
        assert!(payload.get("servers").is_none());
    }
}
