//! Endpoint group update tool.
//!
//! Partial update with one caveat inherited from the API's shape: the
//! endpoint list can only be replaced wholesale. Whenever `host` is
//! supplied the entire single-element endpoint descriptor is rebuilt,
//! filling unset sub-fields with documented defaults. A single endpoint
//! sub-field cannot be patched without restating the rest.

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

/// Parameters for updating an endpoint group. All fields other than the
/// group id are optional; omitted fields are left untouched on the server.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateEndpointGroupParams {
    /// The group ID of the endpoint group to update.
    pub groupid: i64,

    /// New name for the endpoint group (optional).
    #[serde(default)]
    pub name: Option<String>,

    /// New hostname or IP address of the endpoint (optional; supplying it
    /// rebuilds the whole endpoint descriptor).
    #[serde(default)]
    pub host: Option<String>,

    /// New port number for the endpoint (optional, default 5060 when the
    /// endpoint is rebuilt).
    #[serde(default)]
    pub port: Option<i64>,

    /// New authentication type - 'ip' or 'userpwd' (optional).
    #[serde(default)]
    pub auth_type: Option<String>,

    /// New description for the endpoint (optional).
    #[serde(default)]
    pub description: Option<String>,

    /// New relative weight for load balancing (optional, default 1 when the
    /// endpoint is rebuilt).
    #[serde(default)]
    pub rweight: Option<i64>,

    /// New keepalive interval in seconds (optional, default 0 when the
    /// endpoint is rebuilt).
    #[serde(default)]
    pub keepalive: Option<i64>,

    /// New number of digits to strip from dialed numbers (optional).
    #[serde(default)]
    pub strip: Option<i64>,

    /// New prefix to add to dialed numbers (optional).
    #[serde(default)]
    pub prefix: Option<String>,

    /// Email for over-max-call-limit notifications (optional).
    #[serde(default)]
    pub notification_email: Option<String>,

    /// Email for endpoint failure notifications (optional).
    #[serde(default)]
    pub endpointfailure_email: Option<String>,
}

/// Endpoint group update tool.
pub struct UpdateEndpointGroupTool;

impl UpdateEndpointGroupTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_endpoint_group";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update an existing endpoint group in dSIPRouter. \
        Only provided fields are updated; supplying host replaces the whole endpoint entry.";

    /// Build the request payload containing only the supplied keys.
    fn build_payload(params: &UpdateEndpointGroupParams) -> Value {
        let mut data = Map::new();

        if let Some(name) = &params.name {
            data.insert("name".to_string(), json!(name));
        }
        if let Some(auth_type) = &params.auth_type {
            data.insert("auth".to_string(), json!({ "type": auth_type }));
        }
        if let Some(host) = &params.host {
            let endpoint = json!({
                "host": host,
                "port": params.port.unwrap_or(5060),
                "signalling": "proxy",
                "media": "proxy",
                "description": params.description.clone().unwrap_or_default(),
                "rweight": params.rweight.unwrap_or(1),
                "keepalive": params.keepalive.unwrap_or(0),
            });
            data.insert("endpoints".to_string(), json!([endpoint]));
        }
        if let Some(strip) = params.strip {
            data.insert("strip".to_string(), json!(strip));
        }
        if let Some(prefix) = &params.prefix {
            data.insert("prefix".to_string(), json!(prefix));
        }
        if params.notification_email.is_some() || params.endpointfailure_email.is_some() {
            let mut notifications = Map::new();
            if let Some(email) = &params.notification_email {
                notifications.insert("overmaxcalllimit".to_string(), json!(email));
            }
            if let Some(email) = &params.endpointfailure_email {
                notifications.insert("endpointfailure".to_string(), json!(email));
            }
            data.insert("notifications".to_string(), Value::Object(notifications));
        }

        Value::Object(data)
    }

    /// Execute the tool logic.
    pub async fn execute(params: &UpdateEndpointGroupParams, config: &Config) -> CallToolResult {
        info!("Updating endpoint group {}", params.groupid);
        let data = Self::build_payload(params);
        match connect(config) {
            Ok(client) => dsip_result(client.update_endpoint_group(params.groupid, &data).await),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: UpdateEndpointGroupParams =
            serde_json::from_value(arguments).map_err(|e| e.to_string())?;
        let result = Self::execute(&params, &config).await;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateEndpointGroupParams>(),
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
                let params: UpdateEndpointGroupParams =
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

    fn params(json: &str) -> UpdateEndpointGroupParams {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_unset_fields_omitted() {
        let payload = UpdateEndpointGroupTool::build_payload(&params(
            r#"{"groupid": 3, "name": "pbx-west"}"#,
        ));
        let keys: Vec<&String> = payload.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["name"]);
    }

    #[test]
    fn test_host_rebuilds_full_endpoint_entry() {
        let payload = UpdateEndpointGroupTool::build_payload(&params(
            r#"{"groupid": 3, "host": "10.0.0.9"}"#,
        ));
        let endpoint = &payload["endpoints"][0];
        assert_eq!(endpoint["host"], "10.0.0.9");
        assert_eq!(endpoint["port"], 5060);
        assert_eq!(endpoint["signalling"], "proxy");
        assert_eq!(endpoint["media"], "proxy");
        assert_eq!(endpoint["description"], "");
        assert_eq!(endpoint["rweight"], 1);
        assert_eq!(endpoint["keepalive"], 0);
    }

    #[test]
    fn test_port_without_host_is_dropped() {
        // The endpoint list is only rebuilt when host is supplied; a bare
        // port has nothing to attach to.
        let payload = UpdateEndpointGroupTool::build_payload(&params(
            r#"{"groupid": 3, "port": 5080}"#,
        ));
        assert!(payload.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_notifications_contain_only_set_keys() {
        let payload = UpdateEndpointGroupTool::build_payload(&params(
            r#"{"groupid": 3, "notification_email": "noc@example.com"}"#,
        ));
        let notifications = payload["notifications"].as_object().unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications["overmaxcalllimit"], "noc@example.com");
    }

    #[test]
    fn test_auth_type_wrapped_in_object() {
        let payload = UpdateEndpointGroupTool::build_payload(&params(
            r#"{"groupid": 3, "auth_type": "userpwd"}"#,
        ));
        assert_eq!(payload["auth"]["type"], "userpwd");
    }

    #[test]
    fn test_zero_strip_is_sent() {
        let payload = UpdateEndpointGroupTool::build_payload(&params(
            r#"{"groupid": 3, "strip": 0}"#,
        ));
        assert_eq!(payload["strip"], 0);
    }
}
