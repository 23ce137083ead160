//! Endpoint group creation tool.
//!
//! The API models a group as a list of endpoint descriptors; this tool
//! creates a single-endpoint group, wrapping the connection details in a
//! one-element list. The `auth.type` and `notifications` objects are always
//! emitted, with empty email strings when not supplied.

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

fn default_port() -> i64 {
    5060
}

fn default_auth_type() -> String {
    "ip".to_string()
}

fn default_rweight() -> i64 {
    1
}

/// Parameters for creating an endpoint group.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateEndpointGroupParams {
    /// Name for the endpoint group.
    pub name: String,

    /// Hostname or IP address of the endpoint.
    pub host: String,

    /// Port number for the endpoint (default: 5060).
    #[serde(default = "default_port")]
    pub port: i64,

    /// Authentication type - 'ip' or 'userpwd' (default: 'ip').
    #[serde(default = "default_auth_type")]
    pub auth_type: String,

    /// Description for the endpoint (default: same as name).
    #[serde(default)]
    pub description: String,

    /// Relative weight for load balancing (default: 1).
    #[serde(default = "default_rweight")]
    pub rweight: i64,

    /// Keepalive interval in seconds (default: 0, disabled).
    #[serde(default)]
    pub keepalive: i64,

    /// Number of digits to strip from dialed numbers (default: 0).
    #[serde(default)]
    pub strip: i64,

    /// Prefix to add to dialed numbers (default: "").
    #[serde(default)]
    pub prefix: String,

    /// Email for over-max-call-limit notifications (default: "").
    #[serde(default)]
    pub notification_email: String,

    /// Email for endpoint failure notifications (default: "").
    #[serde(default)]
    pub endpointfailure_email: String,
}

/// Endpoint group creation tool.
pub struct CreateEndpointGroupTool;

impl CreateEndpointGroupTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_endpoint_group";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new endpoint group in dSIPRouter \
        with a single endpoint. Signalling and media are proxied through the platform.";

    /// Build the full creation payload.
    fn build_payload(params: &CreateEndpointGroupParams) -> Value {
        let description = if params.description.is_empty() {
            params.name.clone()
        } else {
            params.description.clone()
        };

        json!({
            "name": params.name,
            "auth": { "type": params.auth_type },
            "endpoints": [{
                "host": params.host,
                "port": params.port,
                "signalling": "proxy",
                "media": "proxy",
                "description": description,
                "rweight": params.rweight,
                "keepalive": params.keepalive,
            }],
            "strip": params.strip,
            "prefix": params.prefix,
            "notifications": {
                "overmaxcalllimit": params.notification_email,
                "endpointfailure": params.endpointfailure_email,
            },
        })
    }

    /// Execute the tool logic.
    pub async fn execute(params: &CreateEndpointGroupParams, config: &Config) -> CallToolResult {
        info!("Creating endpoint group '{}'", params.name);
        let data = Self::build_payload(params);
        match connect(config) {
            Ok(client) => dsip_result(client.create_endpoint_group(&data).await),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    pub async fn http_handler(
        arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, String> {
        let params: CreateEndpointGroupParams =
            serde_json::from_value(arguments).map_err(|e| e.to_string())?;
        let result = Self::execute(&params, &config).await;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateEndpointGroupParams>(),
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
                let params: CreateEndpointGroupParams =
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
    fn test_minimal_params_fill_documented_defaults() {
        let params: CreateEndpointGroupParams =
            serde_json::from_str(r#"{"name": "pbx-east", "host": "10.0.0.5"}"#).unwrap();
        let payload = CreateEndpointGroupTool::build_payload(&params);

        let endpoints = payload["endpoints"].as_array().unwrap();
        assert_eq!(endpoints.len(), 1);

        let endpoint = &endpoints[0];
        assert_eq!(endpoint["host"], "10.0.0.5");
        assert_eq!(endpoint["port"], 5060);
        assert_eq!(endpoint["signalling"], "proxy");
        assert_eq!(endpoint["media"], "proxy");
        assert_eq!(endpoint["description"], "pbx-east");
        assert_eq!(endpoint["rweight"], 1);
        assert_eq!(endpoint["keepalive"], 0);

        assert_eq!(payload["auth"]["type"], "ip");
        assert_eq!(payload["strip"], 0);
        assert_eq!(payload["prefix"], "");
    }

    #[test]
    fn test_notifications_always_present() {
        let params: CreateEndpointGroupParams =
            serde_json::from_str(r#"{"name": "pbx", "host": "10.0.0.5"}"#).unwrap();
        let payload = CreateEndpointGroupTool::build_payload(&params);
        assert_eq!(payload["notifications"]["overmaxcalllimit"], "");
        assert_eq!(payload["notifications"]["endpointfailure"], "");
    }

    #[test]
    fn test_explicit_description_not_overridden() {
        let params: CreateEndpointGroupParams = serde_json::from_str(
            r#"{"name": "pbx", "host": "10.0.0.5", "description": "east coast cluster"}"#,
        )
        .unwrap();
        let payload = CreateEndpointGroupTool::build_payload(&params);
        assert_eq!(payload["endpoints"][0]["description"], "east coast cluster");
    }

    #[test]
    fn test_userpwd_auth_type() {
        let params: CreateEndpointGroupParams = serde_json::from_str(
            r#"{"name": "pbx", "host": "10.0.0.5", "auth_type": "userpwd"}"#,
        )
        .unwrap();
        let payload = CreateEndpointGroupTool::build_payload(&params);
        assert_eq!(payload["auth"]["type"], "userpwd");
    }
}
