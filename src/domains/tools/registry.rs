//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls
//! - Tool metadata for listing

use std::sync::Arc;
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;

use super::definitions::{
    CreateCarrierGroupTool, CreateEndpointGroupTool, CreateInboundMappingTool,
    DeleteCarrierGroupTool, DeleteEndpointGroupTool, DeleteInboundMappingTool,
    GetCarrierGroupTool, GetCdrsByEndpointGroupTool, GetEndpointGroupTool, GetEndpointLeaseTool,
    GetInboundMappingTool, GetKamailioStatsTool, ListCarrierGroupsTool, ListEndpointGroupsTool,
    ListInboundMappingsTool, ReloadKamailioTool, RevokeEndpointLeaseTool, UpdateCarrierGroupTool,
    UpdateEndpointGroupTool, UpdateInboundMappingTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls
pub struct ToolRegistry {
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetKamailioStatsTool::NAME,
            ReloadKamailioTool::NAME,
            GetEndpointLeaseTool::NAME,
            RevokeEndpointLeaseTool::NAME,
            ListCarrierGroupsTool::NAME,
            GetCarrierGroupTool::NAME,
            CreateCarrierGroupTool::NAME,
            UpdateCarrierGroupTool::NAME,
            DeleteCarrierGroupTool::NAME,
            ListEndpointGroupsTool::NAME,
            GetEndpointGroupTool::NAME,
            CreateEndpointGroupTool::NAME,
            UpdateEndpointGroupTool::NAME,
            DeleteEndpointGroupTool::NAME,
            ListInboundMappingsTool::NAME,
            GetInboundMappingTool::NAME,
            CreateInboundMappingTool::NAME,
            UpdateInboundMappingTool::NAME,
            DeleteInboundMappingTool::NAME,
            GetCdrsByEndpointGroupTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for tool metadata; both
    /// transports list tools through it.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetKamailioStatsTool::to_tool(),
            ReloadKamailioTool::to_tool(),
            GetEndpointLeaseTool::to_tool(),
            RevokeEndpointLeaseTool::to_tool(),
            ListCarrierGroupsTool::to_tool(),
            GetCarrierGroupTool::to_tool(),
            CreateCarrierGroupTool::to_tool(),
            UpdateCarrierGroupTool::to_tool(),
            DeleteCarrierGroupTool::to_tool(),
            ListEndpointGroupsTool::to_tool(),
            GetEndpointGroupTool::to_tool(),
            CreateEndpointGroupTool::to_tool(),
            UpdateEndpointGroupTool::to_tool(),
            DeleteEndpointGroupTool::to_tool(),
            ListInboundMappingsTool::to_tool(),
            GetInboundMappingTool::to_tool(),
            CreateInboundMappingTool::to_tool(),
            UpdateInboundMappingTool::to_tool(),
            DeleteInboundMappingTool::to_tool(),
            GetCdrsByEndpointGroupTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let config = self.config.clone();
        match name {
            GetKamailioStatsTool::NAME => {
                GetKamailioStatsTool::http_handler(arguments, config).await
            }
            ReloadKamailioTool::NAME => ReloadKamailioTool::http_handler(arguments, config).await,
            GetEndpointLeaseTool::NAME => {
                GetEndpointLeaseTool::http_handler(arguments, config).await
            }
            RevokeEndpointLeaseTool::NAME => {
                RevokeEndpointLeaseTool::http_handler(arguments, config).await
            }
            ListCarrierGroupsTool::NAME => {
                ListCarrierGroupsTool::http_handler(arguments, config).await
            }
            GetCarrierGroupTool::NAME => GetCarrierGroupTool::http_handler(arguments, config).await,
            CreateCarrierGroupTool::NAME => {
                CreateCarrierGroupTool::http_handler(arguments, config).await
            }
            UpdateCarrierGroupTool::NAME => {
                UpdateCarrierGroupTool::http_handler(arguments, config).await
            }
            DeleteCarrierGroupTool::NAME => {
                DeleteCarrierGroupTool::http_handler(arguments, config).await
            }
            ListEndpointGroupsTool::NAME => {
                ListEndpointGroupsTool::http_handler(arguments, config).await
            }
            GetEndpointGroupTool::NAME => {
                GetEndpointGroupTool::http_handler(arguments, config).await
            }
            CreateEndpointGroupTool::NAME => {
                CreateEndpointGroupTool::http_handler(arguments, config).await
            }
            UpdateEndpointGroupTool::NAME => {
                UpdateEndpointGroupTool::http_handler(arguments, config).await
            }
            DeleteEndpointGroupTool::NAME => {
                DeleteEndpointGroupTool::http_handler(arguments, config).await
            }
            ListInboundMappingsTool::NAME => {
                ListInboundMappingsTool::http_handler(arguments, config).await
            }
            GetInboundMappingTool::NAME => {
                GetInboundMappingTool::http_handler(arguments, config).await
            }
            CreateInboundMappingTool::NAME => {
                CreateInboundMappingTool::http_handler(arguments, config).await
            }
            UpdateInboundMappingTool::NAME => {
                UpdateInboundMappingTool::http_handler(arguments, config).await
            }
            DeleteInboundMappingTool::NAME => {
                DeleteInboundMappingTool::http_handler(arguments, config).await
            }
            GetCdrsByEndpointGroupTool::NAME => {
                GetCdrsByEndpointGroupTool::http_handler(arguments, config).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        assert_eq!(names.len(), 20);
        assert!(names.contains(&"get_kamailio_stats"));
        assert!(names.contains(&"reload_kamailio"));
        assert!(names.contains(&"get_endpoint_lease"));
        assert!(names.contains(&"revoke_endpoint_lease"));
        assert!(names.contains(&"create_carrier_group"));
        assert!(names.contains(&"update_carrier_group"));
        assert!(names.contains(&"create_endpoint_group"));
        assert!(names.contains(&"update_endpoint_group"));
        assert!(names.contains(&"create_inbound_mapping"));
        assert!(names.contains(&"delete_inbound_mapping"));
        assert!(names.contains(&"get_cdrs_by_endpoint_group"));
    }

    #[test]
    fn test_metadata_matches_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), names.len());
        for tool in &tools {
            assert!(names.contains(&tool.name.as_ref()));
            assert!(tool.description.is_some());
        }
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_registry_call_without_token_reports_config_error() {
        // No network listener is involved: the configuration error fires
        // before any request is attempted.
        let registry = ToolRegistry::new(test_config());
        let result = registry
            .call_tool("get_kamailio_stats", serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(result["isError"], true);
    }
}
