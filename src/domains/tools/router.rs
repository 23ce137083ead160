//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for the STDIO transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route; every route captures the shared immutable configuration.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    CreateCarrierGroupTool, CreateEndpointGroupTool, CreateInboundMappingTool,
    DeleteCarrierGroupTool, DeleteEndpointGroupTool, DeleteInboundMappingTool,
    GetCarrierGroupTool, GetCdrsByEndpointGroupTool, GetEndpointGroupTool, GetEndpointLeaseTool,
    GetInboundMappingTool, GetKamailioStatsTool, ListCarrierGroupsTool, ListEndpointGroupsTool,
    ListInboundMappingsTool, ReloadKamailioTool, RevokeEndpointLeaseTool, UpdateCarrierGroupTool,
    UpdateEndpointGroupTool, UpdateInboundMappingTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetKamailioStatsTool::create_route(config.clone()))
        .with_route(ReloadKamailioTool::create_route(config.clone()))
        .with_route(GetEndpointLeaseTool::create_route(config.clone()))
        .with_route(RevokeEndpointLeaseTool::create_route(config.clone()))
        .with_route(ListCarrierGroupsTool::create_route(config.clone()))
        .with_route(GetCarrierGroupTool::create_route(config.clone()))
        .with_route(CreateCarrierGroupTool::create_route(config.clone()))
        .with_route(UpdateCarrierGroupTool::create_route(config.clone()))
        .with_route(DeleteCarrierGroupTool::create_route(config.clone()))
        .with_route(ListEndpointGroupsTool::create_route(config.clone()))
        .with_route(GetEndpointGroupTool::create_route(config.clone()))
        .with_route(CreateEndpointGroupTool::create_route(config.clone()))
        .with_route(UpdateEndpointGroupTool::create_route(config.clone()))
        .with_route(DeleteEndpointGroupTool::create_route(config.clone()))
        .with_route(ListInboundMappingsTool::create_route(config.clone()))
        .with_route(GetInboundMappingTool::create_route(config.clone()))
        .with_route(CreateInboundMappingTool::create_route(config.clone()))
        .with_route(UpdateInboundMappingTool::create_route(config.clone()))
        .with_route(DeleteInboundMappingTool::create_route(config.clone()))
        .with_route(GetCdrsByEndpointGroupTool::create_route(config))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 20);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_kamailio_stats"));
        assert!(names.contains(&"reload_kamailio"));
        assert!(names.contains(&"list_carrier_groups"));
        assert!(names.contains(&"create_endpoint_group"));
        assert!(names.contains(&"update_inbound_mapping"));
        assert!(names.contains(&"get_cdrs_by_endpoint_group"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let config = test_config();
        let registry = ToolRegistry::new(config.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(config);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
