//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport. Every route
//! shares the same allocation service handle.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::allocation::AllocationService;

use super::definitions::{
    AllocateEngineerTool, GetAllocationByIdTool, GetEngineerByIdTool, GetProjectByIdTool,
    ListAllocationsTool, ListEngineerAllocationsTool, ListEngineersTool,
    ListProjectAllocationsTool, ListProjectsTool, UpdateAllocationTool, create_route,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(service: Arc<dyn AllocationService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<ListEngineersTool, S>(service.clone()))
        .with_route(create_route::<ListProjectsTool, S>(service.clone()))
        .with_route(create_route::<ListAllocationsTool, S>(service.clone()))
        .with_route(create_route::<GetEngineerByIdTool, S>(service.clone()))
        .with_route(create_route::<GetProjectByIdTool, S>(service.clone()))
        .with_route(create_route::<GetAllocationByIdTool, S>(service.clone()))
        .with_route(create_route::<ListEngineerAllocationsTool, S>(service.clone()))
        .with_route(create_route::<ListProjectAllocationsTool, S>(service.clone()))
        .with_route(create_route::<AllocateEngineerTool, S>(service.clone()))
        .with_route(create_route::<UpdateAllocationTool, S>(service))
}

#[cfg(test)]
mod tests {
    use super::super::definitions::test_support::fixture_service;
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(fixture_service());
        let tools = router.list_all();
        assert_eq!(tools.len(), 10);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"allocate_engineer"));
        assert!(names.contains(&"update_allocation"));
        assert!(names.contains(&"list_allocations"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let service = fixture_service();
        let registry = ToolRegistry::new(service.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(service);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
