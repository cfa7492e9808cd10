//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::allocation::AllocationService;

#[cfg(feature = "http")]
use super::error::ToolError;

use super::definitions::{
    AllocateEngineerTool, GetAllocationByIdTool, GetEngineerByIdTool, GetProjectByIdTool,
    ListAllocationsTool, ListEngineerAllocationsTool, ListEngineersTool,
    ListProjectAllocationsTool, ListProjectsTool, ToolDefinition, UpdateAllocationTool, to_tool,
};
#[cfg(feature = "http")]
use super::definitions::http_handler;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    service: Arc<dyn AllocationService>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(service: Arc<dyn AllocationService>) -> Self {
        Self { service }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ListEngineersTool::NAME,
            ListProjectsTool::NAME,
            ListAllocationsTool::NAME,
            GetEngineerByIdTool::NAME,
            GetProjectByIdTool::NAME,
            GetAllocationByIdTool::NAME,
            ListEngineerAllocationsTool::NAME,
            ListProjectAllocationsTool::NAME,
            AllocateEngineerTool::NAME,
            UpdateAllocationTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<ListEngineersTool>(),
            to_tool::<ListProjectsTool>(),
            to_tool::<ListAllocationsTool>(),
            to_tool::<GetEngineerByIdTool>(),
            to_tool::<GetProjectByIdTool>(),
            to_tool::<GetAllocationByIdTool>(),
            to_tool::<ListEngineerAllocationsTool>(),
            to_tool::<ListProjectAllocationsTool>(),
            to_tool::<AllocateEngineerTool>(),
            to_tool::<UpdateAllocationTool>(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let service = self.service.clone();
        match name {
            ListEngineersTool::NAME => http_handler::<ListEngineersTool>(arguments, service).await,
            ListProjectsTool::NAME => http_handler::<ListProjectsTool>(arguments, service).await,
            ListAllocationsTool::NAME => {
                http_handler::<ListAllocationsTool>(arguments, service).await
            }
            GetEngineerByIdTool::NAME => {
                http_handler::<GetEngineerByIdTool>(arguments, service).await
            }
            GetProjectByIdTool::NAME => {
                http_handler::<GetProjectByIdTool>(arguments, service).await
            }
            GetAllocationByIdTool::NAME => {
                http_handler::<GetAllocationByIdTool>(arguments, service).await
            }
            ListEngineerAllocationsTool::NAME => {
                http_handler::<ListEngineerAllocationsTool>(arguments, service).await
            }
            ListProjectAllocationsTool::NAME => {
                http_handler::<ListProjectAllocationsTool>(arguments, service).await
            }
            AllocateEngineerTool::NAME => {
                http_handler::<AllocateEngineerTool>(arguments, service).await
            }
            UpdateAllocationTool::NAME => {
                http_handler::<UpdateAllocationTool>(arguments, service).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::definitions::test_support::fixture_service;
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(fixture_service());
        let names = registry.tool_names();
        assert_eq!(names.len(), 10);
        assert!(names.contains(&"list_engineers"));
        assert!(names.contains(&"list_projects"));
        assert!(names.contains(&"list_allocations"));
        assert!(names.contains(&"get_engineer_by_id"));
        assert!(names.contains(&"get_project_by_id"));
        assert!(names.contains(&"get_allocation_by_id"));
        assert!(names.contains(&"list_engineer_allocations"));
        assert!(names.contains(&"list_project_allocations"));
        assert!(names.contains(&"allocate_engineer"));
        assert!(names.contains(&"update_allocation"));
    }

    #[test]
    fn test_all_tools_match_names() {
        let registry = ToolRegistry::new(fixture_service());
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), registry.tool_names().len());
        for tool in tools {
            assert!(registry.tool_names().contains(&tool.name.as_ref()));
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_allocate() {
        let registry = ToolRegistry::new(fixture_service());
        let result = registry
            .call_tool(
                "allocate_engineer",
                serde_json::json!({
                    "engineerId": "eng-2",
                    "projectId": "proj-2",
                    "allocationPercentage": 50,
                    "startDate": "2025-01-01"
                }),
            )
            .await
            .unwrap();
        assert_eq!(result["isError"], false);
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(fixture_service());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
