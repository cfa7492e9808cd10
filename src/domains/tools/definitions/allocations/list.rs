//! Allocation query tools.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::super::ToolDefinition;
use super::super::common::{
    AllocationIdParams, EngineerIdParams, ProjectIdParams, error_result, json_result,
};
use crate::domains::allocation::{AllocationError, AllocationService, dates};

// ============================================================================
// list_allocations
// ============================================================================

/// Parameters for listing allocations.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListAllocationsParams {
    /// Only return allocations running today.
    #[serde(default)]
    pub active_only: bool,
}

/// Lists allocations, optionally only those active today.
pub struct ListAllocationsTool;

impl ToolDefinition for ListAllocationsTool {
    const NAME: &'static str = "list_allocations";
    const DESCRIPTION: &'static str = "List all allocations. Set activeOnly=true to only return \
        allocations running today (started, and not yet ended).";
    type Params = ListAllocationsParams;

    fn execute(
        params: ListAllocationsParams,
        service: Arc<dyn AllocationService>,
    ) -> BoxFuture<'static, CallToolResult> {
        async move {
            let allocations = if params.active_only {
                service.list_active_allocations(dates::today()).await
            } else {
                service.list_allocations().await
            };
            debug!(
                active_only = params.active_only,
                "Listing {} allocation(s)",
                allocations.len()
            );
            json_result(&allocations)
        }
        .boxed()
    }
}

// ============================================================================
// get_allocation_by_id
// ============================================================================

/// Fetches a single allocation by id.
pub struct GetAllocationByIdTool;

impl GetAllocationByIdTool {
    #[instrument(skip_all, fields(allocation_id = %params.allocation_id))]
    async fn run(params: AllocationIdParams, service: Arc<dyn AllocationService>) -> CallToolResult {
        match service.get_allocation(&params.allocation_id).await {
            Some(allocation) => json_result(&allocation),
            None => error_result(
                &AllocationError::allocation_not_found(&params.allocation_id).to_string(),
            ),
        }
    }
}

impl ToolDefinition for GetAllocationByIdTool {
    const NAME: &'static str = "get_allocation_by_id";
    const DESCRIPTION: &'static str = "Get a single allocation by its ID.";
    type Params = AllocationIdParams;

    fn execute(
        params: AllocationIdParams,
        service: Arc<dyn AllocationService>,
    ) -> BoxFuture<'static, CallToolResult> {
        Self::run(params, service).boxed()
    }
}

// ============================================================================
// list_engineer_allocations / list_project_allocations
// ============================================================================

/// Lists the allocations of one engineer.
///
/// An unknown engineer yields an empty list rather than an error.
pub struct ListEngineerAllocationsTool;

impl ToolDefinition for ListEngineerAllocationsTool {
    const NAME: &'static str = "list_engineer_allocations";
    const DESCRIPTION: &'static str = "List all allocations for a specific engineer.";
    type Params = EngineerIdParams;

    fn execute(
        params: EngineerIdParams,
        service: Arc<dyn AllocationService>,
    ) -> BoxFuture<'static, CallToolResult> {
        async move {
            let allocations = service.allocations_for_engineer(&params.engineer_id).await;
            json_result(&allocations)
        }
        .boxed()
    }
}

/// Lists the allocations on one project.
pub struct ListProjectAllocationsTool;

impl ToolDefinition for ListProjectAllocationsTool {
    const NAME: &'static str = "list_project_allocations";
    const DESCRIPTION: &'static str = "List all allocations for a specific project.";
    type Params = ProjectIdParams;

    fn execute(
        params: ProjectIdParams,
        service: Arc<dyn AllocationService>,
    ) -> BoxFuture<'static, CallToolResult> {
        async move {
            let allocations = service.allocations_for_project(&params.project_id).await;
            json_result(&allocations)
        }
        .boxed()
    }
}
