//! Engineer lookup tools.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::super::ToolDefinition;
use super::super::common::{EngineerIdParams, NoParams, error_result, json_result};
use crate::domains::allocation::{AllocationError, AllocationService};

/// Lists every engineer in the registry.
pub struct ListEngineersTool;

impl ToolDefinition for ListEngineersTool {
    const NAME: &'static str = "list_engineers";
    const DESCRIPTION: &'static str =
        "List all engineers with their id, name, role and skills.";
    type Params = NoParams;

    fn execute(
        _params: NoParams,
        service: Arc<dyn AllocationService>,
    ) -> BoxFuture<'static, CallToolResult> {
        async move {
            let engineers = service.list_engineers().await;
            debug!("Listing {} engineer(s)", engineers.len());
            json_result(&engineers)
        }
        .boxed()
    }
}

/// Fetches a single engineer by id.
pub struct GetEngineerByIdTool;

impl GetEngineerByIdTool {
    #[instrument(skip_all, fields(engineer_id = %params.engineer_id))]
    async fn run(params: EngineerIdParams, service: Arc<dyn AllocationService>) -> CallToolResult {
        match service.get_engineer(&params.engineer_id).await {
            Some(engineer) => json_result(&engineer),
            None => error_result(&AllocationError::engineer_not_found(&params.engineer_id).to_string()),
        }
    }
}

impl ToolDefinition for GetEngineerByIdTool {
    const NAME: &'static str = "get_engineer_by_id";
    const DESCRIPTION: &'static str = "Get a single engineer by their ID.";
    type Params = EngineerIdParams;

    fn execute(
        params: EngineerIdParams,
        service: Arc<dyn AllocationService>,
    ) -> BoxFuture<'static, CallToolResult> {
        Self::run(params, service).boxed()
    }
}
