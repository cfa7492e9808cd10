//! Project lookup tools.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::model::CallToolResult;
use std::sync::Arc;
use tracing::{debug, instrument};

use super::super::ToolDefinition;
use super::super::common::{NoParams, ProjectIdParams, error_result, json_result};
use crate::domains::allocation::{AllocationError, AllocationService};

/// Lists every project in the registry.
pub struct ListProjectsTool;

impl ToolDefinition for ListProjectsTool {
    const NAME: &'static str = "list_projects";
    const DESCRIPTION: &'static str =
        "List all projects with their id, name, description and status.";
    type Params = NoParams;

    fn execute(
        _params: NoParams,
        service: Arc<dyn AllocationService>,
    ) -> BoxFuture<'static, CallToolResult> {
        async move {
            let projects = service.list_projects().await;
            debug!("Listing {} project(s)", projects.len());
            json_result(&projects)
        }
        .boxed()
    }
}

/// Fetches a single project by id.
pub struct GetProjectByIdTool;

impl GetProjectByIdTool {
    #[instrument(skip_all, fields(project_id = %params.project_id))]
    async fn run(params: ProjectIdParams, service: Arc<dyn AllocationService>) -> CallToolResult {
        match service.get_project(&params.project_id).await {
            Some(project) => json_result(&project),
            None => error_result(&AllocationError::project_not_found(&params.project_id).to_string()),
        }
    }
}

impl ToolDefinition for GetProjectByIdTool {
    const NAME: &'static str = "get_project_by_id";
    const DESCRIPTION: &'static str = "Get a single project by its ID.";
    type Params = ProjectIdParams;

    fn execute(
        params: ProjectIdParams,
        service: Arc<dyn AllocationService>,
    ) -> BoxFuture<'static, CallToolResult> {
        Self::run(params, service).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::test_support::{fixture_service, is_error, text};
    use super::*;

    #[tokio::test]
    async fn test_list_projects() {
        let result = ListProjectsTool::execute(NoParams {}, fixture_service()).await;
        let body: serde_json::Value = serde_json::from_str(&text(&result)).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[1]["status"], "Planning");
    }

    #[tokio::test]
    async fn test_get_project() {
        let found = GetProjectByIdTool::execute(
            ProjectIdParams {
                project_id: "proj-1".to_string(),
            },
            fixture_service(),
        )
        .await;
        assert!(!is_error(&found));
        assert!(text(&found).contains("Apollo"));

        let missing = GetProjectByIdTool::execute(
            ProjectIdParams {
                project_id: "nope".to_string(),
            },
            fixture_service(),
        )
        .await;
        assert!(is_error(&missing));
        assert_eq!(text(&missing), "Project with ID 'nope' not found.");
    }
}
