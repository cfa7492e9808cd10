//! Update tool: changes the percentage or dates of an existing allocation.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::outcome_result;
use crate::domains::allocation::{AllocationService, UpdateRequest};

/// Parameters for the update tool. Omitted fields keep their current value.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAllocationParams {
    /// Allocation to update.
    pub allocation_id: String,

    /// New share of the engineer's time, 1-100.
    #[serde(default)]
    pub allocation_percentage: Option<i64>,

    /// New start date (YYYY-MM-DD).
    #[serde(default)]
    pub start_date: Option<String>,

    /// New end date (YYYY-MM-DD).
    #[serde(default)]
    pub end_date: Option<String>,
}

impl From<UpdateAllocationParams> for UpdateRequest {
    fn from(params: UpdateAllocationParams) -> Self {
        Self {
            allocation_id: params.allocation_id,
            percentage: params.allocation_percentage,
            start_date: params.start_date,
            end_date: params.end_date,
        }
    }
}

/// Update tool - revalidates and rewrites an allocation in place.
pub struct UpdateAllocationTool;

impl UpdateAllocationTool {
    #[instrument(skip_all, fields(allocation_id = %params.allocation_id))]
    async fn run(
        params: UpdateAllocationParams,
        service: Arc<dyn AllocationService>,
    ) -> CallToolResult {
        info!("Update tool called");
        outcome_result(service.update(params.into()).await)
    }
}

impl ToolDefinition for UpdateAllocationTool {
    const NAME: &'static str = "update_allocation";
    const DESCRIPTION: &'static str = "Update an existing allocation's percentage and/or dates. \
        The same capacity and duplicate-project rules as allocate_engineer apply, ignoring the \
        allocation being updated.";
    type Params = UpdateAllocationParams;

    fn execute(
        params: UpdateAllocationParams,
        service: Arc<dyn AllocationService>,
    ) -> BoxFuture<'static, CallToolResult> {
        Self::run(params, service).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::test_support::{fixture_service, is_error, text};
    use super::*;

    fn params(percentage: Option<i64>, end_date: Option<&str>) -> UpdateAllocationParams {
        UpdateAllocationParams {
            allocation_id: "alloc-seed".to_string(),
            allocation_percentage: percentage,
            start_date: None,
            end_date: end_date.map(str::to_string),
        }
    }

    fn parse(result: &CallToolResult) -> serde_json::Value {
        serde_json::from_str(&text(result)).unwrap()
    }

    #[tokio::test]
    async fn test_update_percentage() {
        let service = fixture_service();
        let result = UpdateAllocationTool::execute(params(Some(100), None), service.clone()).await;
        assert!(!is_error(&result));

        let body = parse(&result);
        assert_eq!(body["success"], true);
        assert_eq!(
            body["message"],
            "Successfully updated allocation. Ada Lovelace is now 100% allocated to Apollo \
             starting from 2025-01-01 (indefinite)."
        );
        let stored = service.get_allocation("alloc-seed").await.unwrap();
        assert_eq!(stored.allocation_percentage, 100);
    }

    #[tokio::test]
    async fn test_update_invalid_range_leaves_record() {
        let service = fixture_service();
        let result =
            UpdateAllocationTool::execute(params(None, Some("2024-12-31")), service.clone()).await;
        assert!(is_error(&result));
        assert_eq!(parse(&result)["message"], "End date must be after start date.");

        let stored = service.get_allocation("alloc-seed").await.unwrap();
        assert!(stored.end_date.is_none());
    }

    #[tokio::test]
    async fn test_update_unknown_allocation() {
        let mut unknown = params(Some(10), None);
        unknown.allocation_id = "alloc-nope".to_string();
        let result = UpdateAllocationTool::execute(unknown, fixture_service()).await;
        assert_eq!(
            parse(&result)["message"],
            "Allocation with ID 'alloc-nope' not found."
        );
    }
}
