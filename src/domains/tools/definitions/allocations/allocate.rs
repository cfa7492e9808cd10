//! Allocate tool: assigns a share of an engineer to a project.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::super::ToolDefinition;
use super::super::common::outcome_result;
use crate::domains::allocation::{AllocateRequest, AllocationService};

/// Parameters for the allocate tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocateEngineerParams {
    /// Engineer to allocate.
    pub engineer_id: String,

    /// Project to allocate the engineer to.
    pub project_id: String,

    /// Share of the engineer's time, 1-100.
    pub allocation_percentage: i64,

    /// Start date (YYYY-MM-DD). Defaults to today.
    #[serde(default)]
    pub start_date: Option<String>,

    /// End date (YYYY-MM-DD). Omit for an indefinite allocation.
    #[serde(default)]
    pub end_date: Option<String>,
}

impl From<AllocateEngineerParams> for AllocateRequest {
    fn from(params: AllocateEngineerParams) -> Self {
        Self {
            engineer_id: params.engineer_id,
            project_id: params.project_id,
            percentage: params.allocation_percentage,
            start_date: params.start_date,
            end_date: params.end_date,
        }
    }
}

/// Allocate tool - creates a new allocation after capacity checks.
pub struct AllocateEngineerTool;

impl AllocateEngineerTool {
    #[instrument(skip_all, fields(
        engineer_id = %params.engineer_id,
        project_id = %params.project_id,
        percentage = params.allocation_percentage,
    ))]
    async fn run(
        params: AllocateEngineerParams,
        service: Arc<dyn AllocationService>,
    ) -> CallToolResult {
        info!("Allocate tool called");
        outcome_result(service.allocate(params.into()).await)
    }
}

impl ToolDefinition for AllocateEngineerTool {
    const NAME: &'static str = "allocate_engineer";
    const DESCRIPTION: &'static str = "Allocate an engineer to a project for a percentage of \
        their time over a date range. Rejects the request if the engineer would exceed 100% \
        during any overlapping period, or is already on the same project for overlapping dates.";
    type Params = AllocateEngineerParams;

    fn execute(
        params: AllocateEngineerParams,
        service: Arc<dyn AllocationService>,
    ) -> BoxFuture<'static, CallToolResult> {
        Self::run(params, service).boxed()
    }
}
