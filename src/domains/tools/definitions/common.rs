//! Common utilities shared across allocation tools.
//!
//! Response formatting for JSON payloads, the `{success, message}` failure
//! envelope, and the small parameter structs several tools share.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domains::allocation::{AllocationError, AllocationResult};

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Parameters for lookups keyed by engineer.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EngineerIdParams {
    /// Engineer identifier, e.g. "eng-1".
    pub engineer_id: String,
}

/// Parameters for lookups keyed by project.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdParams {
    /// Project identifier, e.g. "proj-1".
    pub project_id: String,
}

/// Parameters for lookups keyed by allocation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocationIdParams {
    /// Allocation identifier, e.g. "alloc-1a2b3c4d".
    pub allocation_id: String,
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with a pretty-printed JSON body.
pub fn json_result<T: Serialize>(value: &T) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(json) => CallToolResult::success(vec![Content::text(json)]),
        Err(e) => error_result(&format!("Failed to serialize result: {}", e)),
    }
}

/// Render the outcome of an allocate/update call.
///
/// Successes carry the full result envelope; failures are reported as
/// `{"success": false, "message": ...}` with `isError` set.
pub fn outcome_result(outcome: Result<AllocationResult, AllocationError>) -> CallToolResult {
    match outcome {
        Ok(result) => json_result(&result),
        Err(e) => {
            warn!("Allocation request rejected: {}", e);
            let failure = AllocationResult::failure(e.to_string());
            match serde_json::to_string_pretty(&failure) {
                Ok(json) => CallToolResult::error(vec![Content::text(json)]),
                Err(_) => CallToolResult::error(vec![Content::text(failure.message)]),
            }
        }
    }
}
