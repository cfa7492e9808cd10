//! Tool definitions module.
//!
//! Each tool lives in its own type implementing [`ToolDefinition`]:
//! - metadata (name, description)
//! - a parameters struct (deserialized from the call arguments, schema via schemars)
//! - `execute()` with the tool logic
//!
//! Routing glue is shared: [`to_tool`] builds the MCP metadata, [`create_route`]
//! the rmcp route for STDIO/TCP, and `http_handler` the HTTP dispatch.
//!
//! ## Adding a New Tool
//!
//! 1. Create the tool type in `directory/` or `allocations/`
//! 2. Implement [`ToolDefinition`]
//! 3. Export it here
//! 4. Add it to `router.rs` and `registry.rs`

pub mod allocations;
pub mod common;
pub mod directory;

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::domains::allocation::AllocationService;

pub use allocations::{
    AllocateEngineerTool, GetAllocationByIdTool, ListAllocationsTool,
    ListEngineerAllocationsTool, ListProjectAllocationsTool, UpdateAllocationTool,
};
pub use directory::{GetEngineerByIdTool, GetProjectByIdTool, ListEngineersTool, ListProjectsTool};

/// Trait for tool definitions.
pub trait ToolDefinition: 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool against the allocation service.
    fn execute(
        params: Self::Params,
        service: Arc<dyn AllocationService>,
    ) -> BoxFuture<'static, CallToolResult>;
}

/// Create a Tool model for a definition (metadata).
pub fn to_tool<T: ToolDefinition>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for STDIO/TCP transport.
pub fn create_route<T, S>(service: Arc<dyn AllocationService>) -> ToolRoute<S>
where
    T: ToolDefinition,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let service = service.clone();
        async move {
            let params: T::Params = serde_json::from_value(serde_json::Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            Ok(T::execute(params, service).await)
        }
        .boxed()
    })
}

/// HTTP handler for a tool (for HTTP transport).
#[cfg(feature = "http")]
pub async fn http_handler<T: ToolDefinition>(
    arguments: serde_json::Value,
    service: Arc<dyn AllocationService>,
) -> Result<serde_json::Value, super::ToolError> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::json!({}),
        other => other,
    };
    let params: T::Params = serde_json::from_value(arguments)
        .map_err(|e| super::ToolError::invalid_arguments(format!("{}: {}", T::NAME, e)))?;

    let result = T::execute(params, service).await;

    Ok(serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    }))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_tool_metadata() {
        let tool = to_tool::<AllocateEngineerTool>();
        assert_eq!(tool.name, "allocate_engineer");
        assert!(tool.description.is_some());

        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        let properties = &schema["properties"];
        assert!(properties.get("engineerId").is_some());
        assert!(properties.get("allocationPercentage").is_some());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_handler_invalid_arguments() {
        let service = test_support::fixture_service();
        let result =
            http_handler::<GetEngineerByIdTool>(serde_json::json!({ "wrong": 1 }), service).await;
        assert!(result.is_err());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_handler_without_arguments() {
        let service = test_support::fixture_service();
        let result = http_handler::<ListEngineersTool>(serde_json::Value::Null, service).await;
        assert_eq!(result.unwrap()["isError"], false);
    }
}
