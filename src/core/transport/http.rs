//! HTTP transport implementation.
//!
//! Stateless JSON-RPC 2.0 over `POST {rpc_path}`, plus `GET /health` and an
//! informational `GET /`. Each request is dispatched straight to the
//! [`McpServer`] helper methods; notifications are acknowledged with
//! `202 Accepted` and no body.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rmcp::ServerHandler;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

const JSONRPC_VERSION: &str = "2.0";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
}

impl JsonRpcError {
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(Self::INVALID_PARAMS, message)
    }
}

impl JsonRpcResponse {
    fn from_result(id: Option<Value>, outcome: Result<Value, JsonRpcError>) -> Self {
        let (result, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result,
            error,
        }
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
struct AppState {
    server: Arc<McpServer>,
    rpc_path: Arc<str>,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router for the given server.
    pub fn router(&self, server: McpServer) -> Router {
        let state = AppState {
            server: Arc::new(server),
            rpc_path: Arc::from(self.config.rpc_path.as_str()),
        };

        let app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
        } else {
            app
        }
    }

    /// Serve HTTP until the process is stopped.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let name = server.name().to_string();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "{} listening on http://{}{} (CORS {})",
            name,
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "enabled" } else { "disabled" }
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::service(e.to_string()))
    }
}

async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
        "endpoints": {
            "rpc": &*state.rpc_path,
            "health": "/health"
        }
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method = %request.method))]
async fn handle_rpc(State(state): State<AppState>, Json(request): Json<JsonRpcRequest>) -> Response {
    if request.method.starts_with("notifications/") {
        debug!("Notification acknowledged");
        return StatusCode::ACCEPTED.into_response();
    }

    (StatusCode::OK, Json(process_request(&state.server, request).await)).into_response()
}

/// Dispatch one JSON-RPC request to the server.
pub async fn process_request(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != JSONRPC_VERSION {
        return JsonRpcResponse::from_result(
            request.id,
            Err(JsonRpcError::new(
                JsonRpcError::INVALID_REQUEST,
                "Invalid Request",
            )),
        );
    }

    let params = request.params.unwrap_or(Value::Null);
    let outcome = dispatch(server, &request.method, params).await;
    if let Err(error) = &outcome {
        warn!("{} failed: {}", request.method, error.message);
    }
    JsonRpcResponse::from_result(request.id, outcome)
}

async fn dispatch(server: &McpServer, method: &str, params: Value) -> Result<Value, JsonRpcError> {
    match method {
        "initialize" => serde_json::to_value(server.get_info())
            .map_err(|e| JsonRpcError::new(JsonRpcError::INTERNAL_ERROR, e.to_string())),
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => Ok(serde_json::json!({ "tools": server.list_tools() })),
        "tools/call" => {
            let name = required_str(&params, "name")?;
            let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);
            server
                .call_tool(name, arguments)
                .await
                .map_err(|e| JsonRpcError::invalid_params(e.to_string()))
        }
        "resources/list" => Ok(serde_json::json!({ "resources": server.list_resources().await })),
        "resources/templates/list" => Ok(serde_json::json!({
            "resourceTemplates": server.list_resource_templates().await
        })),
        "resources/read" => {
            let uri = required_str(&params, "uri")?;
            server
                .read_resource(uri)
                .await
                .map_err(|e| JsonRpcError::invalid_params(e.to_string()))
        }
        "prompts/list" => Ok(serde_json::json!({ "prompts": server.list_prompts().await })),
        "prompts/get" => {
            let name = required_str(&params, "name")?;
            server
                .get_prompt(name, params.get("arguments").cloned())
                .await
                .map_err(|e| JsonRpcError::invalid_params(e.to_string()))
        }
        _ => Err(JsonRpcError::new(
            JsonRpcError::METHOD_NOT_FOUND,
            "Method not found",
        )),
    }
}

fn required_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, JsonRpcError> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing '{}' parameter", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::allocation::{AllocationRegistry, Engineer, Project, SharedRegistry};

    fn server() -> McpServer {
        let registry = AllocationRegistry::from_parts(
            vec![Engineer {
                id: "eng-1".to_string(),
                name: "Ada".to_string(),
                ..Default::default()
            }],
            vec![Project {
                id: "proj-1".to_string(),
                name: "Apollo".to_string(),
                ..Default::default()
            }],
            vec![],
        );
        McpServer::new(Config::default(), SharedRegistry::new(registry).into_service())
    }

    fn request(method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(serde_json::json!(1)),
            method: method.to_string(),
            params: Some(params),
        }
    }

    #[tokio::test]
    async fn test_initialize() {
        let response = process_request(&server(), request("initialize", Value::Null)).await;
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "project-allocation-manager");
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_tools_call_roundtrip() {
        let server = server();
        let response = process_request(
            &server,
            request(
                "tools/call",
                serde_json::json!({
                    "name": "allocate_engineer",
                    "arguments": {
                        "engineerId": "eng-1",
                        "projectId": "proj-1",
                        "allocationPercentage": 101
                    }
                }),
            ),
        )
        .await;
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);

        let text = result["content"][0]["text"].as_str().unwrap();
        let body: Value = serde_json::from_str(text).unwrap();
        assert_eq!(body["message"], "Allocation percentage must be between 1 and 100.");
    }

    #[tokio::test]
    async fn test_missing_params() {
        let response = process_request(&server(), request("resources/read", Value::Null)).await;
        let error = response.error.unwrap();
        assert_eq!(error.code, JsonRpcError::INVALID_PARAMS);
        assert_eq!(error.message, "Missing 'uri' parameter");
    }

    #[tokio::test]
    async fn test_unknown_method_and_version() {
        let response = process_request(&server(), request("tools/explode", Value::Null)).await;
        assert_eq!(response.error.unwrap().code, JsonRpcError::METHOD_NOT_FOUND);

        let mut bad = request("tools/list", Value::Null);
        bad.jsonrpc = "1.0".to_string();
        let response = process_request(&server(), bad).await;
        assert_eq!(response.error.unwrap().code, JsonRpcError::INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_prompts_get() {
        let response = process_request(
            &server(),
            request(
                "prompts/get",
                serde_json::json!({ "name": "capacity_review", "arguments": { "engineerId": "eng-1" } }),
            ),
        )
        .await;
        let result = response.result.unwrap();
        assert!(result["messages"][0]["content"]["text"]
            .as_str()
            .unwrap()
            .contains("Ada"));
    }
}
