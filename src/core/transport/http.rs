//! HTTP transport: JSON-RPC 2.0 over POST, plus `GET /health` and `GET /`.
//!
//! Requests are dispatched here rather than through rmcp, so curl can call
//! the physics tools without an MCP session. Tool, resource and prompt
//! errors keep the codes their `ErrorData` conversions assign.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rmcp::ErrorData as McpError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::server::INSTRUCTIONS;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// JSON-RPC 2.0 error codes produced by this transport itself.
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

impl JsonRpcError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

/// Tool, resource and prompt errors carry their MCP code through `ErrorData`.
impl From<McpError> for JsonRpcError {
    fn from(err: McpError) -> Self {
        Self {
            code: err.code.0,
            message: err.message.into_owned(),
            data: err.data,
        }
    }
}

impl JsonRpcResponse {
    fn reply(id: Option<serde_json::Value>, outcome: Result<serde_json::Value, JsonRpcError>) -> Self {
        let (result, error) = match outcome {
            Ok(value) => (Some(value), None),
            Err(e) => (None, Some(e)),
        };
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
            error,
        }
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP server instance.
    server: McpServer,
    /// Path of the JSON-RPC endpoint, reported by `/`.
    rpc_path: String,
    /// Session state for maintaining conversation context.
    session: Arc<RwLock<Option<SessionState>>>,
}

impl AppState {
    pub fn new(server: McpServer, rpc_path: impl Into<String>) -> Self {
        Self {
            server,
            rpc_path: rpc_path.into(),
            session: Arc::new(RwLock::new(None)),
        }
    }
}

/// Session state for a client.
#[derive(Debug, Clone)]
struct SessionState {
    initialized: bool,
    protocol_version: String,
}

const PROTOCOL_VERSION: &str = "2024-11-05";

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let state = AppState::new(server, self.config.rpc_path.clone());

        // Build router
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(state);

        // Add CORS if enabled
        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health"
        },
        "protocol": "JSON-RPC 2.0",
        "documentation": format!("Send POST requests to {} with JSON-RPC messages", state.rpc_path)
    }))
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "documents": state.server.knowledge().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    tracing::Span::current().record("method", &request.method);
    info!("Received JSON-RPC request: {}", request.method);

    let response = process_request(&state, request).await;

    (StatusCode::OK, Json(response))
}

/// Process a JSON-RPC request and return the response.
async fn process_request(state: &AppState, request: JsonRpcRequest) -> JsonRpcResponse {
    if request.jsonrpc != "2.0" {
        return JsonRpcResponse::reply(
            request.id,
            Err(JsonRpcError::new(INVALID_REQUEST, "Invalid Request: jsonrpc must be \"2.0\"")),
        );
    }

    let params = request.params.unwrap_or(serde_json::Value::Null);
    let server = &state.server;
    let outcome = match request.method.as_str() {
        "initialize" => Ok(initialize(state).await),
        "tools/list" => Ok(serde_json::json!({ "tools": server.list_tools() })),
        "tools/call" => call_tool(server, &params).await,
        "resources/list" => Ok(serde_json::json!({ "resources": server.list_resources().await })),
        "resources/templates/list" => Ok(serde_json::json!({
            "resourceTemplates": server.list_resource_templates().await
        })),
        "resources/read" => match required_str(&params, "uri") {
            Ok(uri) => server
                .read_resource(uri)
                .await
                .map_err(|e| JsonRpcError::from(McpError::from(e))),
            Err(e) => Err(e),
        },
        "prompts/list" => Ok(serde_json::json!({ "prompts": server.list_prompts().await })),
        "prompts/get" => match required_str(&params, "name") {
            Ok(name) => server
                .get_prompt(name, params.get("arguments").cloned())
                .await
                .map_err(|e| JsonRpcError::from(McpError::from(e))),
            Err(e) => Err(e),
        },
        method if method.starts_with("notifications/") => {
            notification(state, method).await;
            Ok(serde_json::Value::Null)
        }
        method => {
            warn!("Unsupported JSON-RPC method: {method}");
            Err(JsonRpcError::new(
                METHOD_NOT_FOUND,
                format!("Method not found: {method}"),
            ))
        }
    };

    JsonRpcResponse::reply(request.id, outcome)
}

/// A string field of the request params.
fn required_str<'a>(params: &'a serde_json::Value, key: &str) -> Result<&'a str, JsonRpcError> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Missing string parameter '{key}'")))
}

/// Start a session and describe the server.
async fn initialize(state: &AppState) -> serde_json::Value {
    *state.session.write().await = Some(SessionState {
        initialized: false,
        protocol_version: PROTOCOL_VERSION.to_string(),
    });

    serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {},
            "prompts": {}
        },
        "serverInfo": {
            "name": state.server.name(),
            "version": state.server.version()
        },
        "instructions": INSTRUCTIONS
    })
}

/// `tools/call`: unknown tools and bad arguments are -32602; a tool that ran
/// and failed is a successful reply with `isError: true`.
async fn call_tool(
    server: &McpServer,
    params: &serde_json::Value,
) -> Result<serde_json::Value, JsonRpcError> {
    let name = required_str(params, "name")?;
    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| serde_json::json!({}));
    info!(tool = name, "HTTP tool call");

    server
        .call_tool(name, arguments)
        .await
        .map_err(|e| JsonRpcError::from(McpError::from(e)))
}

async fn notification(state: &AppState, method: &str) {
    if method != "notifications/initialized" {
        debug!("Ignoring notification {method}");
        return;
    }
    if let Some(session) = state.session.write().await.as_mut() {
        if !session.initialized {
            session.initialized = true;
            info!("HTTP session ready (protocol {})", session.protocol_version);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use serde_json::json;

    fn state() -> AppState {
        AppState::new(McpServer::new(Config::default()), "/mcp")
    }

    fn request(method: &str, params: serde_json::Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params: Some(params),
        }
    }

    #[tokio::test]
    async fn test_initialize_reports_server() {
        let response = process_request(&state(), request("initialize", json!({}))).await;
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], "physics-mcp-server");
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn test_tools_list_and_call() {
        let state = state();
        let response = process_request(&state, request("tools/list", json!({}))).await;
        assert_eq!(response.result.unwrap()["tools"].as_array().unwrap().len(), 10);

        let response = process_request(
            &state,
            request(
                "tools/call",
                json!({"name": "get_particle_properties", "arguments": {"particle_name": "muon"}}),
            ),
        )
        .await;
        let result = response.result.unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["structuredContent"]["charge"], -1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_load_documents_runs_off_the_runtime() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("muons.txt"), "muon lifetime 2.2 microseconds").unwrap();

        let state = state();
        let response = process_request(
            &state,
            request(
                "tools/call",
                json!({"name": "load_documents", "arguments": {"directory": dir.path()}}),
            ),
        )
        .await;
        assert_eq!(response.result.unwrap()["isError"], false);

        let health = health_check(State(state.clone())).await.into_response();
        assert_eq!(health.status(), StatusCode::OK);
        assert_eq!(state.server.knowledge().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let response = process_request(
            &state(),
            request("tools/call", json!({"name": "warp_drive"})),
        )
        .await;
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("calculate_lorentz_factor"));
    }

    #[tokio::test]
    async fn test_resource_and_prompt_errors_keep_their_codes() {
        let state = state();
        let unknown = process_request(
            &state,
            request("resources/read", json!({"uri": "physics://particles/graviton"})),
        )
        .await;
        let error = unknown.error.unwrap();
        assert_eq!(error.code, -32002);
        assert!(error.message.contains("muon"));

        let missing = process_request(&state, request("resources/read", json!({}))).await;
        assert_eq!(missing.error.unwrap().code, -32602);

        let prompt = process_request(
            &state,
            request("prompts/get", json!({"name": "explain_concept"})),
        )
        .await;
        let error = prompt.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("topic"));
    }

    #[tokio::test]
    async fn test_wrong_version_and_unknown_method() {
        let mut bad = request("tools/list", json!({}));
        bad.jsonrpc = "1.0".to_string();
        assert_eq!(process_request(&state(), bad).await.error.unwrap().code, -32600);

        let response = process_request(&state(), request("sampling/create", json!({}))).await;
        assert_eq!(response.error.unwrap().code, -32601);
    }
}
