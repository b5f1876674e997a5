//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and listed once in `domains/tools/registry.rs`. The rmcp `ToolRouter`
//! (stdio and TCP) and the HTTP transport both dispatch through that list,
//! so **adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    prompts::{PromptError, PromptService},
    resources::{ResourceContext, ResourceError, ResourceService},
    tools::{ToolContext, ToolError, ToolRegistry, build_tool_router},
};
use crate::knowledge::KnowledgeBase;

/// Instructions sent to clients during initialization.
pub const INSTRUCTIONS: &str = "Particle and nuclear physics tools. \
    Calculate relativistic energies, Lorentz factors, decay probabilities and nuclear binding energies; \
    look up particle properties; generate events from the quark distribution model; \
    load PDF, text and Markdown documents with load_documents and search them with search_knowledge_base. \
    Energies and masses are in MeV, times in seconds, velocities as fractions of c.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
/// Clones share the same knowledge base.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Documents loaded for `search_knowledge_base`.
    knowledge: Arc<KnowledgeBase>,

    /// Name-based tool dispatch (HTTP transport and CLI).
    tools: ToolRegistry,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with an empty knowledge base.
    pub fn new(config: Config) -> Self {
        Self::with_knowledge(config, Arc::new(KnowledgeBase::new()))
    }

    /// Create a new MCP server around an existing knowledge base.
    pub fn with_knowledge(config: Config, knowledge: Arc<KnowledgeBase>) -> Self {
        let config = Arc::new(config);
        let tool_context = ToolContext::new(config.clone(), knowledge.clone());

        let resource_service = Arc::new(ResourceService::new(ResourceContext {
            config: config.clone(),
            knowledge: knowledge.clone(),
        }));
        let prompt_service = Arc::new(PromptService::new(config.prompts.clone()));

        Self {
            tool_router: build_tool_router::<Self>(tool_context.clone()),
            tools: ToolRegistry::new(tool_context),
            config,
            knowledge,
            resource_service,
            prompt_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The knowledge base shared by every tool and resource.
    pub fn knowledge(&self) -> &Arc<KnowledgeBase> {
        &self.knowledge
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name and return the MCP `CallToolResult` as JSON.
    ///
    /// Failures inside the tool come back as a result with `isError: true`;
    /// only unknown tools and malformed arguments are errors here. The tool
    /// runs on the blocking pool.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let result = self.tools.call_tool_blocking(name, arguments).await?;
        serde_json::to_value(result).map_err(|e| ToolError::internal(e.to_string()))
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, ResourceError> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::json!({ "contents": result.contents }))
    }

    /// List all available resource templates (for HTTP transport).
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        let templates = self.resource_service.list_resource_templates().await;

        templates
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }

    /// List all available prompts (for HTTP transport).
    pub async fn list_prompts(&self) -> Vec<serde_json::Value> {
        let prompts = self.prompt_service.list_prompts().await;

        prompts
            .into_iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "arguments": p.arguments
                })
            })
            .collect()
    }

    /// Get a prompt by name (for HTTP transport).
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, PromptError> {
        let args = arguments.and_then(|v| match v {
            serde_json::Value::Object(obj) => Some(prompt_arguments(obj)),
            _ => None,
        });

        let result = self.prompt_service.get_prompt(name, args).await?;
        Ok(serde_json::json!({
            "description": result.description,
            "messages": result.messages
        }))
    }
}

/// Flatten JSON prompt arguments to strings.
///
/// Numbers and booleans are rendered as JSON text so `{"num_events": 500}`
/// works like `{"num_events": "500"}`. Nulls are dropped.
fn prompt_arguments(map: serde_json::Map<String, serde_json::Value>) -> HashMap<String, String> {
    map.into_iter()
        .filter_map(|(k, v)| match v {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some((k, s)),
            other => Some((k, other.to_string())),
        })
        .collect()
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(McpError::from)
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.map(prompt_arguments);
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(McpError::from)
    }
}
