//! Server info resource definition.

use rmcp::model::ResourceContents;

use super::{DynamicResourceProvider, ResourceDefinition, json_contents};
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent, ResourceContext};
use crate::domains::tools::ToolRegistry;
use crate::physics::particle_names;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "mcp://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Server version, available tools and particles, and the documents in the knowledge base";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

impl DynamicResourceProvider for ServerInfoResource {
    fn resolve(uri: &str, ctx: &ResourceContext) -> Result<ResourceContents, ResourceError> {
        let documents = ctx.knowledge.describe_all()?;

        let info = serde_json::json!({
            "server": ctx.config.server.name,
            "version": ctx.config.server.version,
            "tools": ToolRegistry::tool_names(),
            "particles": particle_names(),
            "knowledge_base": {
                "documents_dir": ctx.config.knowledge.documents_dir,
                "documents": documents,
            },
            "max_events": ctx.config.events.max_events,
        });

        json_contents(uri, &info)
    }
}
