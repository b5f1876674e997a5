//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! Resources are defined in `definitions/` and registered via `registry.rs`;
//! URIs under `physics://particles/` are resolved through the particle template.

use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use tracing::{debug, info};

use super::definitions::{DynamicResourceProvider, ParticleTemplate, ServerInfoResource};
use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::core::config::Config;
use crate::knowledge::KnowledgeBase;

/// State available to dynamic resources.
#[derive(Debug, Clone)]
pub struct ResourceContext {
    pub config: Arc<Config>,
    pub knowledge: Arc<KnowledgeBase>,
}

impl Default for ResourceContext {
    fn default() -> Self {
        Self {
            config: Arc::new(Config::default()),
            knowledge: Arc::new(KnowledgeBase::new()),
        }
    }
}

/// Service for managing and accessing resources.
pub struct ResourceService {
    context: ResourceContext,

    /// Registered resources in registration order.
    resources: Vec<ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicResourceType {
    /// Server and knowledge-base information.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService.
    pub fn new(context: ResourceContext) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            context,
            resources: Vec::new(),
            templates: get_all_resource_templates(),
        };
        for entry in get_all_resources() {
            service.register_resource(entry);
        }
        service
    }

    /// Register a resource, replacing any entry with the same URI.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .retain(|e| e.resource.raw.uri != entry.resource.raw.uri);
        self.resources.push(entry);
    }

    fn enabled(&self) -> bool {
        self.context.config.resources.enabled
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        if !self.enabled() {
            return Vec::new();
        }
        self.resources.iter().map(|e| e.resource.clone()).collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        if !self.enabled() {
            return Vec::new();
        }
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if !self.enabled() {
            return Err(ResourceError::Disabled(uri.to_string()));
        }
        let content = match self.resources.iter().find(|e| e.resource.raw.uri == uri) {
            Some(entry) => match &entry.content {
                ResourceContent::Text(text) => ResourceContents::text(text, uri),
                ResourceContent::Dynamic(dynamic_type) => {
                    self.resolve_dynamic_content(uri, *dynamic_type)?
                }
            },
            None if ParticleTemplate::matches(uri) => ParticleTemplate::resolve(uri)?,
            None => return Err(ResourceError::unknown_uri(uri)),
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => ServerInfoResource::resolve(uri, &self.context),
        }
    }
}
