//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - URI and metadata
//! - Content provider
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

pub mod constants;
pub mod docs_readme;
pub mod particles;
pub mod server_info;

pub use constants::ConstantsResource;
pub use docs_readme::DocsReadmeResource;
pub use particles::{ParticleTableResource, ParticleTemplate};
pub use server_info::ServerInfoResource;

use rmcp::model::ResourceContents;

use super::error::ResourceError;
use super::service::{ResourceContent, ResourceContext};

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata and content.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}

/// Trait for resources whose content is computed at read time.
pub trait DynamicResourceProvider {
    /// Resolve the dynamic content.
    fn resolve(uri: &str, ctx: &ResourceContext) -> Result<ResourceContents, ResourceError>;
}

/// Pretty-printed JSON contents for `uri`.
pub(crate) fn json_contents(
    uri: &str,
    value: &serde_json::Value,
) -> Result<ResourceContents, ResourceError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| ResourceError::render(uri, e))?;
    Ok(ResourceContents::text(text, uri))
}
