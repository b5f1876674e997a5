//! Particle table resource and the per-particle resource template.

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceContents, ResourceTemplate};

use super::{ResourceDefinition, json_contents};
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::ResourceContent;
use crate::physics::{all_particles, get_particle_properties};

/// The whole particle table as JSON.
pub struct ParticleTableResource;

impl ResourceDefinition for ParticleTableResource {
    const URI: &'static str = "physics://particles";
    const NAME: &'static str = "Particle Table";
    const DESCRIPTION: &'static str =
        "Mass (MeV/c²), charge (e), mean lifetime (s) and spin of every known particle";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        let particles: Vec<serde_json::Value> = all_particles().iter().map(|p| p.to_json()).collect();
        ResourceContent::Text(serde_json::json!({ "particles": particles }).to_string())
    }
}

/// `physics://particles/{name}`: one particle record.
pub struct ParticleTemplate;

impl ParticleTemplate {
    pub const URI_PREFIX: &'static str = "physics://particles/";
    pub const URI_TEMPLATE: &'static str = "physics://particles/{name}";

    /// Template metadata for listing.
    pub fn template() -> ResourceTemplate {
        RawResourceTemplate {
            uri_template: Self::URI_TEMPLATE.to_string(),
            name: "Particle Properties".to_string(),
            title: Some("Single Particle".to_string()),
            description: Some(
                "Properties of one particle by name, e.g. physics://particles/muon".to_string(),
            ),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation()
    }

    /// Whether `uri` is an instance of this template.
    pub fn matches(uri: &str) -> bool {
        uri.starts_with(Self::URI_PREFIX)
    }

    /// Resolve a concrete URI to the particle's JSON record.
    pub fn resolve(uri: &str) -> Result<ResourceContents, ResourceError> {
        let name = uri
            .strip_prefix(Self::URI_PREFIX)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ResourceError::MissingParticleName(uri.to_string()))?;
        let particle = get_particle_properties(name).map_err(ResourceError::UnknownParticle)?;
        json_contents(uri, &particle.to_json())
    }
}
