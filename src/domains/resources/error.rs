//! Resource-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::knowledge::KnowledgeError;
use crate::physics::PhysicsError;

/// Errors raised while reading a `physics://` or `mcp://` resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// `resources.enabled` is false.
    #[error("Resources are disabled on this server (requested {0})")]
    Disabled(String),

    /// No static resource or template matches the URI.
    #[error("Unknown resource: {0}. Try physics://particles, physics://constants or mcp://server/info")]
    UnknownUri(String),

    /// A `physics://particles/{name}` URI without a name.
    #[error("Particle URI '{0}' has no particle name, expected physics://particles/<name>")]
    MissingParticleName(String),

    /// The particle template named a particle that is not in the table.
    #[error("{0}")]
    UnknownParticle(PhysicsError),

    /// The knowledge base could not be read for a dynamic resource.
    #[error("Knowledge base unavailable: {0}")]
    Knowledge(#[from] KnowledgeError),

    /// Resource JSON could not be rendered.
    #[error("Failed to render {uri}: {source}")]
    Render {
        uri: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ResourceError {
    /// Create an "unknown resource" error.
    pub fn unknown_uri(uri: impl Into<String>) -> Self {
        Self::UnknownUri(uri.into())
    }

    /// Create a "render" error for `uri`.
    pub fn render(uri: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Render {
            uri: uri.into(),
            source,
        }
    }
}

impl From<ResourceError> for McpError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::Disabled(_)
            | ResourceError::UnknownUri(_)
            | ResourceError::UnknownParticle(_) => {
                McpError::resource_not_found(err.to_string(), None)
            }
            ResourceError::MissingParticleName(_) => McpError::invalid_params(err.to_string(), None),
            ResourceError::Knowledge(_) | ResourceError::Render { .. } => {
                McpError::internal_error(err.to_string(), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_uri_suggests_resources() {
        let err = ResourceError::unknown_uri("physics://quarks");
        assert!(err.to_string().contains("physics://quarks"));
        assert!(err.to_string().contains("physics://particles"));
    }

    #[test]
    fn test_unknown_particle_keeps_known_names() {
        let err = ResourceError::UnknownParticle(PhysicsError::not_found("graviton", ["electron", "muon"]));
        assert!(err.to_string().contains("graviton"));
        assert!(err.to_string().contains("muon"));
    }

    #[test]
    fn test_mcp_error_codes() {
        let missing: McpError = ResourceError::MissingParticleName("physics://particles/".into()).into();
        assert_eq!(missing.code.0, -32602);

        let unknown: McpError = ResourceError::unknown_uri("mcp://server/nothing").into();
        assert_eq!(unknown.code.0, -32002);

        let poisoned: McpError = ResourceError::Knowledge(KnowledgeError::LockPoisoned).into();
        assert_eq!(poisoned.code.0, -32603);
    }
}
