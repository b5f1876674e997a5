//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, ResourceTemplate};

use super::definitions::{
    ConstantsResource, DocsReadmeResource, ParticleTableResource, ParticleTemplate,
    ResourceDefinition, ServerInfoResource,
};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<ParticleTableResource>(),
        build_resource::<ConstantsResource>(),
        build_resource::<ServerInfoResource>(),
        build_resource::<DocsReadmeResource>(),
    ]
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![ParticleTemplate::template()]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        ParticleTableResource::URI,
        ConstantsResource::URI,
        ServerInfoResource::URI,
        DocsReadmeResource::URI,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 4);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert!(uris.contains(&"physics://particles"));
        assert!(uris.contains(&"physics://constants"));
        assert!(uris.contains(&"mcp://server/info"));
        assert!(uris.contains(&"mcp://server/docs/readme"));
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, "physics://particles/{name}");
    }

    #[test]
    fn test_resource_uris_match_entries() {
        let uris = resource_uris();
        let entries = get_all_resources();
        assert_eq!(uris.len(), entries.len());
        for (uri, entry) in uris.iter().zip(&entries) {
            assert_eq!(*uri, entry.resource.raw.uri);
        }
    }
}
