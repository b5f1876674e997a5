//! Physical constants resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;
use crate::physics::constants_table;

/// Constants used by the calculations (static JSON).
pub struct ConstantsResource;

impl ResourceDefinition for ConstantsResource {
    const URI: &'static str = "physics://constants";
    const NAME: &'static str = "Physical Constants";
    const DESCRIPTION: &'static str =
        "Nucleon and electron masses (u), the u → MeV conversion and the event-generation support";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Text(serde_json::json!(constants_table()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_content() {
        match ConstantsResource::content() {
            ResourceContent::Text(text) => {
                assert!(text.contains("931.494"));
            }
            _ => panic!("Expected Text content"),
        }
    }
}
