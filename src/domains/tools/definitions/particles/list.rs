//! Particle listing tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolDefinition, success_result};
use super::describe_particle;
use crate::domains::tools::ToolContext;
use crate::physics::all_particles;

/// The list tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListParticlesParams {}

/// Lists every particle in the table.
pub struct ListParticlesTool;

impl ToolDefinition for ListParticlesTool {
    const NAME: &'static str = "list_particles";

    const DESCRIPTION: &'static str =
        "List every particle in the property table with its mass, charge, lifetime and spin.";

    type Params = ListParticlesParams;

    #[instrument(skip_all)]
    fn execute(_params: &Self::Params, _ctx: &ToolContext) -> CallToolResult {
        info!("List particles tool called");

        let particles = all_particles();
        let mut text = format!("{} particles available:\n", particles.len());
        for p in particles {
            text.push_str("  ");
            text.push_str(&describe_particle(p));
            text.push('\n');
        }

        let data: Vec<serde_json::Value> = particles.iter().map(|p| p.to_json()).collect();
        success_result(text, serde_json::json!({ "particles": data }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_particles() {
        let result = ListParticlesTool::call(serde_json::Value::Null, &ToolContext::default()).unwrap();
        let data = result.structured_content.unwrap();
        let particles = data["particles"].as_array().unwrap();
        assert_eq!(particles.len(), all_particles().len());
        assert_eq!(particles[0]["name"], "electron");
    }
}
