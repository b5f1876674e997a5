//! Particle property lookup tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolDefinition, physics_error_result, success_result};
use super::describe_particle;
use crate::domains::tools::ToolContext;
use crate::physics::get_particle_properties;

/// Parameters for the particle property tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ParticlePropertiesParams {
    /// Particle name, case-insensitive (e.g. "electron", "muon", "pion+").
    pub particle_name: String,
}

/// Particle property lookup tool.
pub struct ParticlePropertiesTool;

impl ToolDefinition for ParticlePropertiesTool {
    const NAME: &'static str = "get_particle_properties";

    const DESCRIPTION: &'static str = "Look up a particle's rest mass (MeV/c²), electric charge (e), mean lifetime (s) \
         and spin. Unknown names return the list of available particles.";

    type Params = ParticlePropertiesParams;

    #[instrument(skip_all, fields(particle = %params.particle_name))]
    fn execute(params: &Self::Params, _ctx: &ToolContext) -> CallToolResult {
        info!("Particle properties tool called");

        match get_particle_properties(params.particle_name.trim()) {
            Ok(particle) => success_result(describe_particle(particle), particle.to_json()),
            Err(e) => physics_error_result(&e),
        }
    }
}
