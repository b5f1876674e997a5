//! Decay probability tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolDefinition, physics_error_result, success_result};
use crate::domains::tools::ToolContext;
use crate::physics::decay_probability;

/// Parameters for the decay probability tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DecayProbabilityParams {
    /// Mean lifetime τ in seconds.
    pub lifetime_s: f64,

    /// Elapsed time t in seconds.
    pub time_s: f64,
}

/// Decay probability tool.
pub struct DecayProbabilityTool;

impl ToolDefinition for DecayProbabilityTool {
    const NAME: &'static str = "calculate_decay_probability";

    const DESCRIPTION: &'static str = "Calculate the probability P(t) = 1 - exp(-t/τ) that a particle with mean \
         lifetime τ (seconds) has decayed after time t (seconds). Returns a value in [0, 1].";

    type Params = DecayProbabilityParams;

    #[instrument(skip_all, fields(tau = params.lifetime_s, t = params.time_s))]
    fn execute(params: &Self::Params, _ctx: &ToolContext) -> CallToolResult {
        info!("Decay probability tool called");

        match decay_probability(params.lifetime_s, params.time_s) {
            Ok(probability) => success_result(
                format!(
                    "Decay probability after t = {} s with τ = {} s:\n  P = {:.6} ({:.4}%)\n  Survival = {:.6}",
                    params.time_s,
                    params.lifetime_s,
                    probability,
                    probability * 100.0,
                    1.0 - probability
                ),
                serde_json::json!({
                    "lifetime_s": params.lifetime_s,
                    "time_s": params.time_s,
                    "probability": probability,
                    "survival_probability": 1.0 - probability,
                }),
            ),
            Err(e) => physics_error_result(&e),
        }
    }
}
