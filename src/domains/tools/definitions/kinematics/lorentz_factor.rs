//! Lorentz factor tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolDefinition, physics_error_result, success_result};
use crate::domains::tools::ToolContext;
use crate::physics::lorentz_factor;

/// Parameters for the Lorentz factor tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LorentzFactorParams {
    /// Velocity as a fraction of the speed of light, strictly between -1 and 1.
    pub velocity_fraction: f64,
}

/// Lorentz factor tool.
pub struct LorentzFactorTool;

impl ToolDefinition for LorentzFactorTool {
    const NAME: &'static str = "calculate_lorentz_factor";

    const DESCRIPTION: &'static str = "Calculate the Lorentz factor γ = 1/sqrt(1 - v²/c²) for a velocity given as a \
         fraction of the speed of light (v/c). |v/c| must be less than 1.";

    type Params = LorentzFactorParams;

    #[instrument(skip_all, fields(v = params.velocity_fraction))]
    fn execute(params: &Self::Params, _ctx: &ToolContext) -> CallToolResult {
        info!("Lorentz factor tool called");

        match lorentz_factor(params.velocity_fraction) {
            Ok(gamma) => success_result(
                format!(
                    "Lorentz factor for v = {}c:\n  γ = {:.9}\n  Time dilation: 1 s in the rest frame lasts {:.6} s in the lab",
                    params.velocity_fraction, gamma, gamma
                ),
                serde_json::json!({
                    "velocity_fraction": params.velocity_fraction,
                    "lorentz_factor": gamma,
                }),
            ),
            Err(e) => physics_error_result(&e),
        }
    }
}
