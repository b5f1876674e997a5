//! Relativistic energy tool definition.
//!
//! Computes `E = sqrt(m² + p²)` (natural units, MeV) and the kinetic energy.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolDefinition, physics_error_result, success_result};
use crate::domains::tools::ToolContext;
use crate::physics::{kinetic_energy, relativistic_energy};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the relativistic energy tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RelativisticEnergyParams {
    /// Particle rest mass in MeV/c².
    #[serde(alias = "mass_MeV")]
    pub mass_mev: f64,

    /// Particle momentum in MeV/c.
    #[serde(alias = "momentum_MeV")]
    pub momentum_mev: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Relativistic energy tool.
pub struct RelativisticEnergyTool;

impl ToolDefinition for RelativisticEnergyTool {
    const NAME: &'static str = "calculate_relativistic_energy";

    const DESCRIPTION: &'static str = "Calculate the total relativistic energy E = sqrt((mc²)² + (pc)²) of a particle \
         from its rest mass (MeV/c²) and momentum (MeV/c). Returns the energy in MeV.";

    type Params = RelativisticEnergyParams;

    #[instrument(skip_all, fields(mass = params.mass_mev, momentum = params.momentum_mev))]
    fn execute(params: &Self::Params, _ctx: &ToolContext) -> CallToolResult {
        info!("Relativistic energy tool called");

        let energy = match relativistic_energy(params.mass_mev, params.momentum_mev) {
            Ok(e) => e,
            Err(e) => return physics_error_result(&e),
        };
        let kinetic = match kinetic_energy(params.mass_mev, params.momentum_mev) {
            Ok(t) => t,
            Err(e) => return physics_error_result(&e),
        };

        let text = format!(
            "Relativistic energy for m = {} MeV/c², p = {} MeV/c:\n  E = {:.6} MeV\n  T = E - m = {:.6} MeV",
            params.mass_mev, params.momentum_mev, energy, kinetic
        );
        success_result(
            text,
            serde_json::json!({
                "mass_MeV": params.mass_mev,
                "momentum_MeV": params.momentum_mev,
                "energy_MeV": energy,
                "kinetic_energy_MeV": kinetic,
            }),
        )
    }
}
