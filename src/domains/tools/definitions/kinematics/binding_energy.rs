//! Nuclear binding energy tool definition.
//!
//! Takes the measured atomic mass of an isotope and its nucleon counts and
//! reports the total binding energy and the binding energy per nucleon.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolDefinition, physics_error_result, success_result};
use crate::domains::tools::ToolContext;
use crate::physics::{binding_energy, binding_energy_per_nucleon};

/// Parameters for the binding energy tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BindingEnergyParams {
    /// Atomic mass of the isotope in u (e.g. 4.002603 for He-4).
    pub isotope_mass_u: f64,

    /// Number of protons Z.
    pub num_protons: i64,

    /// Number of neutrons N.
    pub num_neutrons: i64,
}

/// Binding energy tool.
pub struct BindingEnergyTool;

impl ToolDefinition for BindingEnergyTool {
    const NAME: &'static str = "calculate_binding_energy";

    const DESCRIPTION: &'static str = "Calculate the nuclear binding energy in MeV from the isotope's atomic mass (u), \
         proton count and neutron count, using the mass defect and 931.494 MeV/u.";

    type Params = BindingEnergyParams;

    #[instrument(skip_all, fields(z = params.num_protons, n = params.num_neutrons))]
    fn execute(params: &Self::Params, _ctx: &ToolContext) -> CallToolResult {
        info!("Binding energy tool called");

        let (mass, z, n) = (params.isotope_mass_u, params.num_protons, params.num_neutrons);
        let energy = match binding_energy(mass, z, n) {
            Ok(e) => e,
            Err(e) => return physics_error_result(&e),
        };
        let per_nucleon = match binding_energy_per_nucleon(mass, z, n) {
            Ok(e) => e,
            Err(e) => return physics_error_result(&e),
        };

        success_result(
            format!(
                "Binding energy for Z = {}, N = {} (M = {} u):\n  B = {:.4} MeV\n  B/A = {:.4} MeV per nucleon",
                params.num_protons, params.num_neutrons, params.isotope_mass_u, energy, per_nucleon
            ),
            serde_json::json!({
                "isotope_mass_u": params.isotope_mass_u,
                "num_protons": params.num_protons,
                "num_neutrons": params.num_neutrons,
                "binding_energy_MeV": energy,
                "binding_energy_per_nucleon_MeV": per_nucleon,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helium_4() {
        let params = BindingEnergyParams {
            isotope_mass_u: 4.002603,
            num_protons: 2,
            num_neutrons: 2,
        };
        let result = BindingEnergyTool::execute(&params, &ToolContext::default());
        let data = result.structured_content.unwrap();
        let energy = data["binding_energy_MeV"].as_f64().unwrap();
        assert!((energy - 28.3).abs() < 0.1);
        assert!((data["binding_energy_per_nucleon_MeV"].as_f64().unwrap() - energy / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_protons_is_error() {
        let args = serde_json::json!({ "isotope_mass_u": 4.0, "num_protons": -1, "num_neutrons": 2 });
        let result = BindingEnergyTool::call(args, &ToolContext::default()).unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_impossible_isotope_is_inconsistent() {
        let params = BindingEnergyParams {
            isotope_mass_u: 5.0,
            num_protons: 2,
            num_neutrons: 2,
        };
        let result = BindingEnergyTool::execute(&params, &ToolContext::default());
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result.structured_content.unwrap()["error"],
            "numerical_inconsistency"
        );
    }

    #[test]
    fn test_overflowing_nucleon_count_is_error() {
        let args = serde_json::json!({
            "isotope_mass_u": 1.0,
            "num_protons": i64::MAX,
            "num_neutrons": 1
        });
        let result = BindingEnergyTool::call(args, &ToolContext::default()).unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.structured_content.unwrap()["error"], "validation");
    }
}
