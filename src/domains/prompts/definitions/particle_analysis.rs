//! Particle analysis prompt definition.

use std::collections::HashMap;

use super::{PromptDefinition, optional, parse_optional, required};
use crate::domains::prompts::error::PromptError;
use crate::physics::get_particle_properties;
use rmcp::model::PromptArgument;

/// Walk through the kinematics of one particle.
pub struct ParticleAnalysisPrompt;

impl PromptDefinition for ParticleAnalysisPrompt {
    const NAME: &'static str = "particle_analysis";
    const DESCRIPTION: &'static str =
        "Analyze a particle's properties and kinematics with the calculation tools";

    fn template() -> &'static str {
        r#"Analyze the {{particle}}.

1. Look up its properties with get_particle_properties.
{{#if momentum_mev}}2. At a momentum of {{momentum_mev}} MeV/c, compute its total energy with calculate_relativistic_energy, then its velocity v = p/E and Lorentz factor.
3. Using the lab-frame lifetime γτ, compute the probability that it decays within 1 ns, 1 µs and 1 ms.{{else}}2. Compute its Lorentz factor at v = 0.5c, 0.9c and 0.99c.
3. Compute the probability that it decays within one, two and five mean lifetimes at rest.{{/if}}
4. Summarize what these numbers mean for detecting it in an experiment."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required("particle", "Particle name, e.g. 'muon' or 'pion+'"),
            optional("momentum_mev", "Optional momentum in MeV/c"),
        ]
    }

    fn validate(arguments: &HashMap<String, String>) -> Result<(), PromptError> {
        if let Some(name) = arguments.get("particle") {
            get_particle_properties(name.trim())
                .map_err(|e| PromptError::invalid_argument("particle", e.to_string()))?;
        }
        if let Some(p) = parse_optional::<f64>(arguments, "momentum_mev")? {
            if !(p.is_finite() && p >= 0.0) {
                return Err(PromptError::invalid_argument(
                    "momentum_mev",
                    format!("must be a non-negative number, got {p}"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_validate_accepts_known_particle() {
        assert!(ParticleAnalysisPrompt::validate(&args(&[("particle", "Muon")])).is_ok());
        assert!(
            ParticleAnalysisPrompt::validate(&args(&[("particle", "kaon+"), ("momentum_mev", "250")]))
                .is_ok()
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ParticleAnalysisPrompt::validate(&args(&[("particle", "graviton")])).is_err());
        assert!(
            ParticleAnalysisPrompt::validate(&args(&[("particle", "muon"), ("momentum_mev", "fast")]))
                .is_err()
        );
        assert!(
            ParticleAnalysisPrompt::validate(&args(&[("particle", "muon"), ("momentum_mev", "-3")]))
                .is_err()
        );
    }
}
