//! Physics assistant prompt definition.

use super::{PromptDefinition, optional};
use rmcp::model::PromptArgument;

/// Frames a conversation around the physics tools.
pub struct PhysicsAssistantPrompt;

impl PromptDefinition for PhysicsAssistantPrompt {
    const NAME: &'static str = "physics_assistant";
    const DESCRIPTION: &'static str =
        "Set up a particle and nuclear physics assistant that uses this server's tools";

    fn template() -> &'static str {
        r#"You are assisting with particle and nuclear physics research{{#if focus}}, focusing on {{focus}}{{/if}}.

Use the server's tools rather than estimating:
- calculate_relativistic_energy, calculate_lorentz_factor, calculate_decay_probability and calculate_binding_energy for kinematics and nuclear masses
- get_particle_properties and list_particles for masses, charges, lifetimes and spins
- generate_physics_events and visualize_quark_distributions for the quark distribution model
- search_knowledge_base for background from the loaded literature

When solving a problem:
1. Break it into clear steps
2. State units (MeV, seconds, u) with every number
3. Show the formula before the result
4. Cite the knowledge base when you rely on it"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![optional(
            "focus",
            "Optional area to focus on, e.g. 'muon decay' or 'nuclear binding'",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physics_assistant_metadata() {
        assert_eq!(PhysicsAssistantPrompt::NAME, "physics_assistant");
        let args = PhysicsAssistantPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].required, Some(false));
    }
}
