//! Event study prompt definition.

use std::collections::HashMap;

use super::{PromptDefinition, optional, parse_optional};
use crate::domains::prompts::error::PromptError;
use rmcp::model::PromptArgument;

/// Generate events and compare them with the model.
pub struct EventStudyPrompt;

impl PromptDefinition for EventStudyPrompt {
    const NAME: &'static str = "event_study";
    const DESCRIPTION: &'static str =
        "Generate quark-model events and compare sample statistics with the analytic values";

    fn template() -> &'static str {
        r#"Study the quark distribution model with the default truth parameters [-0.4, 2.4, 0.5, -0.06, 0.4, 0.48].

1. Call generate_physics_events with num_events = {{#if num_events}}{{num_events}}{{else}}10000{{/if}}{{#if seed}} and seed = {{seed}}{{/if}}.
2. Compare the sample mean and standard deviation of σ1 = 4u + d and σ2 = 4d + u with the analytic values in the result.
3. Call visualize_quark_distributions and describe how u/d and σ1/σ2 change with x.
4. Explain what the σ1/σ2 ratio tells us about the valence quark content of the proton and neutron.
{{#if seed}}Report the seed so the run can be repeated.{{else}}Report the seed returned by the tool so the run can be repeated.{{/if}}"#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            optional("num_events", "Number of events to generate (default 10000)"),
            optional("seed", "Random seed for a reproducible run"),
        ]
    }

    fn validate(arguments: &HashMap<String, String>) -> Result<(), PromptError> {
        if let Some(n) = parse_optional::<i64>(arguments, "num_events")? {
            if n <= 0 {
                return Err(PromptError::invalid_argument(
                    "num_events",
                    format!("must be positive, got {n}"),
                ));
            }
        }
        parse_optional::<u64>(arguments, "seed")?;
        Ok(())
    }
}
