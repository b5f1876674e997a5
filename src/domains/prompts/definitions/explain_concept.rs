//! Explain concept prompt definition.

use super::{PromptDefinition, optional, required};
use rmcp::model::PromptArgument;

/// Ask for an explanation of a physics concept.
pub struct ExplainConceptPrompt;

impl PromptDefinition for ExplainConceptPrompt {
    const NAME: &'static str = "explain_concept";
    const DESCRIPTION: &'static str = "Ask for an explanation of a physics concept";

    fn template() -> &'static str {
        r#"Please explain {{topic}}{{#if level}} for someone with {{level}} knowledge{{else}} for a physics undergraduate{{/if}}.

Provide:
1. A clear definition
2. The governing equations, with units
3. A worked numerical example using the server's calculation tools
4. Where it shows up in experiments

Search the knowledge base for {{topic}} first and cite what you find."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required("topic", "The concept to explain, e.g. 'time dilation'"),
            optional(
                "level",
                "The expertise level: beginner, intermediate, or advanced",
            ),
        ]
    }
}
