//! Prompt Registry - central registration of all prompts.
//!
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_prompts()`

use std::collections::HashMap;

use super::definitions::{
    EventStudyPrompt, ExplainConceptPrompt, ParticleAnalysisPrompt, PhysicsAssistantPrompt,
    PromptDefinition,
};
use super::error::PromptError;
use super::templates::PromptTemplate;

/// Argument validation hook of a registered prompt.
pub type PromptValidator = fn(&HashMap<String, String>) -> Result<(), PromptError>;

/// A registered prompt: its template plus the argument validator.
#[derive(Debug, Clone)]
pub struct RegisteredPrompt {
    pub template: PromptTemplate,
    pub validate: PromptValidator,
}

fn register<P: PromptDefinition>() -> RegisteredPrompt {
    RegisteredPrompt {
        template: PromptTemplate::new(
            P::NAME,
            Some(P::DESCRIPTION.to_string()),
            P::arguments(),
            P::template(),
        ),
        validate: P::validate,
    }
}

/// Get all registered prompts, in listing order.
pub fn get_all_prompts() -> Vec<RegisteredPrompt> {
    vec![
        register::<PhysicsAssistantPrompt>(),
        register::<ExplainConceptPrompt>(),
        register::<ParticleAnalysisPrompt>(),
        register::<EventStudyPrompt>(),
    ]
}

/// Get the list of all prompt names.
pub fn prompt_names() -> Vec<&'static str> {
    vec![
        PhysicsAssistantPrompt::NAME,
        ExplainConceptPrompt::NAME,
        ParticleAnalysisPrompt::NAME,
        EventStudyPrompt::NAME,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        let names: Vec<_> = prompts.iter().map(|p| p.template.name.as_str()).collect();
        assert_eq!(names, prompt_names());
    }

    #[test]
    fn test_every_template_renders_with_required_arguments() {
        for prompt in get_all_prompts() {
            let args: HashMap<String, String> = prompt
                .template
                .required_arguments()
                .map(|name| (name.to_string(), "muon".to_string()))
                .collect();
            let text = prompt.template.render(&args).unwrap();
            assert!(!text.contains("{{"), "{} left a tag behind", prompt.template.name);
        }
    }
}
