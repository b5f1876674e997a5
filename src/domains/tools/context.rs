//! Shared state handed to every tool call.

use std::sync::Arc;

use crate::core::config::Config;
use crate::knowledge::KnowledgeBase;

/// What a tool may read while it runs.
///
/// Cloning is cheap; both fields are shared.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub config: Arc<Config>,
    pub knowledge: Arc<KnowledgeBase>,
}

impl ToolContext {
    pub fn new(config: Arc<Config>, knowledge: Arc<KnowledgeBase>) -> Self {
        Self { config, knowledge }
    }

    /// A context with an empty knowledge base.
    pub fn from_config(config: Config) -> Self {
        Self::new(Arc::new(config), Arc::new(KnowledgeBase::new()))
    }
}

impl Default for ToolContext {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
