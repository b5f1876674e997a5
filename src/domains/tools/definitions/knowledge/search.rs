//! Knowledge-base search tool definition.

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolDefinition, error_result, success_result};
use crate::domains::tools::ToolContext;
use crate::knowledge::DEFAULT_MAX_CHARS;

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

/// Parameters for the knowledge-base search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchKnowledgeParams {
    /// Search query or topic to look up.
    pub query: String,

    /// Maximum characters of matched text to return (default 8000).
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

/// Keyword search over the loaded documents.
pub struct SearchKnowledgeTool;

impl ToolDefinition for SearchKnowledgeTool {
    const NAME: &'static str = "search_knowledge_base";

    const DESCRIPTION: &'static str = "Search the physics knowledge base (loaded papers, textbooks and notes) for \
         passages relevant to the query. Returns matching lines with surrounding context, \
         most relevant first.";

    type Params = SearchKnowledgeParams;

    #[instrument(skip_all, fields(query = %params.query, max_chars = params.max_chars))]
    fn execute(params: &Self::Params, ctx: &ToolContext) -> CallToolResult {
        info!("Knowledge search tool called");

        let max_sections = ctx.config.knowledge.max_sections;
        match ctx
            .knowledge
            .search(&params.query, params.max_chars, max_sections)
        {
            Ok(outcome) => success_result(outcome.to_string(), outcome),
            Err(e) => error_result(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::common::result_text;

    fn ctx_with_docs() -> ToolContext {
        let ctx = ToolContext::default();
        ctx.knowledge
            .add_document(
                "dis.txt",
                "Deep inelastic scattering resolves\nthe quark structure of the proton.\nBjorken x is the momentum fraction.",
            )
            .unwrap();
        ctx
    }

    #[test]
    fn test_search_finds_matches() {
        let args = serde_json::json!({ "query": "Quark proton" });
        let result = SearchKnowledgeTool::call(args, &ctx_with_docs()).unwrap();
        let text = result_text(&result).unwrap();
        assert!(text.starts_with("Found 1 relevant sections"));
        assert!(text.contains("[From dis.txt]"));
        assert_eq!(result.structured_content.unwrap()["status"], "found");
    }

    #[test]
    fn test_empty_knowledge_base() {
        let args = serde_json::json!({ "query": "quark" });
        let result = SearchKnowledgeTool::call(args, &ToolContext::default()).unwrap();
        assert!(result_text(&result).unwrap().contains("No documents loaded"));
    }

    #[test]
    fn test_blank_query_is_error() {
        let args = serde_json::json!({ "query": "   " });
        let result = SearchKnowledgeTool::call(args, &ctx_with_docs()).unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}
