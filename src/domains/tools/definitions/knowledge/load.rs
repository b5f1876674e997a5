//! Document loading tool definition.

use std::path::PathBuf;

use rmcp::model::CallToolResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::super::common::{ToolDefinition, error_result, success_result};
use crate::core::security::validate_path;
use crate::domains::tools::ToolContext;

/// Parameters for the document loading tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct LoadDocumentsParams {
    /// Directory containing .pdf, .txt or .md files. Defaults to the configured documents directory.
    #[serde(default)]
    pub directory: Option<String>,
}

/// Loads documents into the knowledge base.
pub struct LoadDocumentsTool;

impl ToolDefinition for LoadDocumentsTool {
    const NAME: &'static str = "load_documents";

    const DESCRIPTION: &'static str = "Load PDF, text and Markdown documents from a directory into the knowledge base. \
         Documents already loaded are skipped.";

    type Params = LoadDocumentsParams;

    #[instrument(skip_all, fields(directory = ?params.directory))]
    fn execute(params: &Self::Params, ctx: &ToolContext) -> CallToolResult {
        info!("Load documents tool called");

        let requested = params
            .directory
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| ctx.config.knowledge.documents_dir.clone());

        let directory = match validate_path(&requested, &ctx.config) {
            Ok(p) => p,
            Err(e) => {
                warn!("Path security validation failed: {}", e);
                return error_result(format!("Path security validation failed: {}", e));
            }
        };

        match ctx.knowledge.load_directory(&directory) {
            Ok(report) => success_result(report.to_string(), &report),
            Err(e) => error_result(e.to_string()),
        }
    }
}
