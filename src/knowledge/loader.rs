//! Reading documents from disk.
//!
//! PDFs go through `pdf-extract` for text and `lopdf` for the page count;
//! `.txt` and `.md` files are read as UTF-8.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::error::{KnowledgeError, KnowledgeResult};
use super::store::Document;

/// File extensions the loader understands, lower-case.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["pdf", "txt", "md"];

/// A file that could not be loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadFailure {
    pub name: String,
    pub error: String,
}

/// Outcome of loading a directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    pub directory: PathBuf,
    /// Newly loaded documents, in load order.
    pub loaded: Vec<String>,
    /// Files whose name was already in the knowledge base.
    pub skipped: Vec<String>,
    pub failed: Vec<LoadFailure>,
    /// Documents in the knowledge base after loading.
    pub total_documents: usize,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Loaded {} document(s) from {}",
            self.loaded.len(),
            self.directory.display()
        )?;
        for name in &self.loaded {
            writeln!(f, "  + {name}")?;
        }
        if !self.skipped.is_empty() {
            writeln!(f, "Skipped {} already loaded: {}", self.skipped.len(), self.skipped.join(", "))?;
        }
        for failure in &self.failed {
            writeln!(f, "  ! {}: {}", failure.name, failure.error)?;
        }
        write!(f, "Knowledge base now holds {} document(s)", self.total_documents)
    }
}

/// Whether `path` has an extension the loader can read.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Supported files directly inside `dir`, sorted by file name.
pub fn list_documents(dir: &Path) -> KnowledgeResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(KnowledgeError::DirectoryNotFound(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| KnowledgeError::io(dir, e))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_supported(path))
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read one file into a [`Document`] named after its file name.
pub fn load_file(path: &Path) -> KnowledgeResult<Document> {
    let name = file_name(path);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let document = match extension.as_str() {
        "pdf" => {
            let pages = lopdf::Document::load(path)
                .map(|doc| doc.get_pages().len())
                .map_err(|e| KnowledgeError::extraction(&name, e))?;
            let content =
                pdf_extract::extract_text(path).map_err(|e| KnowledgeError::extraction(&name, e))?;
            Document::new(name, content)
                .with_path(path)
                .with_pages(pages)
        }
        "txt" | "md" => {
            let content = fs::read_to_string(path).map_err(|e| KnowledgeError::io(path, e))?;
            Document::new(name, content).with_path(path)
        }
        other => {
            return Err(KnowledgeError::extraction(
                name,
                format!("unsupported file type '.{other}'"),
            ));
        }
    };

    debug!(
        name = %document.name,
        chars = document.content.len(),
        "document read"
    );
    Ok(document)
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
