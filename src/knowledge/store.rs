//! In-memory document store.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::Serialize;
use tracing::{info, instrument, warn};

use super::error::{KnowledgeError, KnowledgeResult};
use super::loader::{self, LoadFailure, LoadReport};
use super::search::{self, SearchOutcome};

/// A loaded document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Unique name, the file name for documents loaded from disk.
    pub name: String,
    #[serde(skip)]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Page count, known for PDFs only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<usize>,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            path: None,
            pages: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_pages(mut self, pages: usize) -> Self {
        self.pages = Some(pages);
        self
    }

    /// `name (N pages)` for PDFs, `name (N lines)` otherwise.
    pub fn describe(&self) -> String {
        match self.pages {
            Some(pages) => format!("{} ({} pages)", self.name, pages),
            None => format!("{} ({} lines)", self.name, self.content.lines().count()),
        }
    }
}

/// Documents available to the search tool.
///
/// Owned by the server and shared behind an `Arc`; the lock makes loading
/// and searching safe from concurrent tool calls.
#[derive(Debug, Default)]
pub struct KnowledgeBase {
    documents: RwLock<Vec<Document>>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> KnowledgeResult<std::sync::RwLockReadGuard<'_, Vec<Document>>> {
        self.documents
            .read()
            .map_err(|_| KnowledgeError::LockPoisoned)
    }

    fn write(&self) -> KnowledgeResult<std::sync::RwLockWriteGuard<'_, Vec<Document>>> {
        self.documents
            .write()
            .map_err(|_| KnowledgeError::LockPoisoned)
    }

    /// Insert a document unless one with the same name exists.
    ///
    /// Returns `true` when the document was added.
    pub fn insert(&self, document: Document) -> KnowledgeResult<bool> {
        let mut documents = self.write()?;
        if documents.iter().any(|d| d.name == document.name) {
            return Ok(false);
        }
        documents.push(document);
        Ok(true)
    }

    /// Add in-memory text as a document.
    pub fn add_document(
        &self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> KnowledgeResult<bool> {
        self.insert(Document::new(name, content))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read()
            .map(|docs| docs.iter().any(|d| d.name == name))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.read().map(|docs| docs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One-line description of every document, in load order.
    pub fn describe_all(&self) -> KnowledgeResult<Vec<String>> {
        Ok(self.read()?.iter().map(Document::describe).collect())
    }

    /// Load every supported file in `dir`.
    ///
    /// Files are visited in file-name order; names already present are
    /// skipped, and a file that fails to load is reported without aborting
    /// the rest.
    #[instrument(skip(self), fields(dir = %dir.display()))]
    pub fn load_directory(&self, dir: &Path) -> KnowledgeResult<LoadReport> {
        let files = loader::list_documents(dir)?;
        let mut report = LoadReport {
            directory: dir.to_path_buf(),
            ..LoadReport::default()
        };

        for path in files {
            let name = loader::file_name(&path);
            if self.contains(&name) {
                report.skipped.push(name);
                continue;
            }

            match loader::load_file(&path) {
                Ok(document) => {
                    if self.insert(document)? {
                        report.loaded.push(name);
                    } else {
                        report.skipped.push(name);
                    }
                }
                Err(e) => {
                    warn!("Failed to load {}: {}", path.display(), e);
                    report.failed.push(LoadFailure {
                        name,
                        error: e.to_string(),
                    });
                }
            }
        }

        report.total_documents = self.len();
        info!(
            loaded = report.loaded.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "Documents loaded"
        );
        Ok(report)
    }

    /// Keyword search over all documents.
    ///
    /// See [`search::search_documents`] for the ranking rules.
    pub fn search(
        &self,
        query: &str,
        max_chars: usize,
        max_sections: usize,
    ) -> KnowledgeResult<SearchOutcome> {
        let documents = self.read()?;
        search::search_documents(&documents, query, max_chars, max_sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_add_document_rejects_duplicate_names() {
        let kb = KnowledgeBase::new();
        assert!(kb.add_document("a.txt", "alpha").unwrap());
        assert!(!kb.add_document("a.txt", "other").unwrap());
        assert_eq!(kb.len(), 1);
        assert!(kb.contains("a.txt"));
    }

    #[test]
    fn test_load_directory_reads_text_and_skips_duplicates() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("qcd.txt"), "quarks carry color charge").unwrap();
        fs::write(dir.path().join("notes.md"), "# Notes\nLorentz factor").unwrap();
        fs::write(dir.path().join("ignore.csv"), "a,b").unwrap();

        let kb = KnowledgeBase::new();
        let first = kb.load_directory(dir.path()).unwrap();
        assert_eq!(first.loaded, vec!["notes.md", "qcd.txt"]);
        assert!(first.failed.is_empty());
        assert_eq!(first.total_documents, 2);

        let second = kb.load_directory(dir.path()).unwrap();
        assert!(second.loaded.is_empty());
        assert_eq!(second.skipped, vec!["notes.md", "qcd.txt"]);
        assert_eq!(kb.len(), 2);
    }

    #[test]
    fn test_load_directory_reports_bad_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.pdf"), "not really a pdf").unwrap();
        fs::write(dir.path().join("good.txt"), "fine").unwrap();

        let kb = KnowledgeBase::new();
        let report = kb.load_directory(dir.path()).unwrap();
        assert_eq!(report.loaded, vec!["good.txt"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].name, "bad.pdf");
    }

    #[test]
    fn test_load_missing_directory() {
        let kb = KnowledgeBase::new();
        let err = kb
            .load_directory(Path::new("/nonexistent/pdfs/12345"))
            .unwrap_err();
        assert!(matches!(err, KnowledgeError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_describe_all_in_load_order() {
        let kb = KnowledgeBase::new();
        kb.add_document("b.txt", "line one\nline two").unwrap();
        kb.add_document("a.txt", "single").unwrap();
        assert_eq!(
            kb.describe_all().unwrap(),
            vec!["b.txt (2 lines)", "a.txt (1 lines)"]
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(Document::new("a.txt", "x\ny").describe(), "a.txt (2 lines)");
        assert_eq!(
            Document::new("p.pdf", "").with_pages(12).describe(),
            "p.pdf (12 pages)"
        );
    }
}
