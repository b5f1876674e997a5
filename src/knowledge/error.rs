//! Knowledge-base error types.

use std::path::PathBuf;

use thiserror::Error;

/// A specialized Result type for knowledge-base operations.
pub type KnowledgeResult<T> = std::result::Result<T, KnowledgeError>;

/// Errors that can occur while loading or searching documents.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// The search request itself is malformed.
    #[error("Invalid search request: {0}")]
    Validation(String),

    /// The documents directory does not exist or is not a directory.
    #[error("Documents directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Reading a file or directory failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Text could not be extracted from a document.
    #[error("Failed to extract text from {name}: {reason}")]
    Extraction { name: String, reason: String },

    /// A writer panicked while holding the document store.
    #[error("Knowledge base lock poisoned")]
    LockPoisoned,
}

impl KnowledgeError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a new extraction error.
    pub fn extraction(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Extraction {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
