//! Literature knowledge base.
//!
//! Documents are loaded from a directory (PDF, plain text, Markdown) into an
//! in-memory store and searched by keyword. The store is owned by the server
//! and passed to tools through their context.

mod error;
pub mod loader;
pub mod search;
mod store;

pub use error::{KnowledgeError, KnowledgeResult};
pub use loader::{LoadFailure, LoadReport};
pub use search::{DEFAULT_MAX_CHARS, DEFAULT_MAX_SECTIONS, SearchOutcome, Snippet};
pub use store::{Document, KnowledgeBase};
