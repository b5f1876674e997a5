//! Literature knowledge-base tools.

pub mod load;
pub mod search;

pub use load::{LoadDocumentsParams, LoadDocumentsTool};
pub use search::{SearchKnowledgeParams, SearchKnowledgeTool};
