//! Path validation for document loading.
//!
//! Directories handed to the knowledge base are checked against the
//! configured root so a client cannot read arbitrary files.

pub mod path_validator;

pub use path_validator::{PathSecurityError, validate_path};
