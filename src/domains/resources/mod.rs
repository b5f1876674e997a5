//! Resources domain module.
//!
//! Resources are read-only data MCP clients can fetch: the particle table,
//! the physical constants, server information and documentation.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! **No need to modify `service.rs`!**

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{
    DynamicResourceType, ResourceContent, ResourceContext, ResourceEntry, ResourceService,
};
