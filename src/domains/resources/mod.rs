//! Resources domain module.
//!
//! Resources are read-only views clients can fetch by URI: JSON snapshots of
//! the registry collections, per-engineer and per-project allocation lists
//! (via URI templates) and a markdown description of the allocation rules.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions
//! - `registry.rs` - Central resource registration and template matching
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
pub use registry::{TemplateTarget, get_all_resources, match_template, resource_uris};
pub use service::{DynamicResourceType, ResourceContent, ResourceEntry, ResourceService};
