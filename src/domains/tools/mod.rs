//! Tools domain module.
//!
//! Tools are the executable side of the server: registry queries and the
//! allocate/update mutations, each forwarded to the
//! [`AllocationService`](crate::domains::allocation::AllocationService).
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! **No need to modify `server.rs` when adding a tool.** The router is built dynamically.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
