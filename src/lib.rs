//! Project allocation MCP server.
//!
//! Tracks which engineers work on which projects, for what share of their
//! time and over which dates, and exposes that registry to MCP clients.
//! Allocate and update requests are validated so that no engineer is ever
//! booked above 100% or twice on the same project for overlapping dates.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**:
//!   - **allocation**: records, date ranges, the registry and its rules, the data loader
//!   - **tools**: MCP tools mapping onto registry operations
//!   - **resources**: JSON snapshots and the allocation rules document
//!   - **prompts**: prompt templates filled in with registry context
//!
//! # Example
//!
//! ```rust,no_run
//! use allocation_mcp_server::core::{Config, McpServer};
//! use allocation_mcp_server::domains::allocation::{DataLoader, SharedRegistry};
//!
//! let config = Config::from_env();
//! let registry = DataLoader::new(&config.data.data_dir).load();
//! let server = McpServer::new(config, SharedRegistry::new(registry).into_service());
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
