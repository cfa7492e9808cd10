//! Transport layer for the MCP server.
//!
//! - **STDIO** (`stdio`, default): one session over stdin/stdout
//! - **TCP** (`tcp`): one session per accepted connection
//! - **HTTP** (`http`): stateless JSON-RPC over POST, via axum
//!
//! All transports serve clones of the same [`McpServer`](crate::core::McpServer),
//! so every session sees the same allocation registry.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
