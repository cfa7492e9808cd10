//! Domains module containing business logic organized by bounded contexts.
//!
//! `allocation` owns the data and its rules; `tools`, `resources` and
//! `prompts` adapt it to the MCP protocol.

pub mod allocation;
pub mod prompts;
pub mod resources;
pub mod tools;
