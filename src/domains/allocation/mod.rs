//! Allocation domain module.
//!
//! This module owns the engineer/project/allocation records and the rules
//! that keep allocations consistent. Protocol adapters (tools, resources)
//! reach it only through the [`AllocationService`] trait.
//!
//! ## Architecture
//!
//! - `models.rs` - Engineer, Project, Allocation and the result envelope
//! - `dates.rs` - Date parsing/formatting and the range overlap predicate
//! - `registry.rs` - In-memory registry with queries, allocate and update
//! - `loader.rs` - Startup loader for the JSON data files
//! - `service.rs` - Async service trait and the lock-guarded shared registry
//! - `error.rs` - Allocation error taxonomy

pub mod dates;
mod error;
pub mod loader;
mod models;
mod registry;
mod service;

pub use dates::DateRange;
pub use error::{AllocationError, CapacityCheck, EntityKind};
pub use loader::DataLoader;
pub use models::{Allocation, AllocationResult, Engineer, Project};
pub use registry::{AllocateRequest, AllocationRegistry, MAX_ALLOCATION_PERCENTAGE, UpdateRequest};
pub use service::{AllocationService, SharedRegistry};
