//! Allocation tools: queries over allocations plus the allocate and update
//! mutations.

mod allocate;
mod list;
mod update;

pub use allocate::{AllocateEngineerParams, AllocateEngineerTool};
pub use list::{
    GetAllocationByIdTool, ListAllocationsParams, ListAllocationsTool,
    ListEngineerAllocationsTool, ListProjectAllocationsTool,
};
pub use update::{UpdateAllocationParams, UpdateAllocationTool};
