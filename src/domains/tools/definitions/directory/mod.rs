//! Directory tools: read-only lookups of engineers and projects.

mod engineers;
mod projects;

pub use engineers::{GetEngineerByIdTool, ListEngineersTool};
pub use projects::{GetProjectByIdTool, ListProjectsTool};
