//! Bulk loader for the registry's data files.
//!
//! Reads `engineers.json`, `projects.json` and `allocations.json` from a data
//! directory once at startup. A file that is missing or fails to parse leaves
//! its collection empty; loading never aborts the server. Allocations are
//! admitted one by one under the allocate rules, and a record that breaks one
//! is skipped with a warning.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::models::{Allocation, Engineer, Project};
use super::registry::AllocationRegistry;
use crate::core::Result;

pub const ENGINEERS_FILE: &str = "engineers.json";
pub const PROJECTS_FILE: &str = "projects.json";
pub const ALLOCATIONS_FILE: &str = "allocations.json";

/// Loads the three entity collections from a directory.
#[derive(Debug, Clone)]
pub struct DataLoader {
    data_dir: PathBuf,
}

impl DataLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Build a registry from whatever data is available.
    pub fn load(&self) -> AllocationRegistry {
        if !self.data_dir.is_dir() {
            warn!(
                "Data directory {:?} not found - starting with an empty registry",
                self.data_dir
            );
            return AllocationRegistry::new();
        }

        info!("Loading allocation data from {:?}", self.data_dir);

        let engineers: Vec<Engineer> = self.load_or_empty(ENGINEERS_FILE);
        let projects: Vec<Project> = self.load_or_empty(PROJECTS_FILE);
        let allocations: Vec<Allocation> = self.load_or_empty(ALLOCATIONS_FILE);

        let mut registry = AllocationRegistry::from_parts(engineers, projects, Vec::new());
        let total = allocations.len();
        for allocation in allocations {
            let id = allocation.id.clone();
            if registry.allocation(&id).is_some() {
                warn!("Skipping allocation {}: duplicate ID", id);
                continue;
            }
            if let Err(e) = registry.admit(allocation) {
                warn!("Skipping allocation {}: {}", id, e);
            }
        }
        info!(
            "Accepted {} of {} allocation(s)",
            registry.allocations().len(),
            total
        );

        registry
    }

    fn load_or_empty<T: DeserializeOwned>(&self, file_name: &str) -> Vec<T> {
        let path = self.data_dir.join(file_name);
        if !path.exists() {
            warn!("{} not found in {:?}, skipping", file_name, self.data_dir);
            return Vec::new();
        }

        match read_collection(&path) {
            Ok(items) => {
                info!("Loaded {} record(s) from {}", items.len(), file_name);
                items
            }
            Err(e) => {
                warn!("Failed to load {}: {}", file_name, e);
                Vec::new()
            }
        }
    }
}

/// Read a JSON array of `T` from `path`.
pub fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
