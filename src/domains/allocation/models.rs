//! Entity models for engineers, projects and allocations.
//!
//! Field names follow the camelCase layout of the `engineers.json`,
//! `projects.json` and `allocations.json` data files.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::DateRange;

/// A staff member who can be allocated to projects.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Engineer {
    pub id: String,
    pub name: String,
    pub role: String,
    pub skills: Vec<String>,
}

/// A unit of work to which engineers are allocated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
}

/// A share of an engineer's capacity assigned to a project over a date range.
///
/// A missing `end_date` means the allocation is indefinite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: String,
    pub engineer_id: String,
    pub project_id: String,
    pub allocation_percentage: u32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Allocation {
    /// The date range covered by this allocation.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Whether the allocation is running on `date` (both ends inclusive).
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && self.end_date.is_none_or(|end| end >= date)
    }
}

/// Outcome of an allocate or update call.
///
/// Serializes to the `{ success, message, allocation }` envelope returned to
/// clients. Failures carry the rendered [`AllocationError`](super::AllocationError)
/// message and no allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<Allocation>,
}

impl AllocationResult {
    pub fn success(message: impl Into<String>, allocation: Allocation) -> Self {
        Self {
            success: true,
            message: message.into(),
            allocation: Some(allocation),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            allocation: None,
        }
    }
}
