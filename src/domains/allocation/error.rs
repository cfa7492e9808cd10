//! Allocation-specific error types.
//!
//! Every variant renders the message returned to clients, so the adapter can
//! forward `to_string()` as-is.

use std::fmt;
use thiserror::Error;

use super::dates::DateRange;

/// Which operation a capacity check runs for. Only affects wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityCheck {
    Allocate,
    Update,
}

impl fmt::Display for CapacityCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocate => f.write_str("is"),
            Self::Update => f.write_str("would be"),
        }
    }
}

/// The kind of entity a lookup failed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Engineer,
    Project,
    Allocation,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Engineer => f.write_str("Engineer"),
            Self::Project => f.write_str("Project"),
            Self::Allocation => f.write_str("Allocation"),
        }
    }
}

/// Errors returned by allocate and update.
///
/// None of these are fatal; the registry is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// A referenced engineer, project or allocation does not exist.
    #[error("{kind} with ID '{id}' not found.")]
    NotFound { kind: EntityKind, id: String },

    /// An existing allocation points at an engineer or project that is gone.
    #[error("Associated engineer or project not found.")]
    MissingReference { allocation_id: String },

    /// Percentage outside `1..=100`.
    #[error("Allocation percentage must be between 1 and 100.")]
    InvalidPercentage(i64),

    /// A date string that is not `YYYY-MM-DD`.
    #[error("Invalid {field} date format: '{value}'.")]
    InvalidDate { field: &'static str, value: String },

    /// End date on or before the start date.
    #[error("End date must be after start date.")]
    InvalidRange,

    /// Overlapping allocations would exceed 100%.
    #[error(
        "Engineer '{engineer}' {check} over-allocated. \
         Current allocation during this period: {current}%. \
         Adding {requested}% would result in {total}% total allocation."
    )]
    OverAllocated {
        engineer: String,
        check: CapacityCheck,
        current: u32,
        requested: u32,
        total: u32,
    },

    /// The engineer already has an overlapping allocation to the same project.
    #[error(
        "Engineer '{engineer}' is already allocated to project '{project}' \
         {range} in allocation '{existing_id}'."
    )]
    DuplicateAssignment {
        engineer: String,
        project: String,
        existing_id: String,
        range: DateRange,
    },
}

impl AllocationError {
    pub fn engineer_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Engineer,
            id: id.into(),
        }
    }

    pub fn project_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Project,
            id: id.into(),
        }
    }

    pub fn allocation_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Allocation,
            id: id.into(),
        }
    }

    pub fn invalid_start_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            field: "start",
            value: value.into(),
        }
    }

    pub fn invalid_end_date(value: impl Into<String>) -> Self {
        Self::InvalidDate {
            field: "end",
            value: value.into(),
        }
    }
}
