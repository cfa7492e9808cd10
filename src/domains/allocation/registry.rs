//! In-memory allocation registry.
//!
//! Holds the engineer, project and allocation collections and the validation
//! rules that keep allocations consistent:
//!
//! - allocations reference existing engineers and projects;
//! - the overlapping allocations of one engineer never sum above 100%;
//! - an engineer never holds two overlapping allocations to the same project;
//! - an end date, when present, is strictly after the start date.
//!
//! Every check runs before any mutation, so a failed call leaves the registry
//! untouched.

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use super::dates::{self, DateRange, parse_date, provided};
use super::error::{AllocationError, CapacityCheck};
use super::models::{Allocation, AllocationResult, Engineer, Project};

/// Largest share of an engineer that may be allocated at any time.
pub const MAX_ALLOCATION_PERCENTAGE: u32 = 100;

/// Arguments of an allocate call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocateRequest {
    pub engineer_id: String,
    pub project_id: String,
    pub percentage: i64,
    /// `YYYY-MM-DD`; defaults to today when absent or blank.
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`; absent or blank means indefinite.
    pub end_date: Option<String>,
}

/// Arguments of an update call. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRequest {
    pub allocation_id: String,
    pub percentage: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Engineers, projects and allocations, plus the rules binding them.
#[derive(Debug, Clone, Default)]
pub struct AllocationRegistry {
    engineers: Vec<Engineer>,
    projects: Vec<Project>,
    allocations: Vec<Allocation>,
}

impl AllocationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from bulk-loaded collections.
    pub fn from_parts(
        engineers: Vec<Engineer>,
        projects: Vec<Project>,
        allocations: Vec<Allocation>,
    ) -> Self {
        info!(
            engineers = engineers.len(),
            projects = projects.len(),
            allocations = allocations.len(),
            "Allocation registry initialized"
        );
        Self {
            engineers,
            projects,
            allocations,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn engineers(&self) -> Vec<Engineer> {
        self.engineers.clone()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn allocations(&self) -> Vec<Allocation> {
        self.allocations.clone()
    }

    pub fn engineer(&self, id: &str) -> Option<Engineer> {
        self.find_engineer(id).cloned()
    }

    pub fn project(&self, id: &str) -> Option<Project> {
        self.find_project(id).cloned()
    }

    pub fn allocation(&self, id: &str) -> Option<Allocation> {
        self.allocations.iter().find(|a| a.id == id).cloned()
    }

    pub fn allocations_for_engineer(&self, engineer_id: &str) -> Vec<Allocation> {
        self.allocations
            .iter()
            .filter(|a| a.engineer_id == engineer_id)
            .cloned()
            .collect()
    }

    pub fn allocations_for_project(&self, project_id: &str) -> Vec<Allocation> {
        self.allocations
            .iter()
            .filter(|a| a.project_id == project_id)
            .cloned()
            .collect()
    }

    /// Allocations running on `date`.
    pub fn allocations_active_on(&self, date: NaiveDate) -> Vec<Allocation> {
        self.allocations
            .iter()
            .filter(|a| a.is_active_on(date))
            .cloned()
            .collect()
    }

    /// Add a bulk-loaded allocation under the same rules as [`allocate`].
    ///
    /// The record is kept as-is (id and dates included) when it passes.
    ///
    /// [`allocate`]: Self::allocate
    pub fn admit(&mut self, allocation: Allocation) -> Result<(), AllocationError> {
        let engineer = self
            .find_engineer(&allocation.engineer_id)
            .ok_or_else(|| AllocationError::engineer_not_found(&allocation.engineer_id))?;
        let project = self
            .find_project(&allocation.project_id)
            .ok_or_else(|| AllocationError::project_not_found(&allocation.project_id))?;

        let percentage = validate_percentage(i64::from(allocation.allocation_percentage))?;
        let range = validate_range(allocation.start_date, allocation.end_date)?;
        self.check_capacity(
            engineer,
            project,
            range,
            percentage,
            None,
            CapacityCheck::Allocate,
        )?;

        self.allocations.push(allocation);
        Ok(())
    }

    fn find_engineer(&self, id: &str) -> Option<&Engineer> {
        self.engineers.iter().find(|e| e.id == id)
    }

    fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Allocate an engineer to a project, defaulting the start date to today.
    pub fn allocate(
        &mut self,
        request: &AllocateRequest,
    ) -> Result<AllocationResult, AllocationError> {
        self.allocate_as_of(request, dates::today())
    }

    /// Allocate an engineer to a project, using `today` as the default start date.
    pub fn allocate_as_of(
        &mut self,
        request: &AllocateRequest,
        today: NaiveDate,
    ) -> Result<AllocationResult, AllocationError> {
        let engineer = self
            .find_engineer(&request.engineer_id)
            .ok_or_else(|| AllocationError::engineer_not_found(&request.engineer_id))?;
        let project = self
            .find_project(&request.project_id)
            .ok_or_else(|| AllocationError::project_not_found(&request.project_id))?;

        let percentage = validate_percentage(request.percentage)?;

        let start = match provided(request.start_date.as_deref()) {
            Some(raw) => parse_date(raw).ok_or_else(|| AllocationError::invalid_start_date(raw))?,
            None => today,
        };
        let end = provided(request.end_date.as_deref())
            .map(|raw| parse_date(raw).ok_or_else(|| AllocationError::invalid_end_date(raw)))
            .transpose()?;
        let range = validate_range(start, end)?;

        self.check_capacity(
            engineer,
            project,
            range,
            percentage,
            None,
            CapacityCheck::Allocate,
        )?;

        let message = format!(
            "Successfully allocated {}% of {} to {} {}.",
            percentage,
            engineer.name,
            project.name,
            range.describe()
        );

        let allocation = Allocation {
            id: new_allocation_id(),
            engineer_id: engineer.id.clone(),
            project_id: project.id.clone(),
            allocation_percentage: percentage,
            start_date: range.start,
            end_date: range.end,
        };

        info!(
            allocation_id = %allocation.id,
            engineer_id = %allocation.engineer_id,
            project_id = %allocation.project_id,
            percentage,
            "Allocation created"
        );

        self.allocations.push(allocation.clone());
        Ok(AllocationResult::success(message, allocation))
    }

    /// Change the percentage and/or date range of an existing allocation.
    pub fn update(&mut self, request: &UpdateRequest) -> Result<AllocationResult, AllocationError> {
        let index = self
            .allocations
            .iter()
            .position(|a| a.id == request.allocation_id)
            .ok_or_else(|| AllocationError::allocation_not_found(&request.allocation_id))?;
        let current = &self.allocations[index];

        let (Some(engineer), Some(project)) = (
            self.find_engineer(&current.engineer_id),
            self.find_project(&current.project_id),
        ) else {
            return Err(AllocationError::MissingReference {
                allocation_id: current.id.clone(),
            });
        };

        let start = match provided(request.start_date.as_deref()) {
            Some(raw) => parse_date(raw).ok_or_else(|| AllocationError::invalid_start_date(raw))?,
            None => current.start_date,
        };
        let end = match provided(request.end_date.as_deref()) {
            Some(raw) => {
                Some(parse_date(raw).ok_or_else(|| AllocationError::invalid_end_date(raw))?)
            }
            None => current.end_date,
        };
        let percentage = match request.percentage {
            Some(value) => validate_percentage(value)?,
            None => current.allocation_percentage,
        };
        let range = validate_range(start, end)?;

        self.check_capacity(
            engineer,
            project,
            range,
            percentage,
            Some(&current.id),
            CapacityCheck::Update,
        )?;

        let message = format!(
            "Successfully updated allocation. {} is now {}% allocated to {} {}.",
            engineer.name,
            percentage,
            project.name,
            range.describe()
        );

        let allocation = &mut self.allocations[index];
        allocation.allocation_percentage = percentage;
        allocation.start_date = range.start;
        allocation.end_date = range.end;

        info!(
            allocation_id = %allocation.id,
            percentage,
            "Allocation updated"
        );

        Ok(AllocationResult::success(message, allocation.clone()))
    }

    /// Reject `range` when it would over-allocate the engineer or duplicate an
    /// assignment to the same project. `exclude` skips the allocation being updated.
    fn check_capacity(
        &self,
        engineer: &Engineer,
        project: &Project,
        range: DateRange,
        percentage: u32,
        exclude: Option<&str>,
        check: CapacityCheck,
    ) -> Result<(), AllocationError> {
        let overlapping: Vec<&Allocation> = self
            .allocations
            .iter()
            .filter(|a| a.engineer_id == engineer.id)
            .filter(|a| exclude != Some(a.id.as_str()))
            .filter(|a| range.overlaps(&a.range()))
            .collect();

        debug!(
            engineer_id = %engineer.id,
            overlapping = overlapping.len(),
            "Checking allocation capacity"
        );

        let current = overlapping
            .iter()
            .fold(0u32, |sum, a| sum.saturating_add(a.allocation_percentage));
        let total = current.saturating_add(percentage);
        if !overlapping.is_empty() && total > MAX_ALLOCATION_PERCENTAGE {
            return Err(AllocationError::OverAllocated {
                engineer: engineer.name.clone(),
                check,
                current,
                requested: percentage,
                total,
            });
        }

        if let Some(duplicate) = overlapping.iter().find(|a| a.project_id == project.id) {
            return Err(AllocationError::DuplicateAssignment {
                engineer: engineer.name.clone(),
                project: project.name.clone(),
                existing_id: duplicate.id.clone(),
                range: duplicate.range(),
            });
        }

        Ok(())
    }
}

fn validate_percentage(value: i64) -> Result<u32, AllocationError> {
    match u32::try_from(value) {
        Ok(p) if (1..=MAX_ALLOCATION_PERCENTAGE).contains(&p) => Ok(p),
        _ => Err(AllocationError::InvalidPercentage(value)),
    }
}

fn validate_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<DateRange, AllocationError> {
    match end {
        Some(end) if end <= start => Err(AllocationError::InvalidRange),
        _ => Ok(DateRange::new(start, end)),
    }
}

/// `alloc-` followed by the first 8 hex digits of a v4 UUID.
fn new_allocation_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("alloc-{}", &uuid[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::allocation::error::EntityKind;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn engineer(id: &str, name: &str) -> Engineer {
        Engineer {
            id: id.to_string(),
            name: name.to_string(),
            role: "Developer".to_string(),
            skills: vec!["Rust".to_string()],
        }
    }

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            status: "Active".to_string(),
        }
    }

    fn registry() -> AllocationRegistry {
        AllocationRegistry::from_parts(
            vec![engineer("eng-1", "Ada Lovelace"), engineer("eng-2", "Alan Turing")],
            vec![project("proj-1", "Apollo"), project("proj-2", "Gemini")],
            vec![],
        )
    }

    fn request(
        project_id: &str,
        percentage: i64,
        start: Option<&str>,
        end: Option<&str>,
    ) -> AllocateRequest {
        AllocateRequest {
            engineer_id: "eng-1".to_string(),
            project_id: project_id.to_string(),
            percentage,
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
        }
    }

    fn allocate_ok(reg: &mut AllocationRegistry, req: AllocateRequest) -> Allocation {
        reg.allocate(&req).unwrap().allocation.unwrap()
    }

    #[test]
    fn test_allocate_success_message() {
        let mut reg = registry();
        let result = reg
            .allocate(&request("proj-1", 50, Some("2025-01-01"), Some("2025-06-30")))
            .unwrap();

        assert!(result.success);
        assert_eq!(
            result.message,
            "Successfully allocated 50% of Ada Lovelace to Apollo from 2025-01-01 to 2025-06-30."
        );
        let allocation = result.allocation.unwrap();
        assert!(allocation.id.starts_with("alloc-"));
        assert_eq!(allocation.id.len(), "alloc-".len() + 8);
        assert_eq!(reg.allocations().len(), 1);
    }

    #[test]
    fn test_allocate_indefinite_message() {
        let mut reg = registry();
        let result = reg
            .allocate(&request("proj-1", 40, Some("2025-01-01"), None))
            .unwrap();
        assert_eq!(
            result.message,
            "Successfully allocated 40% of Ada Lovelace to Apollo starting from 2025-01-01 (indefinite)."
        );
    }

    #[test]
    fn test_allocate_defaults_start_to_today() {
        let mut reg = registry();
        let today = d("2025-05-20");
        let result = reg
            .allocate_as_of(&request("proj-1", 40, Some("  "), None), today)
            .unwrap();
        assert_eq!(result.allocation.unwrap().start_date, today);
    }

    #[test]
    fn test_allocate_unknown_engineer_or_project() {
        let mut reg = registry();
        let mut req = request("proj-1", 50, None, None);
        req.engineer_id = "eng-404".to_string();
        assert_eq!(
            reg.allocate(&req),
            Err(AllocationError::NotFound {
                kind: EntityKind::Engineer,
                id: "eng-404".to_string()
            })
        );

        let err = reg.allocate(&request("proj-404", 50, None, None)).unwrap_err();
        assert_eq!(err, AllocationError::project_not_found("proj-404"));
        assert!(reg.allocations().is_empty());
    }

    #[test]
    fn test_percentage_bounds() {
        let mut reg = registry();
        for bad in [0, 101, -5] {
            let err = reg
                .allocate(&request("proj-1", bad, Some("2025-01-01"), Some("2025-02-01")))
                .unwrap_err();
            assert_eq!(err, AllocationError::InvalidPercentage(bad));
        }

        allocate_ok(&mut reg, request("proj-1", 1, Some("2025-01-01"), Some("2025-02-01")));
        allocate_ok(&mut reg, request("proj-2", 100, Some("2025-03-01"), Some("2025-04-01")));
    }

    #[test]
    fn test_invalid_dates() {
        let mut reg = registry();
        let err = reg
            .allocate(&request("proj-1", 50, Some("01/02/2025"), None))
            .unwrap_err();
        assert_eq!(err, AllocationError::invalid_start_date("01/02/2025"));

        let err = reg
            .allocate(&request("proj-1", 50, Some("2025-01-01"), Some("later")))
            .unwrap_err();
        assert_eq!(err, AllocationError::invalid_end_date("later"));
    }

    #[test]
    fn test_non_canonical_dates_rejected() {
        let mut reg = registry();
        for bad in ["2025-1-5", "+2025-01-05"] {
            let err = reg
                .allocate(&request("proj-1", 50, Some(bad), None))
                .unwrap_err();
            assert_eq!(err, AllocationError::invalid_start_date(bad));
        }
        assert!(reg.allocations().is_empty());
    }

    #[test]
    fn test_oversized_stored_percentage_does_not_overflow() {
        let mut reg = AllocationRegistry::from_parts(
            vec![engineer("eng-1", "Ada Lovelace")],
            vec![project("proj-1", "Apollo"), project("proj-2", "Gemini")],
            vec![Allocation {
                id: "alloc-huge".to_string(),
                engineer_id: "eng-1".to_string(),
                project_id: "proj-1".to_string(),
                allocation_percentage: u32::MAX,
                start_date: d("2025-01-01"),
                end_date: None,
            }],
        );

        let err = reg
            .allocate(&request("proj-2", 1, Some("2025-02-01"), None))
            .unwrap_err();
        assert!(matches!(
            err,
            AllocationError::OverAllocated { total: u32::MAX, .. }
        ));
        assert_eq!(reg.allocations().len(), 1);
    }

    #[test]
    fn test_admit_applies_allocation_rules() {
        let mut reg = registry();
        let stored = |id: &str, project_id: &str, percentage: u32, end: Option<&str>| Allocation {
            id: id.to_string(),
            engineer_id: "eng-1".to_string(),
            project_id: project_id.to_string(),
            allocation_percentage: percentage,
            start_date: d("2025-01-01"),
            end_date: end.map(d),
        };

        assert!(reg.admit(stored("alloc-1", "proj-1", 60, None)).is_ok());
        assert_eq!(
            reg.admit(stored("alloc-2", "proj-2", 0, None)),
            Err(AllocationError::InvalidPercentage(0))
        );
        assert_eq!(
            reg.admit(stored("alloc-3", "proj-2", 30, Some("2025-01-01"))),
            Err(AllocationError::InvalidRange)
        );
        assert_eq!(
            reg.admit(stored("alloc-4", "proj-404", 30, None)),
            Err(AllocationError::project_not_found("proj-404"))
        );
        assert!(matches!(
            reg.admit(stored("alloc-5", "proj-2", 50, None)),
            Err(AllocationError::OverAllocated { .. })
        ));
        assert!(matches!(
            reg.admit(stored("alloc-6", "proj-1", 10, None)),
            Err(AllocationError::DuplicateAssignment { .. })
        ));

        let kept = reg.allocations();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "alloc-1");
    }

    #[test]
    fn test_end_must_follow_start() {
        let mut reg = registry();
        let err = reg
            .allocate(&request("proj-1", 50, Some("2025-01-01"), Some("2025-01-01")))
            .unwrap_err();
        assert_eq!(err, AllocationError::InvalidRange);

        allocate_ok(&mut reg, request("proj-1", 50, Some("2025-01-01"), Some("2025-01-02")));
    }

    #[test]
    fn test_over_allocation_rejected() {
        let mut reg = registry();
        allocate_ok(&mut reg, request("proj-1", 60, Some("2025-01-01"), Some("2025-06-30")));

        let err = reg
            .allocate(&request("proj-2", 50, Some("2025-03-01"), Some("2025-09-30")))
            .unwrap_err();

        assert!(matches!(
            err,
            AllocationError::OverAllocated {
                current: 60,
                total: 110,
                ..
            }
        ));
        assert!(
            err.to_string()
                .contains("Current allocation during this period: 60%.")
        );
        assert!(err.to_string().contains("is over-allocated"));
        assert_eq!(reg.allocations().len(), 1);
    }

    #[test]
    fn test_full_capacity_allowed() {
        let mut reg = registry();
        allocate_ok(&mut reg, request("proj-1", 60, Some("2025-01-01"), None));
        allocate_ok(&mut reg, request("proj-2", 40, Some("2025-02-01"), None));
        assert_eq!(reg.allocations_for_engineer("eng-1").len(), 2);
    }

    #[test]
    fn test_duplicate_assignment_rejected() {
        let mut reg = registry();
        let first = allocate_ok(
            &mut reg,
            request("proj-1", 30, Some("2025-01-01"), Some("2025-06-30")),
        );

        let err = reg
            .allocate(&request("proj-1", 30, Some("2025-03-01"), Some("2025-09-30")))
            .unwrap_err();

        assert_eq!(
            err,
            AllocationError::DuplicateAssignment {
                engineer: "Ada Lovelace".to_string(),
                project: "Apollo".to_string(),
                existing_id: first.id.clone(),
                range: first.range(),
            }
        );
        assert!(err.to_string().contains("from 2025-01-01 to 2025-06-30"));
    }

    #[test]
    fn test_touching_allocations_allowed() {
        let mut reg = registry();
        allocate_ok(&mut reg, request("proj-1", 80, Some("2025-01-01"), Some("2025-02-01")));
        allocate_ok(&mut reg, request("proj-1", 80, Some("2025-02-01"), Some("2025-03-01")));
        assert_eq!(reg.allocations_for_project("proj-1").len(), 2);
    }

    #[test]
    fn test_other_engineers_do_not_count() {
        let mut reg = registry();
        allocate_ok(&mut reg, request("proj-1", 100, Some("2025-01-01"), None));

        let mut req = request("proj-1", 100, Some("2025-01-01"), None);
        req.engineer_id = "eng-2".to_string();
        assert!(reg.allocate(&req).is_ok());
    }

    #[test]
    fn test_round_trip_by_id() {
        let mut reg = registry();
        let created = allocate_ok(
            &mut reg,
            request("proj-2", 25, Some("2025-01-01"), Some("2025-12-31")),
        );
        assert_eq!(reg.allocation(&created.id), Some(created));
    }

    #[test]
    fn test_update_keeps_unspecified_values() {
        let mut reg = registry();
        let created = allocate_ok(
            &mut reg,
            request("proj-1", 50, Some("2025-01-01"), Some("2025-06-30")),
        );

        let result = reg
            .update(&UpdateRequest {
                allocation_id: created.id.clone(),
                percentage: Some(70),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            result.message,
            "Successfully updated allocation. Ada Lovelace is now 70% allocated to Apollo \
             from 2025-01-01 to 2025-06-30."
        );
        let stored = reg.allocation(&created.id).unwrap();
        assert_eq!(stored.allocation_percentage, 70);
        assert_eq!(stored.start_date, created.start_date);
        assert_eq!(stored.end_date, created.end_date);
        assert_eq!(stored.project_id, created.project_id);
    }

    #[test]
    fn test_update_excludes_itself_from_capacity() {
        let mut reg = registry();
        let created = allocate_ok(&mut reg, request("proj-1", 90, Some("2025-01-01"), None));

        let result = reg.update(&UpdateRequest {
            allocation_id: created.id,
            percentage: Some(100),
            ..Default::default()
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_failed_update_leaves_allocation_unchanged() {
        let mut reg = registry();
        allocate_ok(&mut reg, request("proj-1", 60, Some("2025-01-01"), Some("2025-03-01")));
        let second = allocate_ok(
            &mut reg,
            request("proj-2", 50, Some("2025-03-01"), Some("2025-06-01")),
        );

        let err = reg
            .update(&UpdateRequest {
                allocation_id: second.id.clone(),
                start_date: Some("2025-02-01".to_string()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(err.to_string().contains("would be over-allocated"));
        assert_eq!(reg.allocation(&second.id), Some(second));
    }

    #[test]
    fn test_update_duplicate_project_rejected() {
        let mut reg = registry();
        let first = allocate_ok(
            &mut reg,
            request("proj-1", 20, Some("2025-01-01"), Some("2025-02-01")),
        );
        let second = allocate_ok(
            &mut reg,
            request("proj-1", 20, Some("2025-03-01"), Some("2025-04-01")),
        );

        let err = reg
            .update(&UpdateRequest {
                allocation_id: second.id,
                start_date: Some("2025-01-15".to_string()),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(
            err,
            AllocationError::DuplicateAssignment { ref existing_id, .. } if *existing_id == first.id
        ));
    }

    #[test]
    fn test_update_validation_order() {
        let mut reg = registry();
        let created = allocate_ok(
            &mut reg,
            request("proj-1", 50, Some("2025-01-01"), Some("2025-06-30")),
        );

        let err = reg
            .update(&UpdateRequest {
                allocation_id: created.id.clone(),
                percentage: Some(0),
                end_date: Some("2024-01-01".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, AllocationError::InvalidPercentage(0));

        let err = reg
            .update(&UpdateRequest {
                allocation_id: created.id.clone(),
                end_date: Some("2024-12-31".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, AllocationError::InvalidRange);

        let err = reg
            .update(&UpdateRequest {
                allocation_id: created.id,
                start_date: Some("bad".to_string()),
                percentage: Some(500),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, AllocationError::invalid_start_date("bad"));
    }

    #[test]
    fn test_update_unknown_allocation() {
        let mut reg = registry();
        let err = reg
            .update(&UpdateRequest {
                allocation_id: "alloc-missing".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err, AllocationError::allocation_not_found("alloc-missing"));
    }

    #[test]
    fn test_update_with_dangling_reference() {
        let dangling = Allocation {
            id: "alloc-old".to_string(),
            engineer_id: "eng-gone".to_string(),
            project_id: "proj-1".to_string(),
            allocation_percentage: 10,
            start_date: d("2024-01-01"),
            end_date: None,
        };
        let mut reg = AllocationRegistry::from_parts(
            vec![engineer("eng-1", "Ada Lovelace")],
            vec![project("proj-1", "Apollo")],
            vec![dangling],
        );

        let err = reg
            .update(&UpdateRequest {
                allocation_id: "alloc-old".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, AllocationError::MissingReference { .. }));
        assert_eq!(err.to_string(), "Associated engineer or project not found.");
    }

    #[test]
    fn test_active_on() {
        let mut reg = registry();
        allocate_ok(&mut reg, request("proj-1", 20, Some("2025-01-01"), Some("2025-02-01")));
        allocate_ok(&mut reg, request("proj-2", 20, Some("2025-03-01"), None));

        assert_eq!(reg.allocations_active_on(d("2025-01-15")).len(), 1);
        assert_eq!(reg.allocations_active_on(d("2025-02-15")).len(), 0);
        assert_eq!(reg.allocations_active_on(d("2026-01-01")).len(), 1);
    }

    #[test]
    fn test_queries_return_copies() {
        let reg = registry();
        let mut engineers = reg.engineers();
        engineers.clear();
        assert_eq!(reg.engineers().len(), 2);
        assert_eq!(reg.engineer("eng-2").unwrap().name, "Alan Turing");
        assert!(reg.project("proj-9").is_none());
    }
}
