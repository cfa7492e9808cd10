//! Allocation rules documentation resource.

use super::ResourceDefinition;
use crate::domains::allocation::MAX_ALLOCATION_PERCENTAGE;
use crate::domains::resources::service::ResourceContent;

/// Markdown summary of the rules enforced by allocate and update.
pub struct AllocationRulesResource;

impl ResourceDefinition for AllocationRulesResource {
    const URI: &'static str = "allocation://docs/rules";
    const NAME: &'static str = "Allocation Rules";
    const DESCRIPTION: &'static str = "How allocations are validated: percentages, dates, \
        overlap and capacity";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(rules_markdown())
    }
}

fn rules_markdown() -> String {
    format!(
        r#"# Allocation Rules

An allocation assigns a percentage of an engineer's time to a project over a
date range. Dates use the `YYYY-MM-DD` format.

## Percentages

- Must be between 1 and {max}.
- The sum over all of an engineer's allocations that overlap a new or updated
  allocation, plus the new percentage, must not exceed {max}%.

## Dates

- The start date defaults to today when omitted.
- An allocation without an end date is indefinite.
- The end date must be strictly after the start date.

## Overlap

Two allocations overlap when their date ranges share time:

- Both bounded: each starts before the other ends. A range ending on the day
  another starts does not overlap it.
- One indefinite: it overlaps anything that ends after it starts.
- Both indefinite: always overlap.

## Duplicates

An engineer may not hold two overlapping allocations to the same project,
even when the combined percentage is within capacity.

## Updates

Updates are checked with the same rules, ignoring the allocation being
updated. A rejected update leaves the allocation unchanged.
"#,
        max = MAX_ALLOCATION_PERCENTAGE
    )
}
