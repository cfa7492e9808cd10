//! Capacity review prompt definition.

use super::{PromptDefinition, argument};
use rmcp::model::PromptArgument;

/// Review one engineer's allocations.
pub struct CapacityReviewPrompt;

impl PromptDefinition for CapacityReviewPrompt {
    const NAME: &'static str = "capacity_review";
    const DESCRIPTION: &'static str =
        "Review an engineer's allocations for conflicts and spare capacity";

    fn template() -> &'static str {
        r#"Review the allocations of {{engineerName}} ({{engineerId}}), {{engineerRole}}.

Current allocations:
{{engineerAllocations}}

For each period where allocations overlap, add up the percentages and report:
- any period above 100%, or two overlapping allocations to the same project
- how much capacity is free from today onwards
- allocations ending soon, and indefinite ones worth revisiting

The exact overlap rules are in the allocation://docs/rules resource."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![argument("engineerId", "The engineer to review", true)]
    }
}
