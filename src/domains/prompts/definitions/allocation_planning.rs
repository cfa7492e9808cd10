//! Allocation planning prompt definition.

use super::{PromptDefinition, argument};
use rmcp::model::PromptArgument;

/// Find engineers with spare capacity for a project.
pub struct AllocationPlanningPrompt;

impl PromptDefinition for AllocationPlanningPrompt {
    const NAME: &'static str = "allocation_planning";
    const DESCRIPTION: &'static str =
        "Find engineers with enough spare capacity to staff a project";

    fn template() -> &'static str {
        r#"I need to staff the project "{{projectName}}" ({{projectId}}){{#if percentage}} at {{percentage}}% of an engineer's time{{/if}}{{#if startDate}}, starting {{startDate}}{{/if}}{{#if endDate}} and ending {{endDate}}{{else}} with no planned end date{{/if}}.

Project description: {{projectDescription}}

Current allocations on this project:
{{projectAllocations}}

Use list_engineers and list_engineer_allocations to find engineers who are not already on this project during that period and whose overlapping allocations plus the new percentage stay at or below 100%. Prefer engineers whose skills fit the project. Propose up to three candidates with their free capacity, and call allocate_engineer only for the one I confirm."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            argument("projectId", "The project to staff", true),
            argument("percentage", "Share of an engineer's time needed (1-100)", false),
            argument("startDate", "Start date (YYYY-MM-DD)", false),
            argument("endDate", "End date (YYYY-MM-DD)", false),
        ]
    }
}
