//! Prompt service implementation.
//!
//! The PromptService manages prompt templates and their instantiation.
//! Before rendering, `projectId` and `engineerId` arguments are resolved
//! against the registry and expanded into context variables:
//!
//! - `projectId` adds `projectName`, `projectDescription`, `projectAllocations`
//! - `engineerId` adds `engineerName`, `engineerRole`, `engineerAllocations`
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt does NOT require modifying this file.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;
use crate::core::config::PromptsConfig;
use crate::domains::allocation::{Allocation, AllocationService};

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// Configuration for the prompts domain.
    #[allow(dead_code)]
    config: PromptsConfig,

    /// Registry lookups for context variables.
    allocations: Arc<dyn AllocationService>,

    /// Registry of available prompts.
    /// Key: prompt name, Value: prompt template
    prompts: HashMap<String, PromptTemplate>,
}

impl PromptService {
    /// Create a new PromptService with the given configuration.
    pub fn new(config: PromptsConfig, allocations: Arc<dyn AllocationService>) -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            config,
            allocations,
            prompts: HashMap::new(),
        };

        for template in get_all_prompts() {
            service.register_prompt(template);
        }

        service
    }

    /// Register a prompt template.
    pub fn register_prompt(&mut self, template: PromptTemplate) {
        debug!("Registering prompt: {}", template.name);
        self.prompts.insert(template.name.clone(), template);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt with arguments substituted.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let mut arguments = arguments.unwrap_or_default();

        for required in template.required_arguments() {
            if arguments.get(required).is_none_or(|v| v.trim().is_empty()) {
                return Err(PromptError::missing_argument(required));
            }
        }

        self.add_context(&mut arguments).await?;

        let content = template.render(&arguments)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }

    /// Expand entity ids into the context variables templates rely on.
    async fn add_context(&self, arguments: &mut HashMap<String, String>) -> Result<(), PromptError> {
        if let Some(project_id) = arguments.get("projectId").cloned() {
            let project = self
                .allocations
                .get_project(&project_id)
                .await
                .ok_or_else(|| {
                    PromptError::invalid_argument("projectId", format!("no project '{}'", project_id))
                })?;
            let allocations = self.allocations.allocations_for_project(&project_id).await;
            let lines = self.describe(&allocations, Counterpart::Engineer).await;

            arguments.insert("projectName".to_string(), project.name);
            arguments.insert("projectDescription".to_string(), project.description);
            arguments.insert("projectAllocations".to_string(), lines);
        }

        if let Some(engineer_id) = arguments.get("engineerId").cloned() {
            let engineer = self
                .allocations
                .get_engineer(&engineer_id)
                .await
                .ok_or_else(|| {
                    PromptError::invalid_argument(
                        "engineerId",
                        format!("no engineer '{}'", engineer_id),
                    )
                })?;
            let allocations = self.allocations.allocations_for_engineer(&engineer_id).await;
            let lines = self.describe(&allocations, Counterpart::Project).await;

            arguments.insert("engineerName".to_string(), engineer.name);
            arguments.insert("engineerRole".to_string(), engineer.role);
            arguments.insert("engineerAllocations".to_string(), lines);
        }

        Ok(())
    }

    /// One bullet per allocation, naming the other side of the assignment.
    async fn describe(&self, allocations: &[Allocation], counterpart: Counterpart) -> String {
        if allocations.is_empty() {
            return "- none".to_string();
        }

        let mut lines = Vec::with_capacity(allocations.len());
        for allocation in allocations {
            let name = match counterpart {
                Counterpart::Engineer => self
                    .allocations
                    .get_engineer(&allocation.engineer_id)
                    .await
                    .map(|e| e.name)
                    .unwrap_or_else(|| allocation.engineer_id.clone()),
                Counterpart::Project => self
                    .allocations
                    .get_project(&allocation.project_id)
                    .await
                    .map(|p| p.name)
                    .unwrap_or_else(|| allocation.project_id.clone()),
            };
            lines.push(format!(
                "- {}: {}% {} {}",
                allocation.id,
                allocation.allocation_percentage,
                name,
                allocation.range()
            ));
        }
        lines.join("\n")
    }
}

#[derive(Debug, Clone, Copy)]
enum Counterpart {
    Engineer,
    Project,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::allocation::{
        AllocationRegistry, Engineer, Project, SharedRegistry, dates::parse_date,
    };
    use rmcp::model::PromptMessageContent;

    fn service() -> PromptService {
        let registry = AllocationRegistry::from_parts(
            vec![Engineer {
                id: "eng-1".to_string(),
                name: "Ada".to_string(),
                role: "Staff Engineer".to_string(),
                ..Default::default()
            }],
            vec![Project {
                id: "proj-1".to_string(),
                name: "Apollo".to_string(),
                description: "Moon landing".to_string(),
                ..Default::default()
            }],
            vec![Allocation {
                id: "alloc-1".to_string(),
                engineer_id: "eng-1".to_string(),
                project_id: "proj-1".to_string(),
                allocation_percentage: 70,
                start_date: parse_date("2025-01-01").unwrap(),
                end_date: parse_date("2025-06-30"),
            }],
        );
        PromptService::new(
            PromptsConfig::default(),
            SharedRegistry::new(registry).into_service(),
        )
    }

    fn args(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn text(result: &GetPromptResult) -> String {
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => text.clone(),
            _ => panic!("Expected text message"),
        }
    }

    #[tokio::test]
    async fn test_prompt_service_creation() {
        let prompts = service().list_prompts().await;
        assert_eq!(prompts.len(), 2);
    }

    #[tokio::test]
    async fn test_allocation_planning_renders_context() {
        let result = service()
            .get_prompt(
                "allocation_planning",
                args(&[("projectId", "proj-1"), ("percentage", "30")]),
            )
            .await
            .unwrap();
        let text = text(&result);
        assert!(text.contains(r#""Apollo" (proj-1) at 30% of an engineer's time"#));
        assert!(text.contains("with no planned end date"));
        assert!(text.contains("Moon landing"));
        assert!(text.contains("- alloc-1: 70% Ada from 2025-01-01 to 2025-06-30"));
    }

    #[tokio::test]
    async fn test_capacity_review_renders_context() {
        let result = service()
            .get_prompt("capacity_review", args(&[("engineerId", "eng-1")]))
            .await
            .unwrap();
        let text = text(&result);
        assert!(text.starts_with("Review the allocations of Ada (eng-1), Staff Engineer."));
        assert!(text.contains("- alloc-1: 70% Apollo"));
        assert!(!text.contains("{{"));
    }

    #[tokio::test]
    async fn test_unknown_entity() {
        let result = service()
            .get_prompt("capacity_review", args(&[("engineerId", "eng-404")]))
            .await;
        assert!(matches!(result, Err(PromptError::InvalidArgument(_, _))));
    }

    #[tokio::test]
    async fn test_get_prompt_missing_required_argument() {
        let result = service().get_prompt("allocation_planning", None).await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));

        let blank = service()
            .get_prompt("allocation_planning", args(&[("projectId", " ")]))
            .await;
        assert!(matches!(blank, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let result = service().get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
