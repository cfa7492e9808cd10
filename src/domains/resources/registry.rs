//! Resource Registry - central registration of all resources.
//!
//! This module provides dynamic resource registration without modifying service.rs.
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{
    AllocationRulesResource, AllocationsResource, EngineersResource, ProjectsResource,
    ResourceDefinition,
};
use super::service::ResourceEntry;

/// Scheme shared by every resource this server exposes.
pub const URI_SCHEME: &str = "allocation://";

pub const ENGINEER_ALLOCATIONS_TEMPLATE: &str = "allocation://engineers/{engineerId}/allocations";
pub const PROJECT_ALLOCATIONS_TEMPLATE: &str = "allocation://projects/{projectId}/allocations";

/// A concrete URI resolved against one of the resource templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateTarget {
    EngineerAllocations(String),
    ProjectAllocations(String),
}

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources as ResourceEntries.
///
/// This is the central place where all resources are registered.
/// When adding a new resource, add it here.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<EngineersResource>(),
        build_resource::<ProjectsResource>(),
        build_resource::<AllocationsResource>(),
        build_resource::<AllocationRulesResource>(),
    ]
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: ENGINEER_ALLOCATIONS_TEMPLATE.to_string(),
            name: "Engineer Allocations".to_string(),
            title: Some("Allocations of an Engineer".to_string()),
            description: Some("All allocations held by the given engineer".to_string()),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
        RawResourceTemplate {
            uri_template: PROJECT_ALLOCATIONS_TEMPLATE.to_string(),
            name: "Project Allocations".to_string(),
            title: Some("Allocations on a Project".to_string()),
            description: Some("All allocations on the given project".to_string()),
            mime_type: Some("application/json".to_string()),
        }
        .no_annotation(),
    ]
}

/// Match a URI against the registered templates.
pub fn match_template(uri: &str) -> Option<TemplateTarget> {
    if let Some(id) = template_id(uri, "allocation://engineers/") {
        return Some(TemplateTarget::EngineerAllocations(id.to_string()));
    }
    if let Some(id) = template_id(uri, "allocation://projects/") {
        return Some(TemplateTarget::ProjectAllocations(id.to_string()));
    }
    None
}

fn template_id<'a>(uri: &'a str, prefix: &str) -> Option<&'a str> {
    uri.strip_prefix(prefix)?
        .strip_suffix("/allocations")
        .filter(|id| !id.is_empty() && !id.contains('/'))
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        EngineersResource::URI,
        ProjectsResource::URI,
        AllocationsResource::URI,
        AllocationRulesResource::URI,
    ]
}
