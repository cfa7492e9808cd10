//! Registry snapshot resources.
//!
//! Each read serializes the collection as it is at that moment, so clients
//! see allocations created or updated through the tools.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// All engineers.
pub struct EngineersResource;

impl ResourceDefinition for EngineersResource {
    const URI: &'static str = "allocation://engineers";
    const NAME: &'static str = "Engineers";
    const DESCRIPTION: &'static str = "All engineers with their roles and skills";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Engineers)
    }
}

/// All projects.
pub struct ProjectsResource;

impl ResourceDefinition for ProjectsResource {
    const URI: &'static str = "allocation://projects";
    const NAME: &'static str = "Projects";
    const DESCRIPTION: &'static str = "All projects with their descriptions and status";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Projects)
    }
}

/// All allocations.
pub struct AllocationsResource;

impl ResourceDefinition for AllocationsResource {
    const URI: &'static str = "allocation://allocations";
    const NAME: &'static str = "Allocations";
    const DESCRIPTION: &'static str =
        "All engineer-to-project allocations with percentages and date ranges";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Allocations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_metadata() {
        assert_eq!(EngineersResource::URI, "allocation://engineers");
        assert_eq!(ProjectsResource::MIME_TYPE, "application/json");
        assert!(matches!(
            AllocationsResource::content(),
            ResourceContent::Dynamic(DynamicResourceType::Allocations)
        ));
    }
}
