//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//! Snapshot and template resources are rendered from the allocation service
//! at read time.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::{
    TemplateTarget, URI_SCHEME, get_all_resource_templates, get_all_resources, match_template,
};
use crate::core::config::ResourcesConfig;
use crate::domains::allocation::AllocationService;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Configuration for the resources domain.
    config: ResourcesConfig,

    /// Source of the dynamic snapshots.
    allocations: Arc<dyn AllocationService>,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Content rendered from the registry on every read.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicResourceType {
    Engineers,
    Projects,
    Allocations,
}

impl ResourceService {
    /// Create a new ResourceService backed by the given allocation service.
    pub fn new(config: ResourcesConfig, allocations: Arc<dyn AllocationService>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            allocations,
            resources: HashMap::new(),
            templates: Vec::new(),
        };

        // Register all resources and templates from registry
        service.register_from_registry();
        service.templates = get_all_resource_templates();

        service
    }

    /// Register all resources from the registry.
    fn register_from_registry(&mut self) {
        for entry in get_all_resources() {
            self.register_resource(entry);
        }
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI, falling back to the templates.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if !uri.starts_with(URI_SCHEME) {
            return Err(ResourceError::invalid_uri(uri));
        }

        let content = match self.resources.get(uri) {
            Some(entry) => match &entry.content {
                ResourceContent::Text(text) => ResourceContents::text(text, uri),
                ResourceContent::Dynamic(dynamic_type) => {
                    self.resolve_dynamic_content(uri, *dynamic_type).await?
                }
            },
            None => {
                let target = match_template(uri).ok_or_else(|| ResourceError::not_found(uri))?;
                self.resolve_template(uri, target).await?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve dynamic resource content.
    async fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        let text = match dynamic_type {
            DynamicResourceType::Engineers => self.render(&self.allocations.list_engineers().await)?,
            DynamicResourceType::Projects => self.render(&self.allocations.list_projects().await)?,
            DynamicResourceType::Allocations => {
                self.render(&self.allocations.list_allocations().await)?
            }
        };
        Ok(ResourceContents::text(text, uri))
    }

    /// Resolve a templated URI. Unknown engineers or projects are not found.
    async fn resolve_template(
        &self,
        uri: &str,
        target: TemplateTarget,
    ) -> Result<ResourceContents, ResourceError> {
        let allocations = match target {
            TemplateTarget::EngineerAllocations(id) => {
                if self.allocations.get_engineer(&id).await.is_none() {
                    return Err(ResourceError::not_found(uri));
                }
                self.allocations.allocations_for_engineer(&id).await
            }
            TemplateTarget::ProjectAllocations(id) => {
                if self.allocations.get_project(&id).await.is_none() {
                    return Err(ResourceError::not_found(uri));
                }
                self.allocations.allocations_for_project(&id).await
            }
        };
        Ok(ResourceContents::text(self.render(&allocations)?, uri))
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ResourceError> {
        let rendered = if self.config.pretty_json {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.map_err(|e| ResourceError::internal(e.to_string()))
    }
}
