//! Service interface between protocol adapters and the registry.
//!
//! Tools and resources talk to an [`AllocationService`] trait object, so the
//! registry can be swapped or wrapped without touching the adapters.
//! [`SharedRegistry`] is the production implementation: one registry behind a
//! read/write lock, where allocate and update hold the write lock across the
//! whole validate-then-mutate sequence.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::error::AllocationError;
use super::models::{Allocation, AllocationResult, Engineer, Project};
use super::registry::{AllocateRequest, AllocationRegistry, UpdateRequest};

/// Operations exposed to protocol adapters.
#[async_trait]
pub trait AllocationService: Send + Sync {
    async fn list_engineers(&self) -> Vec<Engineer>;

    async fn list_projects(&self) -> Vec<Project>;

    async fn list_allocations(&self) -> Vec<Allocation>;

    /// Allocations running on the given date.
    async fn list_active_allocations(&self, date: NaiveDate) -> Vec<Allocation>;

    async fn get_engineer(&self, id: &str) -> Option<Engineer>;

    async fn get_project(&self, id: &str) -> Option<Project>;

    async fn get_allocation(&self, id: &str) -> Option<Allocation>;

    async fn allocations_for_engineer(&self, engineer_id: &str) -> Vec<Allocation>;

    async fn allocations_for_project(&self, project_id: &str) -> Vec<Allocation>;

    async fn allocate(&self, request: AllocateRequest)
    -> Result<AllocationResult, AllocationError>;

    async fn update(&self, request: UpdateRequest) -> Result<AllocationResult, AllocationError>;
}

/// Cloneable handle to a registry shared across connections.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<AllocationRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: AllocationRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Wrap the handle as a service trait object.
    pub fn into_service(self) -> Arc<dyn AllocationService> {
        Arc::new(self)
    }
}

#[async_trait]
impl AllocationService for SharedRegistry {
    async fn list_engineers(&self) -> Vec<Engineer> {
        self.inner.read().await.engineers()
    }

    async fn list_projects(&self) -> Vec<Project> {
        self.inner.read().await.projects()
    }

    async fn list_allocations(&self) -> Vec<Allocation> {
        self.inner.read().await.allocations()
    }

    async fn list_active_allocations(&self, date: NaiveDate) -> Vec<Allocation> {
        self.inner.read().await.allocations_active_on(date)
    }

    async fn get_engineer(&self, id: &str) -> Option<Engineer> {
        self.inner.read().await.engineer(id)
    }

    async fn get_project(&self, id: &str) -> Option<Project> {
        self.inner.read().await.project(id)
    }

    async fn get_allocation(&self, id: &str) -> Option<Allocation> {
        self.inner.read().await.allocation(id)
    }

    async fn allocations_for_engineer(&self, engineer_id: &str) -> Vec<Allocation> {
        self.inner.read().await.allocations_for_engineer(engineer_id)
    }

    async fn allocations_for_project(&self, project_id: &str) -> Vec<Allocation> {
        self.inner.read().await.allocations_for_project(project_id)
    }

    async fn allocate(
        &self,
        request: AllocateRequest,
    ) -> Result<AllocationResult, AllocationError> {
        self.inner.write().await.allocate(&request)
    }

    async fn update(&self, request: UpdateRequest) -> Result<AllocationResult, AllocationError> {
        self.inner.write().await.update(&request)
    }
}
