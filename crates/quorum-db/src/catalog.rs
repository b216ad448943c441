//! Resource catalog collaborator.
//!
//! The booking engine consumes this interface to validate resource references
//! and snapshot resource data at booking creation. The seedable in-memory
//! implementation is loaded from configuration at startup; resources are
//! immutable once the catalog is built, matching the audit-stability rule for
//! snapshots.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::model::resource::Resource;

#[async_trait]
pub trait ResourceCatalog: Send + Sync {
    /// Resolves a resource by id; `None` when the id is unknown.
    ///
    /// ## Errors
    /// Returns catalog-backend errors unchanged.
    async fn get_resource(&self, id: uuid::Uuid) -> StoreResult<Option<Resource>>;

    /// Lists all bookable resources.
    ///
    /// ## Errors
    /// Returns catalog-backend errors unchanged.
    async fn list_resources(&self) -> StoreResult<Vec<Resource>>;
}

/// Catalog backed by a fixed set of resources.
#[derive(Debug, Default)]
pub struct StaticResourceCatalog {
    resources: HashMap<uuid::Uuid, Resource>,
}

impl StaticResourceCatalog {
    #[must_use]
    pub fn new(resources: impl IntoIterator<Item = Resource>) -> Self {
        Self {
            resources: resources
                .into_iter()
                .map(|resource| (resource.id, resource))
                .collect(),
        }
    }
}

#[async_trait]
impl ResourceCatalog for StaticResourceCatalog {
    async fn get_resource(&self, id: uuid::Uuid) -> StoreResult<Option<Resource>> {
        Ok(self.resources.get(&id).cloned())
    }

    async fn list_resources(&self) -> StoreResult<Vec<Resource>> {
        let mut resources: Vec<Resource> = self.resources.values().cloned().collect();
        resources.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(resources)
    }
}
