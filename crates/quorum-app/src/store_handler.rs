use std::sync::Arc;

use salvo::async_trait;

use crate::error::AppResult;
use quorum_core::error::CoreError;
use quorum_db::catalog::ResourceCatalog;
use quorum_db::store::BookingStore;

/// Injects the booking store and resource catalog collaborators into the
/// request depot for downstream handlers.
pub struct StoreProviderHandler {
    pub store: Arc<dyn BookingStore>,
    pub catalog: Arc<dyn ResourceCatalog>,
}

#[async_trait]
impl salvo::Handler for StoreProviderHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.store.clone());
        depot.inject(self.catalog.clone());
    }
}

/// ## Summary
/// Retrieves the booking store from the depot.
///
/// ## Errors
/// Returns an error if the booking store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn BookingStore>> {
    depot
        .obtain::<Arc<dyn BookingStore>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Booking store not found in depot").into())
}

/// ## Summary
/// Retrieves the resource catalog from the depot.
///
/// ## Errors
/// Returns an error if the resource catalog is not found in the depot.
pub fn get_catalog_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn ResourceCatalog>> {
    depot
        .obtain::<Arc<dyn ResourceCatalog>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Resource catalog not found in depot").into())
}
