mod app_specific;
mod bookings;
mod resources;

use salvo::Router;

use crate::middleware::actor::ActorMiddleware;

// Re-export route constants from core
pub use quorum_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, BOOKINGS_ROUTE_COMPONENT, BOOKINGS_ROUTE_PREFIX,
    RESOURCES_ROUTE_COMPONENT, RESOURCES_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router.
///
/// ## Errors
/// Returns an error if any child route handler fails to initialize.
pub fn routes() -> anyhow::Result<Router> {
    Ok(Router::with_path(API_ROUTE_COMPONENT)
        .hoop(ActorMiddleware)
        .push(app_specific::routes())
        .push(bookings::routes())
        .push(resources::routes()))
}
