use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::Serialize;
use tracing::error;

use quorum_db::model::resource::Resource;

use crate::error::ErrorResponse;
use crate::store_handler::get_catalog_from_depot;

/// ## Summary
/// Resource list response payload
#[derive(Debug, Serialize)]
pub struct ListResourcesResponse {
    pub resources: Vec<Resource>,
}

/// ## Summary
/// GET /api/resources - List the bookable resources known to the catalog.
#[handler]
async fn list_resources_handler(_req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let catalog = match get_catalog_from_depot(depot) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = ?e, "Missing resource catalog in depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("internal", "Internal server error")));
            return;
        }
    };

    match catalog.list_resources().await {
        Ok(resources) => {
            res.render(Json(ListResourcesResponse { resources }));
        }
        Err(e) => {
            error!(error = ?e, "Failed to list resources");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("internal", "Internal server error")));
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("resources").get(list_resources_handler)
}
