use std::str::FromStr;

use salvo::{Depot, Request, Response, Router, handler, http::StatusCode, writing::Json};
use serde::{Deserialize, Serialize};
use tracing::error;

use quorum_core::types::{ApprovalDecision, ApprovalGate, BookingStatus};
use quorum_db::model::booking::{Booking, Requester};
use quorum_db::store::BookingFilter;
use quorum_service::auth::{DepotActor, depot_keys};
use quorum_service::booking::approval::{ApprovalUpdateContext, set_approval};
use quorum_service::booking::create::{CreateBookingContext, create_booking};
use quorum_service::booking::query::{delete_booking, get_booking, list_bookings};

use crate::error::{ErrorResponse, render_bad_request, render_service_error};
use crate::store_handler::{get_catalog_from_depot, get_store_from_depot};

/// ## Summary
/// Create booking request payload
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub resource_id: uuid::Uuid,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub purpose: String,
    pub department: String,
    pub attendees: i64,
    pub special_requirements: Option<String>,
    pub requester: Requester,
}

/// ## Summary
/// Create booking response payload: the stored booking plus any
/// soft-validation warnings (e.g. attendee count above capacity).
#[derive(Debug, Serialize)]
pub struct CreateBookingResponse {
    pub booking: Booking,
    pub warnings: Vec<String>,
}

/// ## Summary
/// Approval-gate update request payload
#[derive(Debug, Deserialize)]
pub struct ApprovalRequest {
    pub gate: ApprovalGate,
    pub decision: ApprovalDecision,
    pub rejection_reason: Option<String>,
}

/// ## Summary
/// Booking list response payload
#[derive(Debug, Serialize)]
pub struct ListBookingsResponse {
    pub bookings: Vec<Booking>,
}

/// ## Summary
/// POST /api/bookings - Create a new booking.
///
/// ## Errors
/// Returns HTTP 400 for malformed JSON or a classified validation failure
/// Returns HTTP 500 if the store collaborator fails
#[handler]
async fn create_booking_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing create booking request");

    let payload: CreateBookingRequest = match req.parse_json().await {
        Ok(payload) => payload,
        Err(e) => {
            error!(error = ?e, "Failed to parse create booking request");
            render_bad_request(res, "Invalid request body");
            return;
        }
    };

    let (store, catalog) = match (get_store_from_depot(depot), get_catalog_from_depot(depot)) {
        (Ok(store), Ok(catalog)) => (store, catalog),
        (Err(e), _) | (_, Err(e)) => {
            error!(error = ?e, "Missing collaborator in depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("internal", "Internal server error")));
            return;
        }
    };

    let ctx = CreateBookingContext {
        resource_id: payload.resource_id,
        date: payload.date,
        start_time: payload.start_time,
        end_time: payload.end_time,
        purpose: payload.purpose,
        department: payload.department,
        attendees: payload.attendees,
        special_requirements: payload.special_requirements,
        requester: payload.requester,
    };

    match create_booking(store.as_ref(), catalog.as_ref(), ctx).await {
        Ok(outcome) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(CreateBookingResponse {
                booking: outcome.booking,
                warnings: outcome.warnings,
            }));
        }
        Err(service_err) => render_service_error(res, &service_err),
    }
}

/// ## Summary
/// PATCH /api/bookings/`booking_id`/approval - Record a gate decision.
///
/// The acting user comes from the identity-collaborator headers resolved by
/// the actor middleware; the engine enforces the gate/role match.
///
/// ## Errors
/// Returns HTTP 401 if no acting user is present
/// Returns HTTP 403 on a gate/role mismatch
/// Returns HTTP 404 for an unknown booking
/// Returns HTTP 400 for a missing rejection reason or a terminally rejected booking
/// Returns HTTP 409 when a concurrent update won the version race
#[handler]
async fn set_approval_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing approval update request");

    let Ok(DepotActor::Actor(actor)) = depot.get::<DepotActor>(depot_keys::ACTING_USER) else {
        res.status_code(StatusCode::UNAUTHORIZED);
        res.render(Json(ErrorResponse::new(
            "unauthenticated",
            "Acting user required",
        )));
        return;
    };
    let actor = actor.clone();

    let Some(booking_id_raw) = req.param::<String>("booking_id") else {
        render_bad_request(res, "Booking ID required");
        return;
    };
    let Ok(booking_id) = uuid::Uuid::parse_str(&booking_id_raw) else {
        render_bad_request(res, "Invalid booking ID format");
        return;
    };

    let payload: ApprovalRequest = match req.parse_json().await {
        Ok(payload) => payload,
        Err(e) => {
            error!(error = ?e, "Failed to parse approval request");
            render_bad_request(res, "Invalid request body");
            return;
        }
    };

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            error!(error = ?e, "Missing booking store in depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("internal", "Internal server error")));
            return;
        }
    };

    let ctx = ApprovalUpdateContext {
        booking_id,
        gate: payload.gate,
        decision: payload.decision,
        rejection_reason: payload.rejection_reason,
    };

    match set_approval(store.as_ref(), &actor, ctx).await {
        Ok(booking) => {
            res.status_code(StatusCode::OK);
            res.render(Json(booking));
        }
        Err(service_err) => render_service_error(res, &service_err),
    }
}

/// ## Summary
/// GET /api/bookings - List bookings, optionally filtered by requester
/// email, resource, status, or inclusive date range.
///
/// ## Errors
/// Returns HTTP 400 for unparsable filter parameters
#[handler]
async fn list_bookings_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let filter = match parse_filter(req) {
        Ok(filter) => filter,
        Err(message) => {
            render_bad_request(res, message);
            return;
        }
    };

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            error!(error = ?e, "Missing booking store in depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("internal", "Internal server error")));
            return;
        }
    };

    match list_bookings(store.as_ref(), &filter).await {
        Ok(bookings) => {
            res.render(Json(ListBookingsResponse { bookings }));
        }
        Err(service_err) => render_service_error(res, &service_err),
    }
}

/// ## Summary
/// GET /api/bookings/`booking_id` - Fetch a single booking.
///
/// ## Errors
/// Returns HTTP 404 for an unknown booking
#[handler]
async fn get_booking_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(booking_id) = parse_booking_id(req, res) else {
        return;
    };

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            error!(error = ?e, "Missing booking store in depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("internal", "Internal server error")));
            return;
        }
    };

    match get_booking(store.as_ref(), booking_id).await {
        Ok(booking) => {
            res.render(Json(booking));
        }
        Err(service_err) => render_service_error(res, &service_err),
    }
}

/// ## Summary
/// DELETE /api/bookings/`booking_id` - Delete a booking. Delegated
/// operation with no state-machine logic.
///
/// ## Errors
/// Returns HTTP 404 for an unknown booking
#[handler]
async fn delete_booking_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(booking_id) = parse_booking_id(req, res) else {
        return;
    };

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            error!(error = ?e, "Missing booking store in depot");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse::new("internal", "Internal server error")));
            return;
        }
    };

    match delete_booking(store.as_ref(), booking_id).await {
        Ok(()) => {
            res.status_code(StatusCode::NO_CONTENT);
        }
        Err(service_err) => render_service_error(res, &service_err),
    }
}

fn parse_booking_id(req: &mut Request, res: &mut Response) -> Option<uuid::Uuid> {
    let Some(raw) = req.param::<String>("booking_id") else {
        render_bad_request(res, "Booking ID required");
        return None;
    };
    match uuid::Uuid::parse_str(&raw) {
        Ok(id) => Some(id),
        Err(_parse_err) => {
            render_bad_request(res, "Invalid booking ID format");
            None
        }
    }
}

fn parse_filter(req: &mut Request) -> Result<BookingFilter, String> {
    let mut filter = BookingFilter {
        requester_email: req
            .query::<String>("requester_email")
            .filter(|email| !email.is_empty()),
        ..BookingFilter::default()
    };

    if let Some(raw) = req.query::<String>("resource_id") {
        filter.resource_id = Some(
            uuid::Uuid::parse_str(&raw).map_err(|_parse_err| "Invalid resource_id".to_string())?,
        );
    }
    if let Some(raw) = req.query::<String>("status") {
        filter.status = Some(
            BookingStatus::from_str(&raw)
                .map_err(|_parse_err| format!("Invalid status '{raw}'"))?,
        );
    }
    if let Some(raw) = req.query::<String>("from") {
        filter.from = Some(parse_filter_date(&raw, "from")?);
    }
    if let Some(raw) = req.query::<String>("to") {
        filter.to = Some(parse_filter_date(&raw, "to")?);
    }

    Ok(filter)
}

fn parse_filter_date(raw: &str, name: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_parse_err| format!("Invalid {name} date '{raw}' (expected YYYY-MM-DD)"))
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("bookings")
        .post(create_booking_handler)
        .get(list_bookings_handler)
        .push(
            Router::with_path("{booking_id}")
                .get(get_booking_handler)
                .delete(delete_booking_handler)
                .push(Router::with_path("approval").patch(set_approval_handler)),
        )
}
