//! Booking creation: input validation, resource snapshotting and gate
//! initialization.

use quorum_core::error::{CoreError, ValidationKind};
use quorum_core::types::{ApprovalState, BookingStatus, Role};
use quorum_db::catalog::ResourceCatalog;
use quorum_db::model::booking::{Booking, Requester, ResourceSnapshot};
use quorum_db::store::BookingStore;

use crate::error::ServiceResult;

/// Context for booking creation. Date and time fields arrive as raw wire
/// strings so the engine owns the validation taxonomy end to end.
#[derive(Debug, Clone)]
pub struct CreateBookingContext {
    pub resource_id: uuid::Uuid,
    /// Calendar date, `%Y-%m-%d`.
    pub date: String,
    /// Start of the requested window, `%H:%M` (seconds tolerated).
    pub start_time: String,
    /// End of the requested window, exclusive bound of the usage slot.
    pub end_time: String,
    pub purpose: String,
    pub department: String,
    pub attendees: i64,
    pub special_requirements: Option<String>,
    pub requester: Requester,
}

/// Result of a booking creation operation.
#[derive(Debug, Clone)]
pub struct CreateBookingOutcome {
    pub booking: Booking,
    /// Soft-validation findings, e.g. attendee count above resource capacity.
    pub warnings: Vec<String>,
}

/// ## Summary
/// Validates the request, snapshots the referenced resource and persists a
/// new booking.
///
/// Student requesters enter the dual-gate review with both gates pending;
/// faculty and admin requesters bypass review entirely and are created with
/// both gates approved. The derived status comes from
/// [`BookingStatus::derive`] in both cases.
///
/// ## Side Effects
/// - Inserts the booking through the store collaborator.
///
/// ## Errors
/// Returns a classified validation error for a malformed time window or date,
/// a non-positive attendee count, a missing required field, or an unknown
/// resource.
#[tracing::instrument(skip(store, catalog, ctx), fields(resource_id = %ctx.resource_id, requester_role = %ctx.requester.role))]
pub async fn create_booking(
    store: &dyn BookingStore,
    catalog: &dyn ResourceCatalog,
    ctx: CreateBookingContext,
) -> ServiceResult<CreateBookingOutcome> {
    require_field(&ctx.purpose, "purpose")?;
    require_field(&ctx.department, "department")?;
    require_field(&ctx.requester.name, "requester.name")?;
    require_field(&ctx.requester.email, "requester.email")?;

    let date = parse_date(&ctx.date)?;
    let start_time = parse_time(&ctx.start_time, "start_time")?;
    let end_time = parse_time(&ctx.end_time, "end_time")?;

    if start_time >= end_time {
        return Err(CoreError::validation(
            ValidationKind::InvalidTimeWindow,
            format!("start time {start_time} must be strictly before end time {end_time}"),
        )
        .into());
    }

    let attendees = u32::try_from(ctx.attendees)
        .ok()
        .filter(|count| *count >= 1)
        .ok_or_else(|| {
            CoreError::validation(
                ValidationKind::InvalidAttendeeCount,
                format!("attendee count must be a positive integer, got {}", ctx.attendees),
            )
        })?;

    let resource = catalog
        .get_resource(ctx.resource_id)
        .await?
        .ok_or_else(|| {
            CoreError::validation(
                ValidationKind::UnknownResource,
                format!("resource {} does not exist", ctx.resource_id),
            )
        })?;

    let mut warnings = Vec::new();
    if attendees > resource.capacity {
        warnings.push(format!(
            "attendee count {attendees} exceeds capacity {} of '{}'",
            resource.capacity, resource.name
        ));
    }

    // The one role check of the whole workflow: non-students bypass review.
    let initial_gate = match ctx.requester.role {
        Role::Student => ApprovalState::Pending,
        Role::Faculty | Role::Admin => ApprovalState::Approved,
    };

    let booking = Booking {
        id: uuid::Uuid::now_v7(),
        resource: ResourceSnapshot::from(&resource),
        date,
        start_time,
        end_time,
        purpose: ctx.purpose,
        department: ctx.department,
        attendees,
        special_requirements: ctx
            .special_requirements
            .filter(|text| !text.trim().is_empty()),
        requester: ctx.requester,
        admin_approval: initial_gate,
        faculty_approval: initial_gate,
        status: BookingStatus::derive(initial_gate, initial_gate),
        rejection_reason: None,
        created_at: chrono::Utc::now(),
    };

    let stored = store.insert(booking).await?;

    tracing::info!(
        booking_id = %stored.record.id,
        status = %stored.record.status,
        "Booking created"
    );

    Ok(CreateBookingOutcome {
        booking: stored.record,
        warnings,
    })
}

fn require_field(value: &str, name: &'static str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(
            ValidationKind::MissingRequiredField,
            format!("'{name}' must not be empty"),
        )
        .into());
    }
    Ok(())
}

fn parse_date(raw: &str) -> ServiceResult<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_parse_err| {
        CoreError::validation(
            ValidationKind::InvalidDate,
            format!("'{raw}' is not a valid calendar date (expected YYYY-MM-DD)"),
        )
        .into()
    })
}

fn parse_time(raw: &str, name: &'static str) -> ServiceResult<chrono::NaiveTime> {
    chrono::NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_parse_err| chrono::NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_parse_err| {
            CoreError::validation(
                ValidationKind::InvalidTimeWindow,
                format!("'{raw}' is not a valid {name} (expected HH:MM)"),
            )
            .into()
        })
}
