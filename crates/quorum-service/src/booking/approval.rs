//! Approval-gate updates.
//!
//! Each update is one optimistic read-modify-write against a single booking:
//! load the versioned record, apply the gate decision, recompute the derived
//! status, write back with the version that was read. A lost race surfaces as
//! a version conflict for the caller to retry; the engine never retries on
//! its own.

use quorum_core::error::{CoreError, ValidationKind};
use quorum_core::types::{ApprovalDecision, ApprovalGate, BookingStatus};
use quorum_db::model::booking::Booking;
use quorum_db::store::BookingStore;

use crate::auth::{Actor, require_gate_role};
use crate::error::ServiceResult;

/// Context for an approval-gate update.
#[derive(Debug, Clone)]
pub struct ApprovalUpdateContext {
    pub booking_id: uuid::Uuid,
    pub gate: ApprovalGate,
    pub decision: ApprovalDecision,
    /// Mandatory (non-empty) when the decision is a rejection; ignored on
    /// approval.
    pub rejection_reason: Option<String>,
}

/// ## Summary
/// Records an approval decision on one gate of a booking and recomputes the
/// derived status.
///
/// Rejection is terminal: once a booking is rejected no gate may change
/// again, and the non-rejecting gate stays frozen at its last value.
///
/// ## Side Effects
/// - Writes the updated booking through the store with an optimistic version
///   check.
///
/// ## Errors
/// - `AuthorizationError` when the actor's role does not own the gate.
/// - `NotFound` (store) for an unknown booking id.
/// - A `booking_closed` validation error when the booking is already
///   terminally rejected; the record is left untouched.
/// - A `missing_rejection_reason` validation error when a rejection carries
///   no reason; no partial mutation occurs.
/// - A version conflict (store) when a concurrent update won the race.
#[tracing::instrument(
    skip(store, actor, ctx),
    fields(booking_id = %ctx.booking_id, gate = %ctx.gate, decision = %ctx.decision, actor_role = %actor.role)
)]
pub async fn set_approval(
    store: &dyn BookingStore,
    actor: &Actor,
    ctx: ApprovalUpdateContext,
) -> ServiceResult<Booking> {
    require_gate_role(actor, ctx.gate)?;

    let versioned = store.get(ctx.booking_id).await?;
    let mut booking = versioned.record;

    if booking.status.is_terminal_rejection() {
        return Err(CoreError::validation(
            ValidationKind::BookingClosed,
            format!("booking {} is rejected and can no longer change", booking.id),
        )
        .into());
    }

    let rejection_reason = match ctx.decision {
        ApprovalDecision::Rejected => {
            let reason = ctx
                .rejection_reason
                .as_deref()
                .map(str::trim)
                .filter(|reason| !reason.is_empty())
                .ok_or_else(|| {
                    CoreError::validation(
                        ValidationKind::MissingRejectionReason,
                        "a rejection must carry a non-empty reason",
                    )
                })?;
            Some(reason.to_string())
        }
        ApprovalDecision::Approved => None,
    };

    let state = ctx.decision.as_state();
    match ctx.gate {
        ApprovalGate::Admin => booking.admin_approval = state,
        ApprovalGate::Faculty => booking.faculty_approval = state,
    }
    if let Some(reason) = rejection_reason {
        booking.rejection_reason = Some(reason);
    }
    booking.status = BookingStatus::derive(booking.admin_approval, booking.faculty_approval);

    let updated = store.update(booking, versioned.version).await?;

    tracing::info!(
        booking_id = %updated.record.id,
        status = %updated.record.status,
        decided_by = %actor.email,
        "Approval gate updated"
    );

    Ok(updated.record)
}
