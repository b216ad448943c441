//! Read-side operations and the delegated delete.

use quorum_db::model::booking::Booking;
use quorum_db::store::{BookingFilter, BookingStore};

use crate::error::ServiceResult;

/// ## Summary
/// Lists bookings matching the filter, ordered by creation time. Pure
/// predicate filtering delegated to the store.
///
/// ## Errors
/// Returns store errors unchanged.
#[tracing::instrument(skip(store, filter))]
pub async fn list_bookings(
    store: &dyn BookingStore,
    filter: &BookingFilter,
) -> ServiceResult<Vec<Booking>> {
    Ok(store.list(filter).await?)
}

/// ## Summary
/// Fetches a single booking by id.
///
/// ## Errors
/// Returns a not-found store error for an unknown id.
#[tracing::instrument(skip(store))]
pub async fn get_booking(store: &dyn BookingStore, id: uuid::Uuid) -> ServiceResult<Booking> {
    Ok(store.get(id).await?.record)
}

/// ## Summary
/// Deletes a booking. Deletion is a delegated operation with no
/// state-machine logic; any booking may be removed regardless of status.
///
/// ## Errors
/// Returns a not-found store error for an unknown id.
#[tracing::instrument(skip(store))]
pub async fn delete_booking(store: &dyn BookingStore, id: uuid::Uuid) -> ServiceResult<()> {
    store.remove(id).await?;

    tracing::info!(booking_id = %id, "Booking deleted");

    Ok(())
}
