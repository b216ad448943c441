//! The booking store abstraction.
//!
//! The engine is stateless business logic over this trait. Every mutation of
//! an existing record is an optimistic read-modify-write: callers read a
//! [`Versioned`] booking, apply changes, and write back with the version they
//! read. A stale version fails with [`StoreError::VersionConflict`] so two
//! gate updates racing on the same booking can never both apply against the
//! same pre-update state.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::model::booking::Booking;

pub mod memory;

/// A stored record together with its optimistic-concurrency version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versioned<T> {
    pub record: T,
    pub version: u64,
}

/// Predicate filter for booking queries. All present fields are combined
/// with AND; the date range is inclusive on both ends.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub requester_email: Option<String>,
    pub resource_id: Option<uuid::Uuid>,
    pub status: Option<quorum_core::types::BookingStatus>,
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
}

impl BookingFilter {
    /// ## Summary
    /// Evaluates this filter against a single booking.
    #[must_use]
    pub fn matches(&self, booking: &Booking) -> bool {
        if let Some(email) = &self.requester_email
            && !booking.requester.email.eq_ignore_ascii_case(email)
        {
            return false;
        }
        if let Some(resource_id) = self.resource_id
            && booking.resource.resource_id != resource_id
        {
            return false;
        }
        if let Some(status) = self.status
            && booking.status != status
        {
            return false;
        }
        if let Some(from) = self.from
            && booking.date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && booking.date > to
        {
            return false;
        }
        true
    }
}

/// Persistence collaborator for booking records.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Inserts a freshly created booking at version 1.
    ///
    /// ## Errors
    /// Returns `DuplicateId` if the id is already stored.
    async fn insert(&self, booking: Booking) -> StoreResult<Versioned<Booking>>;

    /// Loads a booking together with its current version.
    ///
    /// ## Errors
    /// Returns `NotFound` for an unknown id.
    async fn get(&self, id: uuid::Uuid) -> StoreResult<Versioned<Booking>>;

    /// Writes back a mutated booking, failing if `expected_version` is stale.
    ///
    /// ## Errors
    /// Returns `NotFound` for an unknown id and `VersionConflict` when a
    /// concurrent update won the race.
    async fn update(
        &self,
        booking: Booking,
        expected_version: u64,
    ) -> StoreResult<Versioned<Booking>>;

    /// Removes a booking.
    ///
    /// ## Errors
    /// Returns `NotFound` for an unknown id.
    async fn remove(&self, id: uuid::Uuid) -> StoreResult<()>;

    /// Lists bookings matching the filter, ordered by creation time.
    ///
    /// ## Errors
    /// Returns store errors unchanged.
    async fn list(&self, filter: &BookingFilter) -> StoreResult<Vec<Booking>>;
}
