//! In-memory booking store.
//!
//! Backs tests and single-node deployments. The write lock serializes all
//! mutations, and the per-record version check rejects writes computed from a
//! stale read, which together give the per-booking atomic read-modify-write
//! the engine requires.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::model::booking::Booking;
use crate::store::{BookingFilter, BookingStore, Versioned};

#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    records: RwLock<HashMap<uuid::Uuid, Versioned<Booking>>>,
}

impl MemoryBookingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    #[tracing::instrument(skip(self, booking), fields(booking_id = %booking.id))]
    async fn insert(&self, booking: Booking) -> StoreResult<Versioned<Booking>> {
        let mut records = self.records.write().await;

        if records.contains_key(&booking.id) {
            return Err(StoreError::DuplicateId(booking.id));
        }

        let versioned = Versioned {
            record: booking,
            version: 1,
        };
        records.insert(versioned.record.id, versioned.clone());

        tracing::debug!(booking_id = %versioned.record.id, "Booking inserted");

        Ok(versioned)
    }

    async fn get(&self, id: uuid::Uuid) -> StoreResult<Versioned<Booking>> {
        let records = self.records.read().await;

        records.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    #[tracing::instrument(skip(self, booking), fields(booking_id = %booking.id, expected_version))]
    async fn update(
        &self,
        booking: Booking,
        expected_version: u64,
    ) -> StoreResult<Versioned<Booking>> {
        let mut records = self.records.write().await;

        let current = records
            .get(&booking.id)
            .ok_or(StoreError::NotFound(booking.id))?;

        if current.version != expected_version {
            return Err(StoreError::VersionConflict {
                id: booking.id,
                expected: expected_version,
                actual: current.version,
            });
        }

        let versioned = Versioned {
            record: booking,
            version: expected_version + 1,
        };
        records.insert(versioned.record.id, versioned.clone());

        tracing::debug!(
            booking_id = %versioned.record.id,
            version = versioned.version,
            "Booking updated"
        );

        Ok(versioned)
    }

    async fn remove(&self, id: uuid::Uuid) -> StoreResult<()> {
        let mut records = self.records.write().await;

        records
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, filter: &BookingFilter) -> StoreResult<Vec<Booking>> {
        let records = self.records.read().await;

        let mut bookings: Vec<Booking> = records
            .values()
            .filter(|versioned| filter.matches(&versioned.record))
            .map(|versioned| versioned.record.clone())
            .collect();
        bookings.sort_by_key(|booking| (booking.created_at, booking.id));

        Ok(bookings)
    }
}
