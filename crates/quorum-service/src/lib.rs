//! The Quorum booking approval engine: booking creation, gate mutation with
//! derived-status maintenance, and read-side queries, layered over the store
//! and catalog collaborators in `quorum-db`.

pub mod auth;
pub mod booking;
pub mod error;
