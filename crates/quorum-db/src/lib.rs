//! Persistence boundary for the Quorum booking service: booking and resource
//! models, the versioned [`store::BookingStore`] trait with its in-memory
//! implementation, and the [`catalog::ResourceCatalog`] collaborator.

pub mod catalog;
pub mod error;
pub mod model;
pub mod store;
