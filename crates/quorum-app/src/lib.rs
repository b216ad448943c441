//! HTTP layer of the Quorum booking service: salvo routes, request-depot
//! plumbing for the store/catalog/config collaborators, and JSON error
//! rendering.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod store_handler;
