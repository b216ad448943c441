//! Shared types, error taxonomy and configuration for the Quorum booking service.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
