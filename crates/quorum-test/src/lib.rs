//! Quorum booking approval engine - integration test support.
//!
//! This crate re-exports the workspace crates to support integration tests
//! that use `quorum::` paths.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    // Re-export core and service modules at the component level
    pub use quorum_core::*;
    pub use quorum_service::*;

    // Re-export the storage crate with all its public modules
    pub mod store {
        pub use quorum_db::catalog::*;
        pub use quorum_db::store::memory::*;
        pub use quorum_db::store::*;

        // Additional store handlers from app
        pub mod provider {
            pub use quorum_app::store_handler::*;
        }
    }

    // Re-export models
    pub mod model {
        pub use quorum_db::model::*;
    }

    // Re-export app middleware and handlers
    pub mod middleware {
        pub use quorum_app::middleware::*;
    }

    // Re-export config from both core and app
    pub mod config {
        pub use quorum_app::config::ConfigHandler;
        pub use quorum_core::config::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use quorum_app::*;

    pub mod api {
        pub use quorum_app::app::api::*;
    }
}
