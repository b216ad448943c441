use thiserror::Error;

/// Storage layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Booking not found: {0}")]
    NotFound(uuid::Uuid),

    #[error("Version conflict on booking {id}: expected {expected}, found {actual}")]
    VersionConflict {
        id: uuid::Uuid,
        expected: u64,
        actual: u64,
    },

    #[error("Duplicate booking id: {0}")]
    DuplicateId(uuid::Uuid),

    #[error(transparent)]
    CoreError(#[from] quorum_core::error::CoreError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
