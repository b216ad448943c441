use thiserror::Error;

/// Machine-readable classification for validation failures. Serialized into
/// error payloads so clients can branch without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    InvalidTimeWindow,
    InvalidDate,
    InvalidAttendeeCount,
    UnknownResource,
    MissingRequiredField,
    MissingRejectionReason,
    BookingClosed,
}

impl ValidationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidTimeWindow => "invalid_time_window",
            Self::InvalidDate => "invalid_date",
            Self::InvalidAttendeeCount => "invalid_attendee_count",
            Self::UnknownResource => "unknown_resource",
            Self::MissingRequiredField => "missing_required_field",
            Self::MissingRejectionReason => "missing_rejection_reason",
            Self::BookingClosed => "booking_closed",
        }
    }
}

impl std::fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type with minimal dependencies
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message}")]
    Validation {
        kind: ValidationKind,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

impl CoreError {
    /// Shorthand for a validation failure with a classified kind.
    #[must_use]
    pub fn validation(kind: ValidationKind, message: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            message: message.into(),
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
