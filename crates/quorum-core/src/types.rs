//! Domain enums shared across the workspace, with no storage or HTTP dependencies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Role of a requester or acting user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Faculty,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "faculty" => Ok(Self::Faculty),
            "admin" => Ok(Self::Admin),
            other => Err(CoreError::InvalidInput(format!("unknown role '{other}'"))),
        }
    }
}

/// Category of a bookable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Lab,
    Room,
    Hall,
}

impl ResourceCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lab => "lab",
            Self::Room => "room",
            Self::Hall => "hall",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State of one approval gate on a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApprovalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two independent approval checkpoints a student booking must clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalGate {
    Admin,
    Faculty,
}

impl ApprovalGate {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Faculty => "faculty",
        }
    }
}

impl fmt::Display for ApprovalGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision an approver may record on a gate. `pending` is the initial state
/// only and is never settable through the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalDecision {
    Approved,
    Rejected,
}

impl ApprovalDecision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// The gate state this decision resolves to.
    #[must_use]
    pub const fn as_state(self) -> ApprovalState {
        match self {
            Self::Approved => ApprovalState::Approved,
            Self::Rejected => ApprovalState::Rejected,
        }
    }
}

impl fmt::Display for ApprovalDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall lifecycle state of a booking.
///
/// Always computed from the two gate values via [`BookingStatus::derive`],
/// never stored independently or accepted from a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    PendingAdmin,
    PendingFaculty,
    Approved,
    Rejected,
}

impl BookingStatus {
    /// ## Summary
    /// Derives the overall booking status from the pair of gate values.
    ///
    /// Rejection at either gate dominates every other combination. Of the
    /// remaining pairs, `(approved, approved)` is approved and
    /// `(approved, pending)` waits on the faculty gate. Both pairs with a
    /// pending admin gate resolve to `pending_admin`, including
    /// `(pending, approved)` where the faculty gate already cleared. The
    /// admin gate is the named display priority, so the asymmetry is intended.
    #[must_use]
    pub const fn derive(admin: ApprovalState, faculty: ApprovalState) -> Self {
        match (admin, faculty) {
            (ApprovalState::Rejected, _) | (_, ApprovalState::Rejected) => Self::Rejected,
            (ApprovalState::Approved, ApprovalState::Approved) => Self::Approved,
            (ApprovalState::Approved, ApprovalState::Pending) => Self::PendingFaculty,
            (ApprovalState::Pending, _) => Self::PendingAdmin,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PendingAdmin => "pending_admin",
            Self::PendingFaculty => "pending_faculty",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether this status permits no further gate mutation.
    #[must_use]
    pub const fn is_terminal_rejection(self) -> bool {
        matches!(self, Self::Rejected)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_admin" => Ok(Self::PendingAdmin),
            "pending_faculty" => Ok(Self::PendingFaculty),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(CoreError::InvalidInput(format!(
                "unknown booking status '{other}'"
            ))),
        }
    }
}
