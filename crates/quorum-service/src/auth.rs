//! Acting-user identity and the gate/role authorization check.
//!
//! Authentication itself is an external collaborator: the HTTP layer receives
//! the acting user from trusted gateway headers and stores it in the request
//! depot. The engine still enforces the gate/role match on every approval
//! update, so a mismatched call fails regardless of what the gateway claims.

use quorum_core::types::{ApprovalGate, Role};

use crate::error::{ServiceError, ServiceResult};

/// Depot keys shared between middleware and handlers.
pub mod depot_keys {
    pub const ACTING_USER: &str = "acting_user";
}

/// The authenticated user performing a request, as supplied by the identity
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub role: Role,
    pub email: String,
}

/// Acting user slot for the request depot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepotActor {
    Actor(Actor),
    Anonymous,
}

/// ## Summary
/// Verifies that the actor's role is allowed to set the named gate: the
/// `admin` gate belongs to admin-role actors and the `faculty` gate to
/// faculty-role actors. Students may set neither.
///
/// ## Errors
/// Returns `AuthorizationError` on any role/gate mismatch.
pub fn require_gate_role(actor: &Actor, gate: ApprovalGate) -> ServiceResult<()> {
    let allowed = matches!(
        (gate, actor.role),
        (ApprovalGate::Admin, Role::Admin) | (ApprovalGate::Faculty, Role::Faculty)
    );

    if allowed {
        Ok(())
    } else {
        Err(ServiceError::AuthorizationError(format!(
            "role '{}' may not set the '{}' approval gate",
            actor.role, gate
        )))
    }
}
