use serde::{Deserialize, Serialize};

use quorum_core::types::{ApprovalState, BookingStatus, ResourceCategory, Role};

use crate::model::resource::Resource;

/// Resource data copied onto a booking at creation time.
///
/// Later catalog edits must not rewrite a booking's audit trail, so the name,
/// category and capacity are frozen here rather than looked up on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub resource_id: uuid::Uuid,
    pub name: String,
    pub category: ResourceCategory,
    pub capacity: u32,
}

impl From<&Resource> for ResourceSnapshot {
    fn from(resource: &Resource) -> Self {
        Self {
            resource_id: resource.id,
            name: resource.name.clone(),
            category: resource.category,
            capacity: resource.capacity,
        }
    }
}

/// Identity of the person who submitted a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    pub name: String,
    pub role: Role,
    pub email: String,
}

/// A resource booking and its dual-approval state.
///
/// `status` is always `BookingStatus::derive(admin_approval, faculty_approval)`;
/// the engine recomputes it after every gate mutation, and a stored booking
/// with `rejection_reason` set always has at least one rejected gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: uuid::Uuid,
    pub resource: ResourceSnapshot,
    pub date: chrono::NaiveDate,
    pub start_time: chrono::NaiveTime,
    pub end_time: chrono::NaiveTime,
    pub purpose: String,
    pub department: String,
    pub attendees: u32,
    pub special_requirements: Option<String>,
    pub requester: Requester,
    pub admin_approval: ApprovalState,
    pub faculty_approval: ApprovalState,
    pub status: BookingStatus,
    pub rejection_reason: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
