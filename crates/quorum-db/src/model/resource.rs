use serde::{Deserialize, Serialize};

use quorum_core::types::ResourceCategory;

/// A bookable campus asset served by the resource catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: uuid::Uuid,
    pub name: String,
    pub category: ResourceCategory,
    pub capacity: u32,
}
