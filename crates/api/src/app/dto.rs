use serde::Deserialize;

use roster_core::{DomainResult, Entity, EntityId};

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /entities`.
///
/// Absent fields decode to their zero value and are then rejected by
/// [`Entity::new`], so "missing" and "zero" are the same failure.
/// Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateEntityRequest {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl CreateEntityRequest {
    pub fn into_entity(self) -> DomainResult<Entity> {
        Entity::new(EntityId::new(self.id), self.name, self.age)
    }
}

// -------------------------
// Path helpers
// -------------------------

pub fn parse_entity_id(raw: &str) -> Result<EntityId, ApiError> {
    Ok(raw.parse::<EntityId>()?)
}
