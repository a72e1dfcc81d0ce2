//! The stored record.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};
use crate::id::EntityId;

/// One stored record.
///
/// Construction goes through [`Entity::new`], so every value in hand is
/// well-formed: non-zero `id`, non-empty `name`, non-zero `age`. There is no
/// `Deserialize` impl; inbound payloads are decoded into a request type and
/// validated here.
///
/// Entities are immutable once built. Replacing one means creating a new
/// value under the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    id: EntityId,
    name: String,
    age: i64,
}

impl Entity {
    /// Validate and build an entity.
    ///
    /// Zero and empty values are treated as "field omitted" and rejected.
    /// `age` only has to be non-zero; negative values are accepted.
    pub fn new(id: EntityId, name: impl Into<String>, age: i64) -> DomainResult<Self> {
        let name = name.into();

        let mut missing = Vec::new();
        if id.is_unset() {
            missing.push("id");
        }
        if name.is_empty() {
            missing.push("name");
        }
        if age == 0 {
            missing.push("age");
        }
        if !missing.is_empty() {
            return Err(DomainError::validation(format!(
                "invalid/missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(Self { id, name, age })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}
