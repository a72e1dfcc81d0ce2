use std::sync::Arc;

use roster_core::{Entity, EntityId};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure.
///
/// A missing key is an expected outcome, not an exceptional one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("entity not found: {0}")]
    NotFound(EntityId),
}

/// Linearizable `id -> Entity` mapping shared across request tasks.
///
/// Every method is a single atomic operation; implementations manage their
/// own locking and never hand a guard to the caller.
pub trait EntityStore: Send + Sync {
    /// Insert `entity` under its id, replacing any existing record.
    fn create(&self, entity: Entity) -> StoreResult<()>;

    /// Copy of the entity bound to `id`.
    fn get(&self, id: EntityId) -> StoreResult<Entity>;

    /// Remove the entity bound to `id`.
    fn delete(&self, id: EntityId) -> StoreResult<()>;

    /// Number of stored entities.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> EntityStore for Arc<S>
where
    S: EntityStore + ?Sized,
{
    fn create(&self, entity: Entity) -> StoreResult<()> {
        (**self).create(entity)
    }

    fn get(&self, id: EntityId) -> StoreResult<Entity> {
        (**self).get(id)
    }

    fn delete(&self, id: EntityId) -> StoreResult<()> {
        (**self).delete(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
