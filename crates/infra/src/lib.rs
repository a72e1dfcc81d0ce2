//! Infrastructure layer: entity storage.

pub mod entity_store;

pub use entity_store::{EntityStore, InMemoryEntityStore, StoreError, StoreResult};
