//! Entity store boundary.
//!
//! Defines the storage abstraction the HTTP layer talks to, plus the
//! in-memory implementation used by the service.
//!
//! Identifiers are caller-supplied. Creating an entity under an id that is
//! already bound **replaces** the previous record (last write wins); the store
//! never rejects a create for a duplicate id.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryEntityStore;
pub use r#trait::{EntityStore, StoreError, StoreResult};
