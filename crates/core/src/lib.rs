//! `roster-core` — the stored record and its identifier.
//!
//! This crate contains **pure domain** types (no locking, no HTTP).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
