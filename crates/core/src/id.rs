//! Caller-supplied entity identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a stored entity.
///
/// Identifiers are chosen by the client at creation time and used verbatim
/// as the store key. `0` is reserved to mean "not supplied" and is never
/// stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(&self) -> i64 {
        self.0
    }

    /// `true` for the reserved "omitted" value.
    pub const fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Parses a base-10 integer (optional leading sign).
impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("EntityId {s:?}: {e}")))?;
        Ok(Self(raw))
    }
}
