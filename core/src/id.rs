//! Record identity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of a persisted record.
///
/// The nil UUID means "not assigned yet": candidates for creation carry a nil
/// id and the store assigns a fresh one on insert.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a new random identifier.
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    /// The unassigned identifier.
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Returns true if no identifier has been assigned.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// `None` for the nil id, `Some(self)` otherwise.
    pub fn assigned(self) -> Option<Self> {
        if self.is_nil() {
            None
        } else {
            Some(self)
        }
    }
}

impl From<Uuid> for RecordId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
