use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a guitar, minted by a [`Registry`](crate::Registry).
///
/// Ids from one registry are strictly increasing in creation order and are
/// never reused, even after the guitar that carried one is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuitarId(u64);

impl GuitarId {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for GuitarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<GuitarId> for u64 {
    fn from(id: GuitarId) -> Self {
        id.0
    }
}
