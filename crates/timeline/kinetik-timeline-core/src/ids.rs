//! Identifiers for slots in the variable vector.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of one variable in the engine's variable vector.
///
/// The engine assigns no meaning to an index; callers usually convert their
/// own layout enum into a `VarId`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarId(pub u32);

impl VarId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for VarId {
    #[inline]
    fn from(v: u32) -> Self {
        VarId(v)
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
