//! Diagnostics reported by the engine.
//!
//! Ticks never fail. Conditions worth surfacing (a value kind that cannot be
//! blended, for instance) are logged and kept here until the owner drains them.

use serde::{Deserialize, Serialize};

use crate::ids::VarId;
use crate::value::ValueKind;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Diagnostic {
    /// A running transition could not be blended and stepped to its target.
    UnsupportedInterpolation {
        entry: usize,
        target: VarId,
        from: ValueKind,
        to: ValueKind,
    },
    /// Records discarded because the buffer was full.
    Dropped { count: usize },
}

/// Bounded diagnostic buffer.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    cap: usize,
    records: Vec<Diagnostic>,
    dropped: usize,
}

impl Diagnostics {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            cap,
            records: Vec::new(),
            dropped: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, record: Diagnostic) {
        if self.records.len() < self.cap {
            self.records.push(record);
        } else {
            self.dropped += 1;
        }
    }

    /// Drain all records, appending a `Dropped` summary when needed.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        let mut out = std::mem::take(&mut self.records);
        if self.dropped > 0 {
            out.push(Diagnostic::Dropped {
                count: self.dropped,
            });
            self.dropped = 0;
        }
        out
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.dropped == 0
    }
}
