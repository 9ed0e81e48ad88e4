//! Error types for table construction, engine setup and interpolation.

use crate::ids::VarId;
use crate::value::ValueKind;

/// Rejected transition table.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TableError {
    /// Start offset is not a finite number in [0, 1)
    #[error("transition {index}: start offset {start} must be finite and within [0, 1)")]
    StartOutOfRange { index: usize, start: f32 },

    /// Duration fraction is negative or not finite
    #[error("transition {index}: duration fraction {duration} must be finite and non-negative")]
    InvalidDuration { index: usize, duration: f32 },

    /// Entry starts before its predecessor
    #[error(
        "transition {index} starts at {start}, before its predecessor at {previous}; \
         entries must be sorted by start offset"
    )]
    Unsorted {
        index: usize,
        start: f32,
        previous: f32,
    },

    /// Stored table names a snapshot it does not define
    #[error("transition {index} references unknown snapshot '{name}'")]
    UnknownSnapshot { index: usize, name: String },

    /// Stored table JSON could not be read
    #[error("stored table parse error: {reason}")]
    Parse { reason: String },
}

/// Rejected engine operation. These are caller mistakes and leave the engine
/// unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("transition {entry} targets variable {target} but only {len} variables exist")]
    TargetOutOfBounds {
        entry: usize,
        target: VarId,
        len: usize,
    },

    #[error("snapshot at transition {entry} holds {snapshot_len} values, expected {len}")]
    SnapshotLength {
        entry: usize,
        snapshot_len: usize,
        len: usize,
    },

    #[error("timeline duration must be positive")]
    ZeroDuration,
}

/// Interpolation failure. Never surfaces from a tick: the engine steps to the
/// target value instead and records a diagnostic.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpError {
    #[error("interpolation not supported for {0:?} values")]
    Unsupported(ValueKind),

    #[error("cannot interpolate from {from:?} to {to:?}")]
    KindMismatch { from: ValueKind, to: ValueKind },
}
