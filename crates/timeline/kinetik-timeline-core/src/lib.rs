//! Kinetik Timeline Core (engine-agnostic)
//!
//! Time-driven property interpolation: a [`TimelineEngine`] owns a vector of
//! typed [`Value`]s and, on every tick, evaluates an installed
//! [`TransitionTable`] against normalized progress, writing interpolated values
//! in place and notifying an observer at most once per tick.
//! [`MultiStateTracker`] restarts the engine when a logical widget state
//! changes.

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod ids;
pub mod interp;
pub mod outputs;
pub mod running;
pub mod stored_table;
pub mod tracker;
pub mod value;

// Re-exports for consumers (widgets, adapters)
pub use config::TimelineConfig;
pub use data::{ScalarTransition, SnapshotTransition, Transition, TransitionTable};
pub use engine::{PlaybackState, TimelineEngine};
pub use error::{EngineError, InterpError, TableError};
pub use ids::VarId;
pub use interp::{interpolate, Easing};
pub use outputs::Diagnostic;
pub use running::RunningState;
pub use stored_table::{parse_stored_timeline_json, parse_transition_table_json, StoredTimeline};
pub use tracker::{MultiStateTracker, TransitionPolicy};
pub use value::{Point, PointF, Value, ValueKind};
