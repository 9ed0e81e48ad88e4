//! Timeline configuration.

use serde::{Deserialize, Serialize};

/// Construction parameters for a [`TimelineEngine`](crate::engine::TimelineEngine).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Length of one run in milliseconds. Must be positive.
    pub duration_ms: u32,

    /// Maximum diagnostics retained between `take_diagnostics` calls; later
    /// records are counted and reported as dropped.
    pub max_diagnostics: usize,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            duration_ms: 250,
            max_diagnostics: 64,
        }
    }
}
