//! Per-entry running state kept by the engine for the installed table.

use crate::value::Value;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunningState {
    /// The entry has produced its terminal effect and is skipped until the
    /// next `start()`.
    pub processed: bool,
    /// Start value captured on the first running tick of a
    /// continue-from-current entry.
    pub captured: Option<Value>,
}

impl RunningState {
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
