//! Multi-state tracker: records a logical state (e.g. a tri-state check
//! state) and replays a transition table whenever it changes.
//!
//! Which table plays for a given `(previous, current)` pair is decided by a
//! caller-supplied [`TransitionPolicy`].

use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use crate::data::TransitionTable;
use crate::engine::TimelineEngine;
use crate::value::Value;

/// Selects the table to play for a state change. `None` plays nothing.
pub trait TransitionPolicy<S> {
    fn select(&mut self, previous: &S, current: &S) -> Option<Rc<TransitionTable>>;
}

impl<S, F> TransitionPolicy<S> for F
where
    F: FnMut(&S, &S) -> Option<Rc<TransitionTable>>,
{
    fn select(&mut self, previous: &S, current: &S) -> Option<Rc<TransitionTable>> {
        self(previous, current)
    }
}

pub struct MultiStateTracker<S> {
    timeline: TimelineEngine,
    policy: Box<dyn TransitionPolicy<S>>,
    state: S,
    previous_state: S,
    initialized: bool,
}

impl<S: fmt::Debug> fmt::Debug for MultiStateTracker<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiStateTracker")
            .field("state", &self.state)
            .field("previous_state", &self.previous_state)
            .field("initialized", &self.initialized)
            .field("timeline", &self.timeline)
            .finish_non_exhaustive()
    }
}

impl<S: Clone + PartialEq + fmt::Debug> MultiStateTracker<S> {
    /// Tracker starting in `initial`; no transition is played for it.
    pub fn new(
        initial: S,
        timeline: TimelineEngine,
        policy: impl TransitionPolicy<S> + 'static,
    ) -> Self {
        Self {
            timeline,
            policy: Box::new(policy),
            previous_state: initial.clone(),
            state: initial,
            initialized: true,
        }
    }

    /// Tracker whose first `update_state` adopts the given value silently.
    /// `placeholder` is reported by `state()` until then.
    pub fn uninitialized(
        placeholder: S,
        timeline: TimelineEngine,
        policy: impl TransitionPolicy<S> + 'static,
    ) -> Self {
        let mut tracker = Self::new(placeholder, timeline, policy);
        tracker.initialized = false;
        tracker
    }

    /// Record `value`. Returns whether the recorded state changed; on change
    /// the policy's table is installed and started.
    pub fn update_state(&mut self, value: S) -> bool {
        if !self.initialized {
            self.previous_state = value.clone();
            self.state = value;
            self.initialized = true;
            return false;
        }
        if self.state == value {
            return false;
        }
        self.previous_state = std::mem::replace(&mut self.state, value);
        debug!("state {:?} -> {:?}", self.previous_state, self.state);

        let table = self.policy.select(&self.previous_state, &self.state);
        let has_table = table.is_some();
        match self.timeline.install(table) {
            Ok(()) if has_table => self.timeline.start(),
            Ok(()) => {}
            Err(err) => warn!("no animation for {:?}: {err}", self.state),
        }
        true
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[inline]
    pub fn previous_state(&self) -> &S {
        &self.previous_state
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl<S> MultiStateTracker<S> {
    pub fn timeline(&self) -> &TimelineEngine {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut TimelineEngine {
        &mut self.timeline
    }

    /// Variables animated for this state.
    pub fn variables(&self) -> &[Value] {
        self.timeline.variables()
    }
}

impl<S> Drop for MultiStateTracker<S> {
    fn drop(&mut self) {
        self.timeline.stop();
    }
}
