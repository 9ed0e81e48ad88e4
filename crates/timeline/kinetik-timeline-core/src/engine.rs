//! Timeline engine: playback clock, variable vector and per-entry running
//! state.
//!
//! Methods:
//! - new, install, start, stop, set_duration
//! - advance (absolute elapsed time) / step (delta), each evaluating one tick
//! - on_value_changed / on_state_changed observers
//!
//! Entries are evaluated in table order against `progress = elapsed /
//! duration`, which is not clamped: once the clock passes the run duration
//! every remaining scalar entry reports as finished.

use std::fmt;
use std::rc::Rc;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::TimelineConfig;
use crate::data::{Transition, TransitionTable};
use crate::error::EngineError;
use crate::ids::VarId;
use crate::interp::interpolate;
use crate::outputs::{Diagnostic, Diagnostics};
use crate::running::RunningState;
use crate::value::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackState {
    Stopped,
    Running,
}

impl PlaybackState {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
        }
    }
}

type ValueChangedFn = Box<dyn FnMut()>;
type StateChangedFn = Box<dyn FnMut(PlaybackState, PlaybackState)>;

pub struct TimelineEngine {
    cfg: TimelineConfig,
    variables: Vec<Value>,
    table: Option<Rc<TransitionTable>>,
    states: Vec<RunningState>,

    playback: PlaybackState,
    /// Duration latched by `start()`; `set_duration` only affects later runs.
    run_duration_ms: u32,
    elapsed_ms: u32,

    diagnostics: Diagnostics,
    value_changed: Option<ValueChangedFn>,
    state_changed: Option<StateChangedFn>,
}

impl fmt::Debug for TimelineEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimelineEngine")
            .field("cfg", &self.cfg)
            .field("variables", &self.variables)
            .field("table_len", &self.table.as_ref().map(|t| t.len()))
            .field("playback", &self.playback)
            .field("run_duration_ms", &self.run_duration_ms)
            .field("elapsed_ms", &self.elapsed_ms)
            .finish_non_exhaustive()
    }
}

impl TimelineEngine {
    /// Create a stopped engine over `variables` with no table installed.
    pub fn new(cfg: TimelineConfig, variables: Vec<Value>) -> Result<Self, EngineError> {
        if cfg.duration_ms == 0 {
            return Err(EngineError::ZeroDuration);
        }
        Ok(Self {
            run_duration_ms: cfg.duration_ms,
            diagnostics: Diagnostics::with_capacity(cfg.max_diagnostics),
            cfg,
            variables,
            table: None,
            states: Vec::new(),
            playback: PlaybackState::Stopped,
            elapsed_ms: 0,
            value_changed: None,
            state_changed: None,
        })
    }

    /// Replace the active table, stopping playback and discarding running
    /// state. `None` clears the table.
    ///
    /// The table is checked against the variable vector first; on error the
    /// engine is left untouched.
    pub fn install(&mut self, table: Option<Rc<TransitionTable>>) -> Result<(), EngineError> {
        if let Some(t) = &table {
            if let Err(err) = self.check_table(t) {
                warn!("rejecting transition table: {err}");
                return Err(err);
            }
        }
        self.stop();
        self.states = match &table {
            Some(t) => vec![RunningState::default(); t.len()],
            None => Vec::new(),
        };
        debug!(
            "installed transition table ({} entries)",
            table.as_ref().map_or(0, |t| t.len())
        );
        self.table = table;
        Ok(())
    }

    fn check_table(&self, table: &TransitionTable) -> Result<(), EngineError> {
        let len = self.variables.len();
        for (entry, transition) in table.iter().enumerate() {
            match transition {
                Transition::Scalar(s) if s.target.index() >= len => {
                    return Err(EngineError::TargetOutOfBounds {
                        entry,
                        target: s.target,
                        len,
                    });
                }
                Transition::Snapshot(s) if s.values.len() != len => {
                    return Err(EngineError::SnapshotLength {
                        entry,
                        snapshot_len: s.values.len(),
                        len,
                    });
                }
                Transition::Scalar(s) if !s.is_setter() && !s.to.kind().is_interpolable() => {
                    warn!(
                        "transition {entry} on {} tweens a {:?} value; it will step to its target",
                        s.target,
                        s.to.kind()
                    );
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Begin a run from time zero with the configured duration. Does nothing
    /// while already running.
    pub fn start(&mut self) {
        if self.playback == PlaybackState::Running {
            return;
        }
        self.run_duration_ms = self.cfg.duration_ms;
        self.elapsed_ms = 0;
        self.set_playback(PlaybackState::Running);
    }

    /// Halt the clock. Running state is kept.
    pub fn stop(&mut self) {
        self.set_playback(PlaybackState::Stopped);
    }

    /// Duration for subsequent runs.
    pub fn set_duration(&mut self, duration_ms: u32) -> Result<(), EngineError> {
        if duration_ms == 0 {
            return Err(EngineError::ZeroDuration);
        }
        self.cfg.duration_ms = duration_ms;
        Ok(())
    }

    /// Set the elapsed time of the current run and evaluate one tick.
    ///
    /// Returns whether any variable changed. Ignored while stopped. Reaching
    /// the run duration completes the run after evaluating.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if self.playback != PlaybackState::Running {
            return false;
        }
        self.elapsed_ms = elapsed_ms;
        let progress = f64::from(elapsed_ms) / f64::from(self.run_duration_ms);
        let changed = self.evaluate(progress);
        if changed {
            if let Some(cb) = self.value_changed.as_mut() {
                cb();
            }
        }
        if elapsed_ms >= self.run_duration_ms {
            debug!("timeline run completed after {elapsed_ms} ms");
            self.set_playback(PlaybackState::Stopped);
        }
        changed
    }

    /// Advance the clock by `dt_ms` and evaluate one tick.
    pub fn step(&mut self, dt_ms: u32) -> bool {
        self.advance(self.elapsed_ms.saturating_add(dt_ms))
    }

    // Offsets are widened to f64 before comparing against `progress`.
    fn evaluate(&mut self, progress: f64) -> bool {
        let Some(table) = self.table.clone() else {
            return false;
        };
        let mut changed = false;

        for (entry, (transition, state)) in table
            .entries()
            .iter()
            .zip(self.states.iter_mut())
            .enumerate()
        {
            if state.processed {
                continue;
            }
            let scalar = match transition {
                Transition::Snapshot(snapshot) => {
                    if f64::from(snapshot.start) <= progress {
                        if self.variables[..] != snapshot.values[..] {
                            self.variables.clone_from_slice(&snapshot.values);
                            changed = true;
                        }
                        state.processed = true;
                    }
                    continue;
                }
                Transition::Scalar(scalar) => scalar,
            };

            let value = &mut self.variables[scalar.target.index()];
            if f64::from(scalar.end()) < progress {
                if *value != scalar.to {
                    *value = scalar.to.clone();
                    changed = true;
                }
                state.processed = true;
            } else if f64::from(scalar.start) <= progress {
                let from: &Value = match &scalar.from {
                    Some(from) => from,
                    None => state.captured.get_or_insert_with(|| value.clone()),
                };
                let local = scalar.local_progress(progress);
                // Completed setters and tweens land exactly on `to`.
                let next = if local >= 1.0 {
                    scalar.to.clone()
                } else {
                    let eased = scalar.easing.value_for_progress(local);
                    match interpolate(from, &scalar.to, eased) {
                        Ok(v) => v,
                        Err(err) => {
                            warn!(
                                "transition {entry} on {}: {err}; stepping to target",
                                scalar.target
                            );
                            self.diagnostics.push(Diagnostic::UnsupportedInterpolation {
                                entry,
                                target: scalar.target,
                                from: from.kind(),
                                to: scalar.to.kind(),
                            });
                            scalar.to.clone()
                        }
                    }
                };
                if *value != next {
                    *value = next;
                    changed = true;
                }
            } else {
                // Not started yet; later entries start no earlier.
                break;
            }
        }

        if changed {
            trace!("tick at progress {progress:.3} changed variables");
        }
        changed
    }

    fn set_playback(&mut self, next: PlaybackState) {
        let prev = self.playback;
        if prev == next {
            return;
        }
        if next == PlaybackState::Running {
            self.states.iter_mut().for_each(RunningState::reset);
        }
        self.playback = next;
        debug!("timeline {} -> {}", prev.name(), next.name());
        if let Some(cb) = self.state_changed.as_mut() {
            cb(next, prev);
        }
    }

    /// Register the change observer, called at most once per tick.
    pub fn on_value_changed(&mut self, f: impl FnMut() + 'static) {
        self.value_changed = Some(Box::new(f));
    }

    /// Register an observer for playback transitions, called with
    /// `(new, old)`.
    pub fn on_state_changed(&mut self, f: impl FnMut(PlaybackState, PlaybackState) + 'static) {
        self.state_changed = Some(Box::new(f));
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    #[inline]
    pub fn variables(&self) -> &[Value] {
        &self.variables
    }

    /// Mutable access for external writers between ticks. The vector cannot be
    /// resized.
    #[inline]
    pub fn variables_mut(&mut self) -> &mut [Value] {
        &mut self.variables
    }

    #[inline]
    pub fn variable(&self, id: VarId) -> Option<&Value> {
        self.variables.get(id.index())
    }

    pub fn table(&self) -> Option<&Rc<TransitionTable>> {
        self.table.as_ref()
    }

    pub fn running_states(&self) -> &[RunningState] {
        &self.states
    }

    #[inline]
    pub fn playback_state(&self) -> PlaybackState {
        self.playback
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.playback == PlaybackState::Running
    }

    /// Duration used by the next `start()`.
    #[inline]
    pub fn duration_ms(&self) -> u32 {
        self.cfg.duration_ms
    }

    /// Duration of the current (or last) run.
    #[inline]
    pub fn run_duration_ms(&self) -> u32 {
        self.run_duration_ms
    }

    #[inline]
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.cfg
    }
}
