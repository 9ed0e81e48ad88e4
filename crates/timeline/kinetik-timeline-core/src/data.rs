//! Transition table data model.
//!
//! A [`TransitionTable`] is an ordered list of [`Transition`]s over a
//! normalized timeline. Offsets and durations are fractions of the run
//! duration. Tables are validated on construction (including deserialization)
//! and are immutable afterwards; engines share them through `Rc`.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::ids::VarId;
use crate::interp::Easing;
use crate::value::Value;

/// Interpolates one variable over `[start, start + duration]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalarTransition {
    /// Normalized start offset in [0,1).
    pub start: f32,
    /// Fraction of the run duration; zero makes a setter.
    #[serde(default)]
    pub duration: f32,
    pub target: VarId,
    /// Explicit start value. `None` continues from whatever the variable holds
    /// on the first tick this transition is observed running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Value>,
    pub to: Value,
    #[serde(default)]
    pub easing: Easing,
}

impl ScalarTransition {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    #[inline]
    pub fn continues_from_current(&self) -> bool {
        self.from.is_none()
    }

    #[inline]
    pub fn is_setter(&self) -> bool {
        self.duration == 0.0
    }

    /// Local progress of this transition at timeline `progress`.
    /// Zero-length transitions are always complete.
    #[inline]
    pub fn local_progress(&self, progress: f64) -> f32 {
        if self.duration > 0.0 {
            ((progress - f64::from(self.start)) / f64::from(self.duration)) as f32
        } else {
            1.0
        }
    }
}

/// Replaces the whole variable vector once `start` is reached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotTransition {
    pub start: f32,
    pub values: Rc<[Value]>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Transition {
    Scalar(ScalarTransition),
    Snapshot(SnapshotTransition),
}

impl Transition {
    /// Interpolate `target` from `from` to `to`.
    pub fn tween(
        start: f32,
        duration: f32,
        target: impl Into<VarId>,
        from: impl Into<Value>,
        to: impl Into<Value>,
        easing: Easing,
    ) -> Self {
        Transition::Scalar(ScalarTransition {
            start,
            duration,
            target: target.into(),
            from: Some(from.into()),
            to: to.into(),
            easing,
        })
    }

    /// Interpolate `target` from its live value to `to`.
    pub fn tween_from_current(
        start: f32,
        duration: f32,
        target: impl Into<VarId>,
        to: impl Into<Value>,
        easing: Easing,
    ) -> Self {
        Transition::Scalar(ScalarTransition {
            start,
            duration,
            target: target.into(),
            from: None,
            to: to.into(),
            easing,
        })
    }

    /// Jump `target` to `to` at `start`.
    pub fn setter(start: f32, target: impl Into<VarId>, to: impl Into<Value>) -> Self {
        let to = to.into();
        Transition::Scalar(ScalarTransition {
            start,
            duration: 0.0,
            target: target.into(),
            from: Some(to.clone()),
            to,
            easing: Easing::Linear,
        })
    }

    pub fn snapshot(start: f32, values: impl Into<Rc<[Value]>>) -> Self {
        Transition::Snapshot(SnapshotTransition {
            start,
            values: values.into(),
        })
    }

    #[inline]
    pub fn start(&self) -> f32 {
        match self {
            Transition::Scalar(s) => s.start,
            Transition::Snapshot(s) => s.start,
        }
    }

    #[inline]
    pub fn end(&self) -> f32 {
        match self {
            Transition::Scalar(s) => s.end(),
            Transition::Snapshot(s) => s.start,
        }
    }
}

/// Ordered, validated list of transitions.
///
/// Entries must be sorted by start offset: evaluation stops at the first
/// scalar entry that has not started yet.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Transition>", into = "Vec<Transition>")]
pub struct TransitionTable {
    entries: Vec<Transition>,
}

impl TransitionTable {
    pub fn new(entries: Vec<Transition>) -> Result<Self, TableError> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn entries(&self) -> &[Transition] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.entries.iter()
    }
}

impl TryFrom<Vec<Transition>> for TransitionTable {
    type Error = TableError;

    fn try_from(entries: Vec<Transition>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<TransitionTable> for Vec<Transition> {
    fn from(table: TransitionTable) -> Self {
        table.entries
    }
}

fn validate(entries: &[Transition]) -> Result<(), TableError> {
    let mut previous = 0.0f32;
    for (index, entry) in entries.iter().enumerate() {
        let start = entry.start();
        if !start.is_finite() || !(0.0..1.0).contains(&start) {
            return Err(TableError::StartOutOfRange { index, start });
        }
        if let Transition::Scalar(s) = entry {
            if !s.duration.is_finite() || s.duration < 0.0 {
                return Err(TableError::InvalidDuration {
                    index,
                    duration: s.duration,
                });
            }
        }
        if start < previous {
            return Err(TableError::Unsorted {
                index,
                start,
                previous,
            });
        }
        previous = start;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_sorted_table_with_ties() {
        let table = TransitionTable::new(vec![
            Transition::tween(0.0, 0.5, 0u32, 0.0f32, 1.0f32, Easing::Linear),
            Transition::setter(0.5, 1u32, 3i32),
            Transition::tween_from_current(0.5, 0.25, 2u32, 1.0f64, Easing::OutQuad),
        ])
        .unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.entries()[2].end(), 0.75);
    }

    #[test]
    fn rejects_unsorted_entries() {
        let err = TransitionTable::new(vec![
            Transition::setter(0.6, 0u32, 1i32),
            Transition::setter(0.2, 0u32, 2i32),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            TableError::Unsorted {
                index: 1,
                start: 0.2,
                previous: 0.6
            }
        );
    }

    #[test]
    fn rejects_bad_offsets_and_durations() {
        assert!(matches!(
            TransitionTable::new(vec![Transition::setter(1.0, 0u32, 1i32)]),
            Err(TableError::StartOutOfRange { index: 0, .. })
        ));
        assert!(matches!(
            TransitionTable::new(vec![Transition::setter(f32::NAN, 0u32, 1i32)]),
            Err(TableError::StartOutOfRange { .. })
        ));
        assert!(matches!(
            TransitionTable::new(vec![Transition::tween(
                0.0,
                -0.1,
                0u32,
                0i32,
                1i32,
                Easing::Linear
            )]),
            Err(TableError::InvalidDuration { index: 0, .. })
        ));
    }

    #[test]
    fn setter_is_zero_length_with_explicit_from() {
        let Transition::Scalar(s) = Transition::setter(0.3, 4u32, 2.5f32) else {
            panic!("setter should be scalar");
        };
        assert!(s.is_setter());
        assert!(!s.continues_from_current());
        assert_eq!(s.local_progress(0.3), 1.0);
        assert_eq!(s.from, Some(Value::F32(2.5)));
    }

    #[test]
    fn deserialization_validates() {
        let json = r#"[
            {"kind": "scalar", "start": 0.5, "target": 0, "to": {"type": "I32", "data": 1}},
            {"kind": "scalar", "start": 0.1, "target": 0, "to": {"type": "I32", "data": 2}}
        ]"#;
        let err = serde_json::from_str::<TransitionTable>(json).unwrap_err();
        assert!(err.to_string().contains("sorted"), "{err}");
    }

    #[test]
    fn snapshot_serde_roundtrip_keeps_values() {
        let values: Rc<[Value]> = vec![Value::I32(1), Value::point_f(0.0, 1.0)].into();
        let table = TransitionTable::new(vec![Transition::snapshot(0.9, values.clone())]).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let back: TransitionTable = serde_json::from_str(&json).unwrap();
        let Transition::Snapshot(s) = &back.entries()[0] else {
            panic!("expected snapshot");
        };
        assert_eq!(&*s.values, &*values);
    }
}
