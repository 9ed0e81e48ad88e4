use std::collections::HashMap;
use std::rc::Rc;

use serde::Deserialize;

use crate::data::{Transition, TransitionTable};
use crate::error::TableError;
use crate::ids::VarId;
use crate::interp::Easing;
use crate::value::Value;

/// A stored timeline: the initial variable layout (optional) and its table.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredTimeline {
    pub name: String,
    pub variables: Vec<Value>,
    pub table: TransitionTable,
}

/// Public API: parse a stored timeline JSON document (see fixtures/tables/*.json).
///
/// Notes:
/// - `snapshots` is a map of named value vectors; snapshot entries refer to
///   them by name and share one allocation per name.
/// - A `tween` without `from` continues from the live value.
/// - Values are either the tagged core form (`{"type": "I32", "data": 3}`) or
///   plain JSON: numbers become F64, `{x, y}` becomes PointF, booleans and
///   strings map to Bool/Text.
pub fn parse_stored_timeline_json(s: &str) -> Result<StoredTimeline, TableError> {
    let st: StoredDoc = serde_json::from_str(s).map_err(|e| TableError::Parse {
        reason: e.to_string(),
    })?;

    let snapshots: HashMap<String, Rc<[Value]>> = st
        .snapshots
        .into_iter()
        .map(|(name, values)| {
            let values: Vec<Value> = values.into_iter().map(RawValue::into_value).collect();
            (name, Rc::from(values))
        })
        .collect();

    let mut entries: Vec<Transition> = Vec::with_capacity(st.transitions.len());
    for (index, raw) in st.transitions.into_iter().enumerate() {
        let entry = match raw {
            RawTransition::Tween {
                start,
                duration,
                target,
                from,
                to,
                easing,
            } => match from {
                Some(from) => Transition::tween(
                    start,
                    duration,
                    target,
                    from.into_value(),
                    to.into_value(),
                    easing,
                ),
                None => Transition::tween_from_current(
                    start,
                    duration,
                    target,
                    to.into_value(),
                    easing,
                ),
            },
            RawTransition::Setter { start, target, to } => {
                Transition::setter(start, target, to.into_value())
            }
            RawTransition::Snapshot { start, snapshot } => match snapshots.get(&snapshot) {
                Some(values) => Transition::snapshot(start, values.clone()),
                None => {
                    return Err(TableError::UnknownSnapshot {
                        index,
                        name: snapshot,
                    })
                }
            },
        };
        entries.push(entry);
    }

    Ok(StoredTimeline {
        name: st.name,
        variables: st.variables.into_iter().map(RawValue::into_value).collect(),
        table: TransitionTable::new(entries)?,
    })
}

/// Parse only the table of a stored timeline document.
pub fn parse_transition_table_json(s: &str) -> Result<TransitionTable, TableError> {
    parse_stored_timeline_json(s).map(|t| t.table)
}

#[derive(Debug, Deserialize)]
struct StoredDoc {
    #[serde(default)]
    name: String,
    #[serde(default)]
    variables: Vec<RawValue>,
    #[serde(default)]
    snapshots: HashMap<String, Vec<RawValue>>,
    transitions: Vec<RawTransition>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RawTransition {
    Tween {
        start: f32,
        duration: f32,
        target: VarId,
        #[serde(default)]
        from: Option<RawValue>,
        to: RawValue,
        #[serde(default)]
        easing: Easing,
    },
    Setter {
        start: f32,
        target: VarId,
        to: RawValue,
    },
    Snapshot {
        start: f32,
        snapshot: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Typed(Value),
    Bool(bool),
    Number(f64),
    Text(String),
    Point { x: f64, y: f64 },
}

impl RawValue {
    fn into_value(self) -> Value {
        match self {
            RawValue::Typed(v) => v,
            RawValue::Bool(b) => Value::Bool(b),
            RawValue::Number(n) => Value::F64(n),
            RawValue::Text(s) => Value::Text(s),
            RawValue::Point { x, y } => Value::point_f(x, y),
        }
    }
}
