//! Drives a tri-state check mark through its fixture tables and prints the
//! stroke points each frame.

use std::cell::Cell;
use std::rc::Rc;

use kinetik_timeline_core::{
    parse_stored_timeline_json, MultiStateTracker, StoredTimeline, TimelineConfig, TimelineEngine,
    TransitionTable, Value,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CheckState {
    Unchecked,
    Partial,
    Checked,
}

/// Variable layout of the check mark.
#[allow(dead_code)]
#[derive(Clone, Copy, Debug)]
#[repr(u32)]
enum CheckMarkVar {
    Position,
    LinePoint0,
    LinePoint1,
    LinePoint2,
    Point0,
    Point1,
    Point2,
    PointRadius0,
    PointRadius1,
    PointRadius2,
}

impl From<CheckMarkVar> for kinetik_timeline_core::VarId {
    fn from(v: CheckMarkVar) -> Self {
        kinetik_timeline_core::VarId(v as u32)
    }
}

fn load(name: &str) -> anyhow::Result<StoredTimeline> {
    let json = kinetik_test_fixtures::tables::json(name)?;
    Ok(parse_stored_timeline_json(&json)?)
}

fn fmt_point(v: &Value) -> String {
    match v.as_point_f() {
        Some(p) => format!("({:5.2}, {:5.2})", p.x, p.y),
        None => format!("{v:?}"),
    }
}

fn main() -> anyhow::Result<()> {
    let check: Rc<TransitionTable> = Rc::new(load("checkbox-check")?.table);
    let uncheck: Rc<TransitionTable> = Rc::new(load("checkbox-uncheck")?.table);
    let partial: Rc<TransitionTable> = Rc::new(load("checkbox-partial")?.table);
    let initial = load("checkbox-check")?.variables;

    let mut timeline = TimelineEngine::new(TimelineConfig::default(), initial)?;
    let repaints = Rc::new(Cell::new(0u32));
    let r = repaints.clone();
    timeline.on_value_changed(move || r.set(r.get() + 1));

    let mut tracker = MultiStateTracker::new(
        CheckState::Unchecked,
        timeline,
        move |_: &CheckState, current: &CheckState| {
            Some(match current {
                CheckState::Checked => check.clone(),
                CheckState::Unchecked => uncheck.clone(),
                CheckState::Partial => partial.clone(),
            })
        },
    );

    for next in [
        CheckState::Checked,
        CheckState::Partial,
        CheckState::Unchecked,
    ] {
        tracker.update_state(next);
        println!("{:?} -> {:?}", tracker.previous_state(), tracker.state());
        while tracker.timeline().is_running() {
            if tracker.timeline_mut().step(16) {
                let vars = tracker.variables();
                println!(
                    "  {:>3} ms  line {} {} {}  r0 {:?}",
                    tracker.timeline().elapsed_ms(),
                    fmt_point(&vars[CheckMarkVar::LinePoint0 as usize]),
                    fmt_point(&vars[CheckMarkVar::LinePoint1 as usize]),
                    fmt_point(&vars[CheckMarkVar::LinePoint2 as usize]),
                    vars[CheckMarkVar::PointRadius0 as usize],
                );
            }
        }
    }
    println!(
        "{} repaints; mark anchored at {}",
        repaints.get(),
        fmt_point(
            tracker
                .timeline()
                .variable(CheckMarkVar::Position.into())
                .unwrap_or(&Value::F64(0.0))
        )
    );
    Ok(())
}
