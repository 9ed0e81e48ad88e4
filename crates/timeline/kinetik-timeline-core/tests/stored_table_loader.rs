use std::rc::Rc;

use kinetik_timeline_core::{
    parse_stored_timeline_json, Easing, MultiStateTracker, TimelineConfig, TimelineEngine,
    Transition, TransitionTable, Value,
};

// Check mark layout used by the checkbox fixtures.
const POSITION: usize = 0;
const LINE_POINT_1: usize = 2;
const LINE_POINT_2: usize = 3;
const POINT_RADIUS_0: usize = 7;
const VARIABLE_COUNT: usize = 10;

fn load(name: &str) -> kinetik_timeline_core::StoredTimeline {
    let json = kinetik_test_fixtures::tables::json(name).expect("load fixture");
    parse_stored_timeline_json(&json).expect("parse stored timeline")
}

fn snapshot_of(table: &TransitionTable) -> Vec<Value> {
    match table.entries().last() {
        Some(Transition::Snapshot(s)) => s.values.to_vec(),
        other => panic!("expected a trailing snapshot, got {other:?}"),
    }
}

#[test]
fn parses_every_checkbox_fixture() {
    for key in kinetik_test_fixtures::tables::keys() {
        let st = load(&key);
        assert_eq!(st.name, key);
        assert_eq!(st.variables.len(), VARIABLE_COUNT, "{key}");
        assert!(!st.table.is_empty(), "{key}");
        // Every table ends on its target state.
        assert_eq!(snapshot_of(&st.table).len(), VARIABLE_COUNT, "{key}");
    }
}

#[test]
fn check_fixture_preserves_easing_and_offsets() {
    let st = load("checkbox-check");
    let Transition::Scalar(stroke) = &st.table.entries()[6] else {
        panic!("expected scalar stroke transition");
    };
    assert_eq!(stroke.target.index(), LINE_POINT_2);
    assert_eq!(stroke.start, 0.5);
    assert_eq!(stroke.easing, Easing::OutCubic);
    assert_eq!(stroke.from, Some(Value::point_f(7.0, 12.0)));
    assert_eq!(stroke.to, Value::point_f(15.0, 4.0));
}

#[test]
fn check_animation_lands_on_checked_snapshot() {
    let st = load("checkbox-check");
    let expected = snapshot_of(&st.table);
    let mut eng = TimelineEngine::new(TimelineConfig::default(), st.variables).unwrap();
    eng.install(Some(Rc::new(st.table))).unwrap();
    eng.start();

    let mut mid_stroke = None;
    while eng.is_running() {
        eng.step(16);
        if eng.elapsed_ms() == 64 {
            mid_stroke = eng.variables()[LINE_POINT_1].as_point_f();
        }
    }
    let mid = mid_stroke.expect("tick at 64ms");
    assert!(mid.x > 3.0 && mid.x < 7.0, "stroke should be in flight: {mid:?}");
    assert_eq!(eng.variables(), expected.as_slice());
    assert_eq!(eng.variables()[POSITION], Value::point_f(0.0, 0.0));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CheckState {
    Unchecked,
    Partial,
    Checked,
}

#[test]
fn tri_state_tracker_replays_fixture_tables() {
    let check = Rc::new(load("checkbox-check").table);
    let uncheck = Rc::new(load("checkbox-uncheck").table);
    let partial = Rc::new(load("checkbox-partial").table);
    let initial = load("checkbox-check").variables;
    let partial_target = snapshot_of(&partial);
    let unchecked_target = snapshot_of(&uncheck);

    let timeline = TimelineEngine::new(TimelineConfig::default(), initial).unwrap();
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

    let run = |tracker: &mut MultiStateTracker<CheckState>| {
        while tracker.timeline().is_running() {
            tracker.timeline_mut().step(16);
        }
    };

    assert!(tracker.update_state(CheckState::Partial));
    run(&mut tracker);
    assert_eq!(tracker.variables(), partial_target.as_slice());
    assert_eq!(tracker.variables()[POINT_RADIUS_0], Value::F64(1.5));

    assert!(tracker.update_state(CheckState::Checked));
    run(&mut tracker);
    assert_eq!(tracker.variables()[POINT_RADIUS_0], Value::F64(0.0));

    assert!(tracker.update_state(CheckState::Unchecked));
    run(&mut tracker);
    assert_eq!(tracker.variables(), unchecked_target.as_slice());
    assert_eq!(*tracker.previous_state(), CheckState::Checked);
}
