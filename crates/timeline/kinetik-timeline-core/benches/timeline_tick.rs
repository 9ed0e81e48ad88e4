use std::hint::black_box;
use std::rc::Rc;

use criterion::{criterion_group, criterion_main, Criterion};
use kinetik_timeline_core::{
    parse_stored_timeline_json, Easing, TimelineConfig, TimelineEngine, Transition,
    TransitionTable, Value,
};

fn checkbox_run(c: &mut Criterion) {
    let json = kinetik_test_fixtures::tables::json("checkbox-check").expect("fixture");
    let stored = parse_stored_timeline_json(&json).expect("parse");
    let table = Rc::new(stored.table);
    let mut eng = TimelineEngine::new(TimelineConfig::default(), stored.variables).unwrap();
    eng.install(Some(table)).unwrap();

    c.bench_function("checkbox_check_full_run_16ms", |b| {
        b.iter(|| {
            eng.start();
            while eng.is_running() {
                black_box(eng.step(16));
            }
        })
    });
}

fn wide_table_tick(c: &mut Criterion) {
    const N: u32 = 256;
    let vars: Vec<Value> = (0..N).map(|_| Value::F32(0.0)).collect();
    let entries: Vec<Transition> = (0..N)
        .map(|i| Transition::tween(0.0, 1.0, i, 0.0f32, i as f32, Easing::InOutCubic))
        .collect();
    let table = Rc::new(TransitionTable::new(entries).unwrap());
    let cfg = TimelineConfig {
        duration_ms: 1_000_000,
        ..TimelineConfig::default()
    };
    let mut eng = TimelineEngine::new(cfg, vars).unwrap();
    eng.install(Some(table)).unwrap();
    eng.start();

    let mut t = 0u32;
    c.bench_function("wide_table_256_tick", |b| {
        b.iter(|| {
            t = (t + 1) % 999_999;
            black_box(eng.advance(t))
        })
    });
}

criterion_group!(benches, checkbox_run, wide_table_tick);
criterion_main!(benches);
