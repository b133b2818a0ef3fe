// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use union_gesture_drag::classifier::{DragClassifier, DragConfig, DragPhase};
use union_gesture_drag::value::DragSample;

/// One session: a began, `moves` changed samples at ~120 Hz, then an end.
fn session(moves: usize) -> Vec<(DragPhase, DragSample)> {
    let mut events = Vec::with_capacity(moves + 2);
    let start = DragSample::new(Duration::ZERO, Point::ZERO);
    events.push((DragPhase::Began, start));
    for i in 1..=moves {
        let t = Duration::from_micros(8_333 * i as u64);
        let p = Point::new(i as f64 * 1.5, i as f64 * 0.5);
        events.push((DragPhase::Changed, DragSample::new(t, p)));
    }
    let last = events[events.len() - 1].1;
    events.push((DragPhase::Ended, last));
    events
}

fn bench_sessions(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_classifier/session");
    group.measurement_time(Duration::from_secs(3));

    for moves in [16usize, 256, 4_096] {
        let events = session(moves);
        group.throughput(Throughput::Elements(events.len() as u64));

        for (name, config) in [
            ("plain", DragConfig::new()),
            ("swipe_to_dismiss", DragConfig::swipe_to_dismiss()),
        ] {
            group.bench_with_input(BenchmarkId::new(name, moves), &events, |b, events| {
                let mut drag = DragClassifier::new(config);
                b.iter(|| {
                    for &(phase, sample) in events {
                        black_box(drag.on_phase(phase, sample, true));
                    }
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sessions);
criterion_main!(benches);
