// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the interactive designer hot path.
//!
//! A pointer-move during a drag is the tightest loop in the system: every
//! event hit-tests nothing (the gesture owns its position) but re-snaps,
//! re-clamps, and triggers a canvas-extent recomputation over the whole
//! layout on the host's next frame.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use tableau_editor::{DesignSession, SurfaceMap, canvas_extent};
use tableau_model::{Position, Spread};

/// A synthetic dense layout: `count` cards on a grid pitch.
fn dense_spread(count: usize) -> Spread {
    let mut spread = Spread::new("Dense");
    for index in 0..count {
        let col = (index % 20) as f64;
        let row = (index / 20) as f64;
        spread
            .positions
            .push(Position::new(20.0 + col * 90.0, 20.0 + row * 130.0));
    }
    spread
}

fn identity_map(session: &DesignSession) -> SurfaceMap {
    let size = session.canvas_size();
    SurfaceMap::new(Rect::new(0.0, 0.0, size.width, size.height), size)
}

fn bench_drag_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("designer/drag_move");

    for count in [10usize, 100, 400] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || {
                    let mut session = DesignSession::new(dense_spread(count));
                    let map = identity_map(&session);
                    let start = session.spread().positions[0].frame().center();
                    session.pointer_down(&map, start);
                    (session, map, start)
                },
                |(mut session, map, start)| {
                    // A 60-event gesture sweeping right and down.
                    for step in 1..=60 {
                        let delta = f64::from(step) * 7.0;
                        session.pointer_move(&map, Point::new(start.x + delta, start.y + delta));
                    }
                    session.pointer_up();
                    black_box(session);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_canvas_extent(c: &mut Criterion) {
    let mut group = c.benchmark_group("designer/canvas_extent");

    for count in [10usize, 100, 400] {
        let spread = dense_spread(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &spread.positions,
            |b, positions| {
                b.iter(|| black_box(canvas_extent(black_box(positions))));
            },
        );
    }

    group.finish();
}

fn bench_hit_test_stacked(c: &mut Criterion) {
    let mut group = c.benchmark_group("designer/hit_test");

    // Worst case: the probe misses everything, so the scan walks the whole
    // stack back to front.
    for count in [10usize, 100, 400] {
        let session = DesignSession::new(dense_spread(count));
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &session, |b, session| {
            b.iter(|| black_box(session.hit_test(Point::new(-5.0, -5.0))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_drag_moves,
    bench_canvas_extent,
    bench_hit_test_stacked
);
criterion_main!(benches);
