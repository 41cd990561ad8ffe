// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the read-time layout projector.
//!
//! Projection runs on every re-render of a journal page, once per reading
//! block; the Grand Tableau (36 positions) is the largest stock layout and
//! card matching is a linear scan per position, so this is the quadratic
//! corner worth watching.

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use tableau_model::presets;
use tableau_reading::{ReadingCard, project};

fn full_reading(count: usize) -> Vec<ReadingCard> {
    (0..count)
        .map(|index| ReadingCard {
            name: format!("Card {index}"),
            position_index: index,
            ..ReadingCard::default()
        })
        .collect()
}

fn bench_project_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("projector/positioned");

    for spread in [
        presets::three_card_line(),
        presets::celtic_cross(),
        presets::grand_tableau(),
    ] {
        let cards = full_reading(spread.positions.len());
        group.throughput(Throughput::Elements(spread.positions.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(spread.name.clone()),
            &(spread, cards),
            |b, (spread, cards)| {
                b.iter(|| black_box(project(black_box(&spread.positions), black_box(cards))));
            },
        );
    }

    group.finish();
}

fn bench_project_sparse_grand_tableau(c: &mut Criterion) {
    // A partially filled tableau: every position scans the whole card list,
    // most without finding a match.
    let spread = presets::grand_tableau();
    let cards: Vec<ReadingCard> = full_reading(36)
        .into_iter()
        .filter(|card| card.position_index % 3 == 0)
        .collect();

    c.bench_function("projector/sparse_grand_tableau", |b| {
        b.iter(|| black_box(project(black_box(&spread.positions), black_box(&cards))));
    });
}

fn bench_free_form(c: &mut Criterion) {
    let cards = full_reading(36);
    c.bench_function("projector/free_form", |b| {
        b.iter(|| black_box(project(&[], black_box(&cards))));
    });
}

criterion_group!(
    benches,
    bench_project_presets,
    bench_project_sparse_grand_tableau,
    bench_free_form
);
criterion_main!(benches);
