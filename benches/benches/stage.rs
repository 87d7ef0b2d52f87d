// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use stagekeep_project::{EntityId, EntityPlacement};
use stagekeep_stage::{PerformerSelection, hit_test, marquee_select};

fn grid(n: usize) -> Vec<(EntityId, EntityPlacement)> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let id = EntityId::from(format!("{x}-{y}"));
            let position = Point::new(x as f64 * 25.0, y as f64 * 25.0);
            out.push((id, EntityPlacement::new(position)));
        }
    }
    out
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage/hit_test");
    for n in [4usize, 8, 16] {
        let placements = grid(n);
        // Worst case: the last performer in the list.
        let last = placements[placements.len() - 1].1.position;
        group.throughput(Throughput::Elements(placements.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n * n), &placements, |b, p| {
            b.iter(|| black_box(hit_test(p, black_box(last), 10.0)));
        });
    }
    group.finish();
}

fn bench_marquee(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage/marquee");
    for n in [4usize, 8, 16] {
        let placements = grid(n);
        let rect = Rect::new(-1.0, -1.0, n as f64 * 12.5, n as f64 * 12.5);
        group.bench_with_input(BenchmarkId::from_parameter(n * n), &placements, |b, p| {
            b.iter(|| {
                let mut selection = PerformerSelection::new();
                selection.replace_with(marquee_select(p, black_box(rect)));
                black_box(selection)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_test, bench_marquee);
criterion_main!(benches);
