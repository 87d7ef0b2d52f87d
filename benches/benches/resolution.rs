// Copyright 2025 the Stagekeep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use stagekeep_project::{Entity, EntityId, EntityPlacement, PerformanceProject};
use stagekeep_timeline::{TimelineState, current_formation_index};

/// `formations` formations and `entities` performers, each performer placed
/// only in every fourth formation so that most lookups fall back.
fn sparse_project(formations: usize, entities: usize) -> (PerformanceProject, Vec<EntityId>) {
    let mut project = PerformanceProject::new();
    for i in 0..formations {
        project = project.push_formation(format!("Formation {i}"), 2_000.0, 500.0);
    }
    let mut ids = Vec::with_capacity(entities);
    for e in 0..entities {
        let id = EntityId::from(format!("p{e}"));
        project = project
            .add_entity(id.clone(), Entity::new("red", format!("P{e}")))
            .expect("ids are unique");
        for f in (e % 4..formations).step_by(4) {
            let position = Point::new(e as f64 * 10.0, f as f64 * 10.0);
            project = project.set_placement(f, &id, EntityPlacement::new(position));
        }
        ids.push(id);
    }
    (project, ids)
}

fn bench_placement_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("project/placement_at");
    for formations in [8usize, 64, 256] {
        let (project, ids) = sparse_project(formations, 32);
        group.throughput(Throughput::Elements(ids.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(formations),
            &(project, ids),
            |b, (project, ids)| {
                let index = formations / 2;
                b.iter(|| {
                    for id in ids {
                        black_box(project.placement_at(black_box(index), id));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_placements_at_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("project/placements_at_time");
    for formations in [8usize, 64, 256] {
        let (project, _) = sparse_project(formations, 32);
        let mid = project.total_time() / 2.0 + 250.0;
        group.bench_with_input(BenchmarkId::from_parameter(formations), &project, |b, project| {
            b.iter(|| black_box(project.placements_at_time(black_box(mid))));
        });
    }
    group.finish();
}

fn bench_set_positions(c: &mut Criterion) {
    let (project, ids) = sparse_project(64, 32);
    let moved: Vec<_> = ids
        .iter()
        .take(4)
        .map(|id| (id.clone(), Point::new(1.0, 1.0)))
        .collect();
    c.bench_function("project/set_positions", |b| {
        b.iter(|| black_box(project.set_positions(black_box(32), moved.iter().cloned())));
    });
}

fn bench_seeker_index(c: &mut Criterion) {
    let (project, _) = sparse_project(256, 1);
    let state = TimelineState::Seeker {
        time: project.total_time() * 0.75,
    };
    c.bench_function("timeline/current_formation_index", |b| {
        b.iter(|| black_box(current_formation_index(&project, black_box(&state))));
    });
}

criterion_group!(
    benches,
    bench_placement_at,
    bench_placements_at_time,
    bench_set_positions,
    bench_seeker_index
);
criterion_main!(benches);
