//! Benchmarks for the registry hot path
//!
//! Run with: cargo bench
//!
//! Measures component attach/overwrite throughput and the per-tick
//! detach + flush cycle.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use entity_registry::{Entity, Registry};
use serde_json::json;

fn bench_attach(c: &mut Criterion) {
    let mut group = c.benchmark_group("attach");

    group.bench_function("create_and_set_1k", |b| {
        b.iter(|| {
            let mut registry = Registry::new();
            for i in 0..1_000 {
                let e = registry.create_entity();
                registry.set_component(&e, "Position", json!({ "x": i, "y": 0 }));
            }
            black_box(registry.entity_count());
        });
    });

    group.bench_function("overwrite_1k", |b| {
        let mut registry = Registry::new();
        let entities: Vec<Entity> = (0..1_000)
            .map(|i| {
                let e = registry.create_entity();
                registry.set_component(&e, "Position", json!({ "x": i, "y": 0 }));
                e
            })
            .collect();
        registry.flush_changes();

        b.iter(|| {
            for e in &entities {
                registry.set_component(e, "Position", json!({ "x": 1, "y": 1 }));
            }
            registry.flush_changes();
        });
    });

    group.finish();
}

fn bench_tick_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("detach_reattach_flush_1k", |b| {
        let mut registry = Registry::new();
        let entities: Vec<Entity> = (0..1_000).map(|_| registry.create_entity()).collect();

        b.iter(|| {
            for e in &entities {
                registry.set_component(e, "Heat", json!(1.0));
            }
            for e in &entities {
                registry.remove_component(e, "Heat");
            }
            registry.flush_changes();
            black_box(registry.stats().staged_removals);
        });
    });

    group.bench_function("query_backfill_1k", |b| {
        b.iter(|| {
            let mut registry =
                Registry::with_config(entity_registry::RegistryConfig { lazy_sets: true });
            for i in 0..1_000 {
                let e = registry.create_entity();
                registry.set_component(&e, "Position", json!({ "x": i }));
            }
            black_box(registry.entities_with("Position").len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_attach, bench_tick_cycle);
criterion_main!(benches);
