#![allow(dead_code, unused_imports)]

use entity_registry::Registry;
use serde_json::json;
use std::{fs::File, time::Instant};

#[cfg(feature = "profiling")]
use tracing_subscriber::{self, prelude::*};

#[cfg(feature = "profiling")]
fn profile_ticks(registry: &mut Registry, entities: usize, ticks: usize) {
    let handles: Vec<_> = (0..entities).map(|_| registry.create_entity()).collect();

    for tick in 0..ticks {
        let _span = tracing::info_span!("tick", tick = tick).entered();
        for (i, e) in handles.iter().enumerate() {
            registry.set_component(e, "Position", json!({ "x": i, "y": tick }));
        }
        for e in handles.iter().step_by(4) {
            registry.remove_component(e, "Position");
        }
        registry.flush_changes();
    }
}

#[cfg(feature = "profiling")]
fn main() {
    // Set up tracing subscriber to write to a file
    let file = File::create("trace.json").unwrap();
    let (non_blocking, _guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut registry = Registry::new();

    println!("Warming up...");
    {
        let _span = tracing::info_span!("warmup").entered();
        for _ in 0..1_000 {
            let e = registry.create_entity();
            registry.set_component(&e, "Position", json!({ "x": 0, "y": 0 }));
        }
        registry.flush_changes();
    }

    println!("Profiling 100 ticks over 10k entities...");
    let start = Instant::now();
    let mut registry = Registry::new();
    profile_ticks(&mut registry, 10_000, 100);
    println!("100 ticks complete in: {:?}", start.elapsed());
}

#[cfg(not(feature = "profiling"))]
fn main() {
    println!("profile_registry binary requires --features profiling");
}
