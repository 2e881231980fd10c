//! Benchmark for the analytics aggregation pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shinydex_rust::models::{OwnedRecord, PokedexLayout};
use shinydex_rust::services::compute_collection_analytics;

const TYPES: [&str; 6] = ["grass", "fire", "water", "electric", "psychic", "dark"];
const TAGS: [&str; 7] = ["SV", "PLA", "SwSh", "PoGo", "LGPE", "alpha", "legendary"];

fn synthetic_collection(size: usize) -> Vec<OwnedRecord> {
    (0..size)
        .map(|i| OwnedRecord {
            pokedex_number: (i % 1025) as u32 + 1,
            species_name: format!("Species {}", i % 400),
            types: vec![
                TYPES[i % TYPES.len()].to_string(),
                TYPES[(i / 3) % TYPES.len()].to_string(),
            ],
            tags: vec![TAGS[i % TAGS.len()].to_string()],
            level: if i % 5 == 0 { None } else { Some((i % 100) as u32 + 1) },
            moveset: (0..(i % 5)).map(|m| format!("Move {}", m)).collect(),
            caught_at: None,
        })
        .collect()
}

fn bench_compute_analytics(c: &mut Criterion) {
    let layout = PokedexLayout::default();

    for size in [100, 1_000, 10_000] {
        let records = synthetic_collection(size);
        c.bench_function(&format!("compute_analytics_{}", size), |b| {
            b.iter(|| {
                compute_collection_analytics(
                    black_box(&records),
                    &layout.generations,
                    layout.national_dex_size,
                )
            })
        });
    }
}

criterion_group!(benches, bench_compute_analytics);
criterion_main!(benches);
