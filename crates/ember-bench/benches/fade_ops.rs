//! Criterion micro-benchmarks for the fade tracker.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ember_bench::soup;
use ember_engine::FadeTracker;
use ember_grid::GridDims;

/// Benchmark: fade update while the alive set oscillates between two
/// soups, so every update both decays and refreshes cells.
fn bench_fade_update_oscillating(c: &mut Criterion) {
    let dims = GridDims::new(256, 256);
    let even = soup(dims, 0.15, 3);
    let odd = soup(dims, 0.15, 4);

    c.bench_function("fade_update_oscillating_256", |b| {
        b.iter(|| {
            let mut fade = FadeTracker::new(1.0).unwrap();
            for frame in 0..32 {
                let alive = if frame % 2 == 0 { &even } else { &odd };
                fade.update(alive, 0.016);
            }
            black_box(&fade);
        });
    });
}

/// Benchmark: alpha queries over every glowing cell.
fn bench_fade_alpha_queries(c: &mut Criterion) {
    let dims = GridDims::new(256, 256);
    let alive = soup(dims, 0.15, 5);
    let mut fade = FadeTracker::new(1.0).unwrap();
    fade.update(&alive, 0.016);

    c.bench_function("fade_alpha_query_256", |b| {
        b.iter(|| {
            for pos in &alive {
                black_box(fade.alpha(*pos));
            }
        });
    });
}

criterion_group!(benches, bench_fade_update_oscillating, bench_fade_alpha_queries);
criterion_main!(benches);
