//! Throughput of the candidate-driven engine under its configuration knobs.
//!
//! Use with `--release` for meaningful numbers.

#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use rand::RngCore;
use rand::SeedableRng;
use sparse_life::{SparseLife, SparseLifeConfig};
use std::time::Instant;

fn seed_board(engine: &mut SparseLife, size: i64, density: f64, seed: u64) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density) as u64;
    let mut cells = Vec::new();
    for y in 0..size {
        for x in 0..size {
            if rng.next_u64() <= threshold {
                cells.push((x, y));
            }
        }
    }
    engine.add_alive_cells(cells);
}

fn bench(label: &str, config: SparseLifeConfig, size: i64, density: f64, iterations: u64) {
    let mut engine = SparseLife::with_config(config);
    seed_board(&mut engine, size, density, 0xBEEF_CAFE);

    // Warm up: let the initial soup settle a little
    engine.step_n(2);

    let start = Instant::now();
    engine.step_n(iterations);
    let elapsed = start.elapsed();

    let total_ms = elapsed.as_secs_f64() * 1000.0;
    let avg_us = total_ms * 1000.0 / iterations as f64;
    println!(
        "{:<34} {:>5} iters  {:>10.1} ms total  {:>10.1} us/step  pop={}",
        label,
        iterations,
        total_ms,
        avg_us,
        engine.population()
    );
}

fn bench_glider(steps: u64) {
    let mut engine = SparseLife::new();
    engine.add_alive_cells([(1, 0), (2, -1), (0, -2), (1, -2), (2, -2)]);

    let start = Instant::now();
    engine.step_n(steps);
    let elapsed = start.elapsed();

    let total_ms = elapsed.as_secs_f64() * 1000.0;
    let avg_us = total_ms * 1000.0 / steps as f64;
    println!(
        "{:<34} {:>5} iters  {:>10.1} ms total  {:>10.1} us/step  bounds={:?}",
        "glider (tiny)",
        steps,
        total_ms,
        avg_us,
        engine.bounds()
    );
}

fn main() {
    println!("=== SparseLife Benchmark ===\n");

    bench_glider(10_000);

    let plain = || SparseLifeConfig::default().dedup_candidates(false);
    let dedup = || SparseLifeConfig::default().dedup_candidates(true);

    bench("64x64 d=0.3 plain", plain(), 64, 0.3, 200);
    bench("64x64 d=0.3 dedup", dedup(), 64, 0.3, 200);
    bench("256x256 d=0.3 plain", plain(), 256, 0.3, 50);
    bench("256x256 d=0.3 dedup", dedup(), 256, 0.3, 50);
    bench(
        "256x256 d=0.3 dedup auto-threads",
        dedup().auto_threads().parallel_threshold(1_024),
        256,
        0.3,
        50,
    );
    bench("512x512 d=0.05 plain", plain(), 512, 0.05, 20);
}
