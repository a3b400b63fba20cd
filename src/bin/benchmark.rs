//! Compare serial and rayon generation steps on random boards

use std::time::Instant;

use life_engine::domain::{GridBounds, LiveSet, random_seed, step, step_parallel};
use rand::{SeedableRng, rngs::StdRng};

/// Average milliseconds per generation over `iterations` steps
fn benchmark(bounds: &GridBounds, seed: &LiveSet, iterations: u32, evolve: fn(&GridBounds, &LiveSet) -> LiveSet) -> f64 {
    let mut live = seed.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        live = evolve(bounds, &live);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [40, 100, 250, 500, 1000];
    let iterations = 20;
    let mut rng = StdRng::seed_from_u64(0x5eed);

    println!("{:>10} {:>10} {:>12} {:>12} {:>10}", "Grid", "Seeded", "Serial", "Parallel", "Speedup");
    println!("{:-<60}", "");

    for size in sizes {
        let bounds = GridBounds::new(size, size);
        // 0.6 samples per tile; duplicates collapse
        let seed = random_seed(&bounds, &mut rng, 6 * (size * size) as usize / 10);

        let serial_ms = benchmark(&bounds, &seed, iterations, step);
        let parallel_ms = benchmark(&bounds, &seed, iterations, step_parallel);

        println!(
            "{:>10} {:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{size}x{size}"),
            seed.len(),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
