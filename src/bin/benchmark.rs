//! Throughput benchmark comparing serial and parallel sparse evolution

use std::time::Instant;

use sparse_life::domain::{ConwayRule, Generation, presets};

fn benchmark_serial(seed: &Generation, generations: u32) -> (f64, usize) {
    let rule = ConwayRule;
    let mut generation = seed.clone();

    let start = Instant::now();
    for _ in 0..generations {
        generation = generation.evolve(&rule);
    }
    let ms_per_gen = start.elapsed().as_secs_f64() * 1000.0 / generations as f64;
    (ms_per_gen, generation.len())
}

fn benchmark_parallel(seed: &Generation, generations: u32) -> (f64, usize) {
    let rule = ConwayRule;
    let mut generation = seed.clone();

    let start = Instant::now();
    for _ in 0..generations {
        generation = generation.evolve_parallel(&rule);
    }
    let ms_per_gen = start.elapsed().as_secs_f64() * 1000.0 / generations as f64;
    (ms_per_gen, generation.len())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Sparse Life Throughput Benchmark ===\n");
    println!(
        "{:>16} {:>10} {:>12} {:>12} {:>10} {:>12}",
        "Workload", "Gens", "Serial", "Parallel", "Speedup", "Final pop"
    );
    println!("{:-<78}", "");

    // Acorn grows a large, irregular working set from 7 cells; soups start
    // big and shrink toward ash.
    let workloads: Vec<(String, Generation, u32)> = vec![
        ("acorn".to_owned(), presets::acorn().as_generation(), 500),
        ("soup 200x200".to_owned(), Generation::randomized(200, 200), 100),
        ("soup 500x500".to_owned(), Generation::randomized(500, 500), 50),
        ("soup 1000x1000".to_owned(), Generation::randomized(1000, 1000), 20),
    ];

    for (name, seed, generations) in workloads {
        let (serial_ms, _) = benchmark_serial(&seed, generations);
        let (parallel_ms, final_pop) = benchmark_parallel(&seed, generations);

        println!(
            "{:>16} {:>10} {:>10.2}ms {:>10.2}ms {:>9.1}x {:>12}",
            name,
            generations,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            final_pop
        );
    }
}
