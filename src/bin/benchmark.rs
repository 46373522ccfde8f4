//! Step throughput benchmark: serial vs rayon candidate evaluation

use std::time::Instant;
use sparse_life::{Algorithm, LifeEngine, LifeError};

fn benchmark(
    size: i32,
    density: f64,
    algorithm: Algorithm,
    iterations: u32,
) -> Result<(f64, usize), LifeError> {
    let mut engine = LifeEngine::with_seed(size, size, 42)?;
    engine.randomize(density, None)?;
    let population = engine.population();

    let start = Instant::now();
    for _ in 0..iterations {
        engine.step_with(algorithm);
    }
    Ok((start.elapsed().as_secs_f64() * 1000.0 / iterations as f64, population))
}

fn main() -> Result<(), LifeError> {
    println!("=== Sparse Life Step Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let densities = [0.05, 0.3];
    let iterations = 20;

    println!("{:>10} {:>8} {:>10} {:>12} {:>12} {:>10}",
        "Size", "Density", "Live", "Sparse", "Sparse+Par", "Speedup");
    println!("{:-<68}", "");

    for size in sizes {
        for density in densities {
            let (serial_ms, population) = benchmark(size, density, Algorithm::Sparse, iterations)?;
            let (parallel_ms, _) = benchmark(size, density, Algorithm::SparseParallel, iterations)?;

            println!(
                "{:>10} {:>8.2} {:>10} {:>12.2} {:>12.2} {:>9.1}x",
                format!("{}x{}", size, size),
                density,
                population,
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms.max(f64::EPSILON)
            );
        }
    }

    Ok(())
}
