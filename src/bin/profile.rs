use std::time::{Duration, Instant};

use mazecarve::{Generator, Grid, MazeGenerator, logging::init_tracing, maze::analysis};

const DEFAULT_NUM_ITERS: u64 = 100;

fn main() -> anyhow::Result<()> {
    let _guard = init_tracing(None, false)?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_NUM_ITERS);
    let width = args.next().and_then(|s| s.parse::<u16>().ok()).unwrap_or(80);
    let height = args.next().and_then(|s| s.parse::<u16>().ok()).unwrap_or(40);

    for algorithm in Generator::ALL {
        let mut total = Duration::ZERO;
        let mut total_iterations = 0;
        for seed in 0..num_iters {
            let mut generator = MazeGenerator::from_seed(Some(seed)).with_algorithm(algorithm);
            let mut grid = Grid::new(width, height)?;

            let start = Instant::now();
            let stats = generator.carve(&mut grid)?;
            let elapsed = start.elapsed();

            anyhow::ensure!(
                analysis::is_perfect(&grid),
                "seed {seed} produced a maze that is not a spanning tree"
            );
            tracing::debug!(
                "[profile] {} seed {}: {:?}, {} iterations",
                algorithm,
                seed,
                elapsed,
                stats.iterations
            );
            total += elapsed;
            total_iterations += stats.iterations;
        }
        tracing::info!(
            "[profile] {}: {} runs of {}x{} in {:?} (avg {:?}, avg {} iterations)",
            algorithm,
            num_iters,
            width,
            height,
            total,
            total / num_iters.max(1) as u32,
            total_iterations / num_iters.max(1)
        );
    }
    Ok(())
}
