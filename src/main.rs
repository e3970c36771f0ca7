use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mazecarve::{Generator, Grid, MazeGenerator, logging::init_tracing};

/// Generate a perfect maze and print it as ASCII art
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 80, value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    /// Maze height in cells
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// Random seed, for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Carving algorithm: random-neighbor or kruskal
    #[arg(long, default_value = "random-neighbor")]
    algorithm: Generator,

    /// Give up after this many sampling iterations
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log debug details
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_tracing(args.log_file.as_deref(), args.verbose)?;

    let mut generator = MazeGenerator::from_seed(args.seed).with_algorithm(args.algorithm);
    if let Some(max_iterations) = args.max_iterations {
        generator = generator.with_max_iterations(max_iterations);
    }

    let mut grid = Grid::new(args.width, args.height)?;
    let stats = generator
        .carve(&mut grid)
        .with_context(|| format!("failed to carve a {}x{} maze", args.width, args.height))?;
    tracing::info!(
        "Generated {}x{} maze with {}: {} passages in {} iterations",
        grid.width(),
        grid.height(),
        args.algorithm,
        stats.passages,
        stats.iterations
    );

    print!("{grid}");
    Ok(())
}
