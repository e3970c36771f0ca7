use std::str::FromStr;

use rand::{Rng, SeedableRng, rngs::StdRng};

mod kruskal;
mod random_neighbor;
pub mod union_find;

use kruskal::carve_kruskal;
use random_neighbor::carve_random_neighbor;

use crate::maze::{Grid, MazeError};

/// Iteration ceiling per cell used by [`Generator::RandomNeighbor`] unless overridden.
/// Expected sample counts grow like `n log n`, far below this.
pub const DEFAULT_ITERATIONS_PER_CELL: u64 = 1_000;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Spanning-tree carving algorithms.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// Sample a random cell and a random neighbor, join them if not yet connected.
    #[default]
    RandomNeighbor,
    /// Process every wall once in shuffled order.
    Kruskal,
}

impl Generator {
    pub const ALL: [Generator; 2] = [Generator::RandomNeighbor, Generator::Kruskal];

    /// Name accepted by [`Generator::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Generator::RandomNeighbor => "random-neighbor",
            Generator::Kruskal => "kruskal",
        }
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RandomNeighbor => write!(f, "Random Neighbor Union-Find"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

impl FromStr for Generator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Generator::ALL
            .into_iter()
            .find(|generator| generator.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names = Generator::ALL.map(|g| g.name()).join(", ");
                format!("unknown generator '{s}', expected one of: {names}")
            })
    }
}

/// Counters collected while carving a grid.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Candidate pairs examined.
    pub iterations: u64,
    /// Candidates thrown away because both cells were already connected.
    pub rejected: u64,
    /// Passages opened.
    pub passages: usize,
}

/// Carves perfect mazes using an injected random number generator.
pub struct MazeGenerator<R = StdRng> {
    rng: R,
    algorithm: Generator,
    /// Overrides the default ceiling derived from the cell count
    max_iterations: Option<u64>,
}

impl MazeGenerator<StdRng> {
    /// Generator backed by a [`StdRng`], seeded for reproducible mazes or from OS entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        MazeGenerator::new(get_rng(seed))
    }
}

impl<R: Rng> MazeGenerator<R> {
    pub fn new(rng: R) -> Self {
        MazeGenerator {
            rng,
            algorithm: Generator::default(),
            max_iterations: None,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Generator) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Caps the number of samples [`Generator::RandomNeighbor`] may draw before failing with
    /// [`MazeError::GenerationStalled`].
    pub fn with_max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn algorithm(&self) -> Generator {
        self.algorithm
    }

    /// Iteration ceiling applied to a grid of `cells` cells.
    pub fn iteration_ceiling(&self, cells: usize) -> u64 {
        self.max_iterations
            .unwrap_or_else(|| DEFAULT_ITERATIONS_PER_CELL.saturating_mul(cells as u64))
    }

    /// Builds a `width` x `height` grid and carves a perfect maze into it.
    pub fn generate(&mut self, width: u16, height: u16) -> Result<Grid, MazeError> {
        let mut grid = Grid::new(width, height)?;
        self.carve(&mut grid)?;
        Ok(grid)
    }

    /// Carves a perfect maze into `grid`. Any passages already present are walled up first.
    pub fn carve(&mut self, grid: &mut Grid) -> Result<GenerationStats, MazeError> {
        grid.fill_walls();
        tracing::debug!(
            "[generator] carving {}x{} maze with {}",
            grid.width(),
            grid.height(),
            self.algorithm
        );

        let stats = match self.algorithm {
            Generator::RandomNeighbor => {
                let ceiling = self.iteration_ceiling(grid.len());
                carve_random_neighbor(grid, &mut self.rng, ceiling)?
            }
            Generator::Kruskal => carve_kruskal(grid, &mut self.rng)?,
        };

        tracing::debug!(
            "[generator] done: {} passages, {} iterations, {} rejected",
            stats.passages,
            stats.iterations,
            stats.rejected
        );
        Ok(stats)
    }
}

/// Generate a `width` x `height` perfect maze with the given algorithm.
/// `seed` makes the result reproducible; `None` draws from OS entropy.
pub fn generate_maze(
    width: u16,
    height: u16,
    generator: Generator,
    seed: Option<u64>,
) -> Result<Grid, MazeError> {
    MazeGenerator::from_seed(seed)
        .with_algorithm(generator)
        .generate(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Direction, analysis};
    use crate::movement::is_valid_move;

    #[test]
    fn test_single_cell_maze() {
        for generator in Generator::ALL {
            let grid = generate_maze(1, 1, generator, Some(0)).unwrap();
            assert_eq!(grid.len(), 1);
            assert_eq!(analysis::passage_count(&grid), 0);
            for direction in Direction::ALL {
                assert!(!is_valid_move(&grid, (0, 0), direction));
            }
        }
    }

    #[test]
    fn test_two_by_two_maze() {
        for seed in 0..20 {
            let grid = generate_maze(2, 2, Generator::RandomNeighbor, Some(seed)).unwrap();
            assert_eq!(analysis::passage_count(&grid), 3);
            assert_eq!(analysis::reachable_count(&grid, (0, 0)), Ok(4));
        }
    }

    #[test]
    fn test_spanning_tree_for_many_shapes() {
        for generator in Generator::ALL {
            for (width, height) in [(1, 2), (2, 1), (1, 9), (9, 1), (3, 3), (5, 3), (16, 11)] {
                let grid = generate_maze(width, height, generator, Some(42)).unwrap();
                assert!(analysis::has_consistent_walls(&grid));
                assert_eq!(analysis::passage_count(&grid), grid.len() - 1);
                for start in [(0, 0), (width - 1, height - 1), (width / 2, height / 2)] {
                    assert_eq!(analysis::reachable_count(&grid, start), Ok(grid.len()));
                }
            }
        }
    }

    #[test]
    fn test_large_maze_terminates() {
        let grid = generate_maze(80, 40, Generator::RandomNeighbor, Some(2024)).unwrap();
        assert_eq!(grid.len(), 3200);
        assert_eq!(analysis::passage_count(&grid), 3199);
        assert!(analysis::is_perfect(&grid));
    }

    #[test]
    fn test_seed_is_reproducible() {
        for generator in Generator::ALL {
            let a = generate_maze(12, 9, generator, Some(99)).unwrap();
            let b = generate_maze(12, 9, generator, Some(99)).unwrap();
            assert_eq!(a, b);
            assert_eq!(a.to_string(), b.to_string());
        }
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            generate_maze(0, 5, Generator::Kruskal, None),
            Err(MazeError::InvalidDimension {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn test_iteration_ceiling() {
        let generator = MazeGenerator::from_seed(Some(1));
        assert_eq!(generator.iteration_ceiling(3200), 3_200_000);
        let generator = generator.with_max_iterations(5);
        assert_eq!(generator.iteration_ceiling(3200), 5);

        let mut generator = MazeGenerator::from_seed(Some(1)).with_max_iterations(5);
        assert!(matches!(
            generator.generate(10, 10),
            Err(MazeError::GenerationStalled { iterations: 5, .. })
        ));

        // Kruskal always finishes within one pass over the walls
        let mut generator = generator.with_algorithm(Generator::Kruskal);
        assert!(generator.generate(10, 10).is_ok());
    }

    #[test]
    fn test_carve_resets_existing_passages() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut generator = MazeGenerator::from_seed(Some(8));
        generator.carve(&mut grid).unwrap();
        let stats = generator.carve(&mut grid).unwrap();
        assert_eq!(stats.passages, 15);
        assert!(analysis::is_perfect(&grid));
    }

    #[test]
    fn test_parse_generator() {
        assert_eq!("kruskal".parse::<Generator>(), Ok(Generator::Kruskal));
        assert_eq!(
            " Random-Neighbor ".parse::<Generator>(),
            Ok(Generator::RandomNeighbor)
        );
        assert!("prim".parse::<Generator>().is_err());
        for generator in Generator::ALL {
            assert_eq!(generator.name().parse::<Generator>(), Ok(generator));
        }
    }
}
