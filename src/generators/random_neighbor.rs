use rand::Rng;

use super::{GenerationStats, union_find::DisjointSet};
use crate::maze::{Direction, Grid, MazeError, Orientation};

/// Pick a random in-bounds neighbor of `coord`: choose an axis, then a direction along it,
/// and retry whenever the step would leave the grid.
///
/// The grid must hold more than one cell, otherwise no neighbor exists.
fn random_neighbor<R: Rng>(grid: &Grid, coord: (u16, u16), rng: &mut R) -> (u16, u16) {
    loop {
        let orientation = if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let direction = match (orientation, rng.random_bool(0.5)) {
            (Orientation::Horizontal, true) => Direction::Right,
            (Orientation::Horizontal, false) => Direction::Left,
            (Orientation::Vertical, true) => Direction::Down,
            (Orientation::Vertical, false) => Direction::Up,
        };
        if let Some(next) = direction.step(coord).filter(|&c| grid.is_in_bounds(c)) {
            return next;
        }
    }
}

/// Carve a spanning tree by repeatedly joining a random cell with a random neighbor
/// that is not yet connected to it. Pairs already in the same region are thrown away,
/// so the number of samples grows as the maze nears completion.
///
/// Fails with [`MazeError::GenerationStalled`] once `max_iterations` samples were drawn
/// without finishing.
pub fn carve_random_neighbor<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
    max_iterations: u64,
) -> Result<GenerationStats, MazeError> {
    let mut sets = DisjointSet::new(grid.len());
    let mut stats = GenerationStats::default();

    while sets.distinct_count() > 1 {
        if stats.iterations >= max_iterations {
            tracing::debug!(
                "[generator] giving up after {} iterations, {} regions left",
                stats.iterations,
                sets.distinct_count()
            );
            return Err(MazeError::GenerationStalled {
                iterations: stats.iterations,
                remaining_sets: sets.distinct_count(),
            });
        }
        stats.iterations += 1;

        let index = rng.random_range(0..grid.len());
        let from = grid.coords_of(index)?;
        let to = random_neighbor(grid, from, rng);
        let neighbor_index = grid.index_of(to)?;

        if sets.same_set(index, neighbor_index) {
            // Joining them would close a loop
            stats.rejected += 1;
            continue;
        }

        grid.open_passage(from, to)?;
        sets.union(index, neighbor_index);
        stats.passages += 1;
        tracing::trace!("[generator] opened passage {:?} <-> {:?}", from, to);
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::analysis;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_random_neighbor_is_adjacent_and_in_bounds() {
        let grid = Grid::new(4, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            for coord in [(0, 0), (3, 2), (1, 1), (3, 0)] {
                let next = random_neighbor(&grid, coord, &mut rng);
                assert!(grid.is_in_bounds(next));
                assert!(Direction::between(coord, next).is_some());
            }
        }
    }

    #[test]
    fn test_random_neighbor_single_column() {
        let grid = Grid::new(1, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            assert_eq!(random_neighbor(&grid, (0, 0), &mut rng), (0, 1));
        }
    }

    #[test]
    fn test_carve_single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let stats = carve_random_neighbor(&mut grid, &mut rng, 0).unwrap();
        assert_eq!(stats, GenerationStats::default());
        assert_eq!(analysis::passage_count(&grid), 0);
    }

    #[test]
    fn test_carve_counts() {
        let mut grid = Grid::new(6, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let stats = carve_random_neighbor(&mut grid, &mut rng, u64::MAX).unwrap();
        assert_eq!(stats.passages, 23);
        assert_eq!(stats.iterations, stats.passages as u64 + stats.rejected);
        assert!(analysis::is_perfect(&grid));
    }

    #[test]
    fn test_carve_stalls() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        // 99 passages are needed, so 10 samples can never be enough
        let err = carve_random_neighbor(&mut grid, &mut rng, 10).unwrap_err();
        match err {
            MazeError::GenerationStalled {
                iterations,
                remaining_sets,
            } => {
                assert_eq!(iterations, 10);
                assert!(remaining_sets >= 90);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
