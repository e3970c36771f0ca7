//! Structural checks over a carved grid: passage counting, wall consistency and
//! breadth-first connectivity. Used to verify that a grid is a perfect maze.

use std::collections::VecDeque;

use super::{Direction, Grid, MazeError};
use crate::movement::try_move;

type Passage = ((u16, u16), (u16, u16));

/// Number of open passages, each one counted once even though both cells record it.
pub fn passage_count(grid: &Grid) -> usize {
    let open_sides: usize = grid.cells().iter().map(|cell| cell.open_count()).sum();
    open_sides / 2
}

/// Checks that neighboring cells agree on the wall between them and that no passage leads
/// off the grid.
pub fn has_consistent_walls(grid: &Grid) -> bool {
    (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| (x, y)))
        .all(|coord| {
            let Ok(cell) = grid.cell_at(coord) else {
                return false;
            };
            Direction::ALL.into_iter().all(|direction| {
                let target = direction.step(coord).filter(|&c| grid.is_in_bounds(c));
                match target.map(|c| grid.cell_at(c)) {
                    Some(Ok(neighbor)) => {
                        cell.is_open(direction) == neighbor.is_open(direction.opposite())
                    }
                    // Border side: must stay closed
                    _ => !cell.is_open(direction),
                }
            })
        })
}

/// Number of cells reachable from `start` through open passages, `start` included.
pub fn reachable_count(grid: &Grid, start: (u16, u16)) -> Result<usize, MazeError> {
    Ok(flood(grid, start, None)?.into_iter().filter(|&v| v).count())
}

/// A grid is a perfect maze when its passages form a spanning tree: walls are consistent,
/// every cell is reachable from the origin and there are exactly `len - 1` passages.
pub fn is_perfect(grid: &Grid) -> bool {
    has_consistent_walls(grid)
        && passage_count(grid) == grid.len() - 1
        && reachable_count(grid, (0, 0)).is_ok_and(|count| count == grid.len())
}

/// Breadth-first flood fill from `start`, optionally pretending that `skip` is walled off.
/// Returns the visited flag of every cell by index.
fn flood(grid: &Grid, start: (u16, u16), skip: Option<Passage>) -> Result<Vec<bool>, MazeError> {
    let mut visited = vec![false; grid.len()];
    visited[grid.index_of(start)?] = true;
    let mut queue = VecDeque::from([start]);

    let is_skipped = |a: (u16, u16), b: (u16, u16)| {
        skip.is_some_and(|(p, q)| (p, q) == (a, b) || (q, p) == (a, b))
    };

    while let Some(current) = queue.pop_front() {
        for direction in Direction::ALL {
            let Some(next) = try_move(grid, current, direction) else {
                continue;
            };
            if is_skipped(current, next) {
                continue;
            }
            let idx = grid.index_of(next)?;
            if !visited[idx] {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }
    Ok(visited)
}
