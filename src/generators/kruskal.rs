use rand::{Rng, seq::SliceRandom};

use super::{GenerationStats, union_find::DisjointSet};
use crate::maze::{Grid, MazeError};

/// Wall edge between two adjacent cells
#[derive(Clone, Copy)]
struct Edge {
    cell1: (u16, u16),
    cell2: (u16, u16),
}

/// Randomized Kruskal: shuffle every interior wall once and knock it down whenever the
/// cells on both sides are still in different regions. Finishes after at most one pass
/// over the walls.
pub fn carve_kruskal<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<GenerationStats, MazeError> {
    let width = grid.width();
    let height = grid.height();
    let mut sets = DisjointSet::new(grid.len());
    let mut stats = GenerationStats::default();

    // Collect all possible edges (walls between adjacent cells)
    let mut edges: Vec<Edge> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .flat_map(|(x, y)| {
            [
                (x + 1 < width).then(|| Edge {
                    cell1: (x, y),
                    cell2: (x + 1, y),
                }),
                (y + 1 < height).then(|| Edge {
                    cell1: (x, y),
                    cell2: (x, y + 1),
                }),
            ]
        })
        .flatten()
        .collect();

    edges.shuffle(rng);
    tracing::debug!("[generator] shuffled {} walls", edges.len());

    for edge in edges {
        if sets.distinct_count() <= 1 {
            break;
        }
        stats.iterations += 1;

        let idx1 = grid.index_of(edge.cell1)?;
        let idx2 = grid.index_of(edge.cell2)?;

        // If cells are not yet connected, remove the wall between them
        if sets.union(idx1, idx2) {
            grid.open_passage(edge.cell1, edge.cell2)?;
            stats.passages += 1;
            tracing::trace!(
                "[generator] opened passage {:?} <-> {:?}",
                edge.cell1,
                edge.cell2
            );
        } else {
            stats.rejected += 1;
        }
    }

    Ok(stats)
}
