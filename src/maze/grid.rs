use std::fmt;

use super::{Cell, Direction, MazeError};

/// Rectangular maze grid storing one [`Cell`] per position in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid of `width` x `height` cells with every wall in place.
    ///
    /// Fails with [`MazeError::InvalidDimension`] if either dimension is 0.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        let data = vec![Cell::CLOSED; width as usize * height as usize].into_boxed_slice();
        Ok(Grid {
            data,
            width,
            height,
        })
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false, a grid holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    /// Checks if the given coordinate is within the bounds of the grid.
    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    fn check_bounds(&self, coord: (u16, u16)) -> Result<(), MazeError> {
        if self.is_in_bounds(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Row-major index of `coord`.
    pub fn index_of(&self, coord: (u16, u16)) -> Result<usize, MazeError> {
        self.check_bounds(coord)?;
        Ok(self.ravel_index(coord.0, coord.1))
    }

    /// Coordinate of the cell stored at `index`. Inverse of [`Grid::index_of`].
    pub fn coords_of(&self, index: usize) -> Result<(u16, u16), MazeError> {
        if index >= self.len() {
            return Err(MazeError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        let width = self.width as usize;
        // Both parts fit in u16 because index < width * height
        Ok(((index % width) as u16, (index / width) as u16))
    }

    /// Returns a copy of the cell at `coord`.
    pub fn cell_at(&self, coord: (u16, u16)) -> Result<Cell, MazeError> {
        let idx = self.index_of(coord)?;
        Ok(self.data[idx])
    }

    /// Removes the wall between two adjacent cells, updating the flags of both.
    ///
    /// Returns `Ok(true)` if the passage was newly opened and `Ok(false)` if it was already open.
    /// Nothing is modified when either coordinate is out of bounds or the cells are not adjacent.
    pub fn open_passage(&mut self, from: (u16, u16), to: (u16, u16)) -> Result<bool, MazeError> {
        let from_idx = self.index_of(from)?;
        let to_idx = self.index_of(to)?;
        let direction =
            Direction::between(from, to).ok_or(MazeError::InvalidNeighborPair { from, to })?;

        let was_open = self.data[from_idx].is_open(direction);
        self.data[from_idx].open(direction);
        self.data[to_idx].open(direction.opposite());
        Ok(!was_open)
    }

    /// Puts back every wall, leaving all cells closed.
    pub fn fill_walls(&mut self) {
        self.data.fill(Cell::CLOSED);
    }

    /// Get in-bounds neighbors of a cell, in left, right, up, down order.
    /// An out-of-bounds coordinate has no neighbors.
    pub fn neighbors(&self, coord: (u16, u16)) -> impl Iterator<Item = (u16, u16)> + '_ {
        let in_bounds = self.is_in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |_| in_bounds)
            .filter_map(move |direction| direction.step(coord))
            .filter(move |&c| self.is_in_bounds(c))
    }
}

/// ASCII box drawing of the maze: a row of underscores on top, then each row starts with `|`
/// and draws every cell as its bottom edge (` ` or `_`) followed by its right edge (` ` or `|`).
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "_".repeat(self.width as usize * 2 + 1))?;
        for row in self.data.chunks(self.width as usize) {
            f.write_str("|")?;
            for cell in row {
                f.write_str(if cell.open_bottom { " " } else { "_" })?;
                f.write_str(if cell.open_right { " " } else { "|" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
