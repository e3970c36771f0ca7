pub mod analysis;
pub mod cell;
mod error;
pub mod grid;

pub use cell::Cell;
pub use error::MazeError;
pub use grid::Grid;

/// Axis along which two neighboring cells are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One of the four cardinal moves on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Left | Direction::Right => Orientation::Horizontal,
            Direction::Up | Direction::Down => Orientation::Vertical,
        }
    }

    /// The coordinate one step away from `from` in this direction.
    /// Returns `None` when the step would underflow or overflow `u16`; the result is not
    /// checked against any grid.
    pub fn step(self, from: (u16, u16)) -> Option<(u16, u16)> {
        let (x, y) = from;
        match self {
            Direction::Left => Some((x.checked_sub(1)?, y)),
            Direction::Right => Some((x.checked_add(1)?, y)),
            Direction::Up => Some((x, y.checked_sub(1)?)),
            Direction::Down => Some((x, y.checked_add(1)?)),
        }
    }

    /// The direction leading from `from` to the orthogonally adjacent `to`, if they are adjacent.
    pub fn between(from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.step(from) == Some(to))
    }
}
