use crate::maze::Direction;

/// Passage flags of a single maze cell.
/// A flag set to `true` means there is no wall on that side.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub open_top: bool,
    pub open_right: bool,
    pub open_bottom: bool,
    pub open_left: bool,
}

impl Cell {
    /// A cell with walls on all four sides.
    pub const CLOSED: Cell = Cell {
        open_top: false,
        open_right: false,
        open_bottom: false,
        open_left: false,
    };

    /// Whether the side facing `direction` has a passage.
    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.open_top,
            Direction::Right => self.open_right,
            Direction::Down => self.open_bottom,
            Direction::Left => self.open_left,
        }
    }

    pub(crate) fn open(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.open_top = true,
            Direction::Right => self.open_right = true,
            Direction::Down => self.open_bottom = true,
            Direction::Left => self.open_left = true,
        }
    }

    /// Number of open sides.
    pub fn open_count(&self) -> usize {
        [
            self.open_top,
            self.open_right,
            self.open_bottom,
            self.open_left,
        ]
        .into_iter()
        .filter(|&open| open)
        .count()
    }
}
