use crate::maze::{Direction, Grid};

/// Whether moving from `from` one step in `direction` follows an open passage.
///
/// Returns false when the origin or the target lies outside the grid, or when the wall on
/// that side of the origin cell is in place.
pub fn is_valid_move(grid: &Grid, from: (u16, u16), direction: Direction) -> bool {
    let Some(target) = direction.step(from) else {
        return false;
    };
    if !grid.is_in_bounds(target) {
        return false;
    }
    grid.cell_at(from).is_ok_and(|cell| cell.is_open(direction))
}

/// Attempt a move, returning the new position if it is valid.
pub fn try_move(grid: &Grid, from: (u16, u16), direction: Direction) -> Option<(u16, u16)> {
    if is_valid_move(grid, from, direction) {
        direction.step(from)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::MazeGenerator;

    #[test]
    fn test_single_cell_has_no_moves() {
        let grid = Grid::new(1, 1).unwrap();
        for direction in Direction::ALL {
            assert!(!is_valid_move(&grid, (0, 0), direction));
            assert_eq!(try_move(&grid, (0, 0), direction), None);
        }
    }

    #[test]
    fn test_moves_follow_passages() {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.open_passage((0, 0), (1, 0)).unwrap();

        assert!(is_valid_move(&grid, (0, 0), Direction::Right));
        assert!(is_valid_move(&grid, (1, 0), Direction::Left));
        assert!(!is_valid_move(&grid, (1, 0), Direction::Right));
        assert!(!is_valid_move(&grid, (0, 0), Direction::Left));
        assert!(!is_valid_move(&grid, (0, 0), Direction::Up));
        assert!(!is_valid_move(&grid, (0, 0), Direction::Down));

        assert_eq!(try_move(&grid, (0, 0), Direction::Right), Some((1, 0)));
        assert_eq!(try_move(&grid, (1, 0), Direction::Right), None);
    }

    #[test]
    fn test_out_of_bounds_origin() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(!is_valid_move(&grid, (2, 1), Direction::Left));
        assert!(!is_valid_move(&grid, (u16::MAX, u16::MAX), Direction::Right));
    }

    #[test]
    fn test_edges_block_and_interior_agrees_with_flags() {
        let grid = MazeGenerator::from_seed(Some(3)).generate(8, 5).unwrap();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let cell = grid.cell_at((x, y)).unwrap();
                assert_eq!(is_valid_move(&grid, (x, y), Direction::Left), x > 0 && cell.open_left);
                assert_eq!(is_valid_move(&grid, (x, y), Direction::Up), y > 0 && cell.open_top);
                assert_eq!(
                    is_valid_move(&grid, (x, y), Direction::Right),
                    x + 1 < grid.width() && cell.open_right
                );
                assert_eq!(
                    is_valid_move(&grid, (x, y), Direction::Down),
                    y + 1 < grid.height() && cell.open_bottom
                );
                if x == 0 {
                    assert!(!is_valid_move(&grid, (x, y), Direction::Left));
                }
                if y + 1 == grid.height() {
                    assert!(!is_valid_move(&grid, (x, y), Direction::Down));
                }
            }
        }
    }
}
