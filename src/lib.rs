//! Perfect maze generation: a randomized union-find spanning tree carved into a rectangular
//! grid, with per-cell passage queries and movement validation for whatever layer draws it.

pub mod generators;
pub mod logging;
pub mod maze;
pub mod movement;

pub use generators::{GenerationStats, Generator, MazeGenerator, generate_maze};
pub use maze::{Cell, Direction, Grid, MazeError};
pub use movement::{is_valid_move, try_move};
