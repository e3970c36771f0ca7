use std::fmt;

/// Errors produced while building, querying or carving a maze grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height was zero at grid construction.
    InvalidDimension { width: u16, height: u16 },
    /// A coordinate outside `[0, width) x [0, height)`.
    OutOfBounds {
        coord: (u16, u16),
        width: u16,
        height: u16,
    },
    /// A flat cell index outside `[0, len)`.
    IndexOutOfBounds { index: usize, len: usize },
    /// Two cells that are not orthogonally adjacent.
    InvalidNeighborPair { from: (u16, u16), to: (u16, u16) },
    /// Generation hit its iteration ceiling before the grid became a single tree.
    GenerationStalled { iterations: u64, remaining_sets: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { width, height } => write!(
                f,
                "invalid maze dimensions {width}x{height}: width and height must be positive"
            ),
            MazeError::OutOfBounds {
                coord,
                width,
                height,
            } => write!(
                f,
                "coordinate {coord:?} is outside of the {width}x{height} maze"
            ),
            MazeError::IndexOutOfBounds { index, len } => {
                write!(f, "cell index {index} is outside of a maze with {len} cells")
            }
            MazeError::InvalidNeighborPair { from, to } => {
                write!(f, "cells {from:?} and {to:?} are not adjacent")
            }
            MazeError::GenerationStalled {
                iterations,
                remaining_sets,
            } => write!(
                f,
                "maze generation stalled after {iterations} iterations with {remaining_sets} disconnected regions left"
            ),
        }
    }
}

impl std::error::Error for MazeError {}
