use std::error::Error;
use std::fmt;

use crate::cells::Cartesian2DCoordinate;

/// Failures reported to the immediate caller. Nothing is retried internally.
///
/// An unreachable path target is not an error: path queries return an empty path.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum MazeError {
    /// Width or height is even or smaller than 3.
    InvalidDimensions { width: usize, height: usize },
    /// A query coordinate lies outside the grid.
    OutOfBounds(Cartesian2DCoordinate),
    /// More markers were requested than there are free floor cells to hold them.
    PlacementExhausted { requested: usize, available: usize },
    /// A textual grid dump could not be parsed. `line` is 1-based.
    MalformedText { line: usize },
}

pub type Result<T> = ::std::result::Result<T, MazeError>;

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MazeError::InvalidDimensions { width, height } => {
                write!(f,
                       "invalid maze dimensions {}x{}: width and height must be odd and at least 3",
                       width,
                       height)
            }
            MazeError::OutOfBounds(coord) => write!(f, "coordinate {} is outside the grid", coord),
            MazeError::PlacementExhausted { requested, available } => {
                write!(f,
                       "cannot place {} markers, only {} free floor cells",
                       requested,
                       available)
            }
            MazeError::MalformedText { line } => write!(f, "malformed grid text at line {}", line),
        }
    }
}

impl Error for MazeError {}
