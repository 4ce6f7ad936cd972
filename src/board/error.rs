use thiserror::Error;

use super::coordinate::Coordinate;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Board dimensions must be positive and fit in memory, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("Square {0} is not on the board")]
    OffBoard(Coordinate),
    #[error("Cannot put a piece on {0}, the square is already occupied")]
    SquareOccupied(Coordinate),
    #[error("There is no piece on {0} to move")]
    EmptySquare(Coordinate),
    #[error("Invalid board diagram: {0}")]
    InvalidDiagram(String),
}
