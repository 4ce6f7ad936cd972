use std::fmt;

use super::coordinate::Coordinate;
use super::error::BoardError;
use super::piece::{Piece, PieceKind};
use super::Board;
use crate::board::color::Color;

impl Board {
    /// Builds a board from a diagram with the top rank first, `.` for empty
    /// squares, upper case for White and lower case for Black. Whitespace is
    /// ignored. Pawns away from their home rank count as having moved, every
    /// other piece starts unmoved.
    pub fn from_diagram(width: i32, height: i32, diagram: &str) -> Result<Board, BoardError> {
        let mut board = Board::new(width, height)?;
        let squares: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        if squares.len() != board.area() {
            return Err(BoardError::InvalidDiagram(format!(
                "expected {} squares, got {}",
                board.area(),
                squares.len()
            )));
        }

        for (i, &c) in squares.iter().enumerate() {
            if c == '.' {
                continue;
            }
            let (kind, color) = PieceKind::from_char(c)
                .ok_or_else(|| BoardError::InvalidDiagram(format!("unknown piece `{}`", c)))?;
            let row = i as i32 / width;
            let position = Coordinate::new(i as i32 % width, height - 1 - row);
            let mut piece = Piece::new(kind, color, position);
            if kind == PieceKind::Pawn {
                let home_rank = match color {
                    Color::White => 1,
                    Color::Black => height - 2,
                };
                piece.has_moved = position.y != home_rank;
            }
            board.put(piece)?;
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in (0..self.height()).rev() {
            let row: String = (0..self.width())
                .map(|x| {
                    self.get(Coordinate::new(x, y))
                        .map_or('.', |piece| piece.to_char())
                })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Builds an 8x8 board from a diagram written from White's side, rank 8 on
/// top. Panics on a malformed diagram, so it is meant for fixtures.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        $crate::board::Board::from_diagram(
            $crate::board::DEFAULT_WIDTH,
            $crate::board::DEFAULT_HEIGHT,
            stringify!($($piece)*),
        )
        .expect("chess position diagram should describe 64 valid squares")
    }};
}
