//! Common types re-exported for convenience.

pub use crate::board::color::Color;
pub use crate::board::coordinate::Coordinate;
pub use crate::board::piece::{Piece, PieceKind};
pub use crate::board::Board;
pub use crate::chess_move::{Move, MoveSet};
pub use crate::evaluate::GameState;
pub use crate::game::{Game, GameError, Selection};
pub use crate::legality::{MoveFilter, PseudoLegal, StandardRules};
