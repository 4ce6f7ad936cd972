//! Pseudo-move generation: every move a piece could make from the geometry
//! of the board alone, before any check or pin is considered.
//!
//! Generators take the piece by value-reference rather than by square, so the
//! same code serves real pieces and the hypothetical pieces used to probe for
//! attacks.

pub mod pawn;
pub mod sliding;
pub mod stepping;

use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;
use crate::chess_move::move_set::MoveSet;

pub type PieceMoveGenerator = fn(&Board, &Piece) -> MoveSet;

/// Static dispatch from kind to generator.
pub fn generator_for(kind: PieceKind) -> PieceMoveGenerator {
    match kind {
        PieceKind::Pawn => pawn::generate_pawn_moves,
        PieceKind::Knight => stepping::generate_knight_moves,
        PieceKind::Bishop => sliding::generate_bishop_moves,
        PieceKind::Rook => sliding::generate_rook_moves,
        PieceKind::Queen => sliding::generate_queen_moves,
        PieceKind::King => stepping::generate_king_moves,
    }
}

pub fn generate_pseudo_moves(board: &Board, piece: &Piece) -> MoveSet {
    generator_for(piece.kind)(board, piece)
}
