use log::{debug, warn};

use crate::board::coordinate::Coordinate;
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;

/// Post-move hook for pawns. A pawn whose next forward square is off the
/// board is replaced by a queen of the same color on the same square.
/// Returns true if a promotion happened.
pub fn promote_if_due(board: &mut Board, at: Coordinate) -> bool {
    let pawn = match board.get(at) {
        Some(piece) if piece.kind == PieceKind::Pawn => *piece,
        _ => return false,
    };
    if board.on_board(at.shift(0, pawn.color.forward())) {
        return false;
    }

    board.remove(at);
    let queen = Piece::new(PieceKind::Queen, pawn.color, at).moved();
    if let Err(error) = board.put(queen) {
        warn!("could not promote {}: {}", pawn, error);
        return false;
    }
    debug!("{} promoted to a queen", pawn);
    true
}
