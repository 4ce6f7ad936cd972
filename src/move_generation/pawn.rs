use crate::board::piece::Piece;
use crate::board::Board;
use crate::chess_move::chess_move::Move;
use crate::chess_move::move_set::MoveSet;

/// Forward pushes onto empty squares (two squares from an unmoved pawn) and
/// diagonal captures onto enemy pieces. Promotion happens after execution,
/// not here.
pub fn generate_pawn_moves(board: &Board, piece: &Piece) -> MoveSet {
    let mut moves = MoveSet::new();
    let origin = piece.position;
    let forward = piece.color.forward();

    let single = origin.shift(0, forward);
    if board.on_board(single) && !board.is_occupied(single) {
        moves.push(Move::new(origin, single).with_needed_empty_locations(Some(single)));

        let double = single.shift(0, forward);
        if !piece.has_moved && board.on_board(double) && !board.is_occupied(double) {
            moves.push(Move::new(origin, double).with_needed_empty_locations(vec![single, double]));
        }
    }

    for &dx in [-1, 1].iter() {
        let target = origin.shift(dx, forward);
        if let Some(occupant) = board.get(target) {
            if occupant.is_enemy_of(piece.color) {
                moves.push(Move::capture(origin, target));
            }
        }
    }

    moves
}
