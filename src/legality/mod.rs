//! Legality policies. A policy receives a piece's pseudo-moves and returns
//! the subset (or superset) the host allows; the board never decides on its
//! own which moves are playable.

mod standard;

pub use standard::StandardRules;

use crate::board::piece::Piece;
use crate::board::Board;
use crate::chess_move::move_set::MoveSet;

pub trait MoveFilter {
    fn filter_moves(&self, board: &Board, piece: &Piece, moves: MoveSet) -> MoveSet;
}

/// Any closure with the right shape is a policy, so hosts can wrap or replace
/// `StandardRules` without declaring a type.
impl<F> MoveFilter for F
where
    F: Fn(&Board, &Piece, MoveSet) -> MoveSet,
{
    fn filter_moves(&self, board: &Board, piece: &Piece, moves: MoveSet) -> MoveSet {
        self(board, piece, moves)
    }
}

/// Leaves pseudo-moves untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct PseudoLegal;

impl MoveFilter for PseudoLegal {
    fn filter_moves(&self, _board: &Board, _piece: &Piece, moves: MoveSet) -> MoveSet {
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::PieceKind;
    use crate::{chess_position, coord, std_move};

    #[test]
    fn test_pseudo_legal_allows_moving_into_check() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            r.......
            ....K...
        };
        let moves = board.legal_moves(coord!(E1), &PseudoLegal).unwrap();
        assert!(moves.contains(&std_move!(E1, E2)));
        let filtered = board.legal_moves(coord!(E1), &StandardRules).unwrap();
        assert!(!filtered.contains(&std_move!(E1, E2)));
    }

    #[test]
    fn test_closure_can_extend_standard_rules() {
        let no_queen_moves = |board: &Board, piece: &Piece, moves: MoveSet| -> MoveSet {
            if piece.kind == PieceKind::Queen {
                MoveSet::new()
            } else {
                StandardRules.filter_moves(board, piece, moves)
            }
        };
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ...Q....
            ........
            ........
            ....K...
        };
        assert!(board.legal_moves(coord!(D4), &no_queen_moves).unwrap().is_empty());
        assert_eq!(5, board.legal_moves(coord!(E1), &no_queen_moves).unwrap().len());
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::starting_position();
        assert_eq!(None, board.legal_moves(coord!(E4), &StandardRules));
        assert_eq!(None, board.legal_moves(coord!(Z9), &StandardRules));
    }
}
