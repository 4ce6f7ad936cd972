use crate::board::coordinate::{Coordinate, DIRECTIONS};
use crate::board::piece::Piece;
use crate::board::Board;
use crate::chess_move::chess_move::Move;
use crate::chess_move::move_set::MoveSet;

pub const KNIGHT_OFFSETS: [Coordinate; 8] = [
    Coordinate { x: 1, y: 2 },
    Coordinate { x: 2, y: 1 },
    Coordinate { x: 2, y: -1 },
    Coordinate { x: 1, y: -2 },
    Coordinate { x: -1, y: -2 },
    Coordinate { x: -2, y: -1 },
    Coordinate { x: -2, y: 1 },
    Coordinate { x: -1, y: 2 },
];

pub fn generate_knight_moves(board: &Board, piece: &Piece) -> MoveSet {
    generate_stepping_moves(board, piece, &KNIGHT_OFFSETS)
}

/// One step in each direction. Squares the enemy covers are not excluded
/// here; keeping the king out of check is the legality filter's job.
pub fn generate_king_moves(board: &Board, piece: &Piece) -> MoveSet {
    generate_stepping_moves(board, piece, &DIRECTIONS)
}

/// A single hop per offset. Empty destinations are quiet moves, enemy
/// destinations captures; friendly or off-board destinations are skipped.
pub fn generate_stepping_moves(board: &Board, piece: &Piece, offsets: &[Coordinate]) -> MoveSet {
    let origin = piece.position;
    offsets
        .iter()
        .map(|&offset| origin.step(offset))
        .filter(|&target| board.on_board(target))
        .filter_map(|target| match board.get(target) {
            None => Some(Move::new(origin, target).with_needed_empty_locations(Some(target))),
            Some(occupant) if occupant.is_enemy_of(piece.color) => Some(Move::capture(origin, target)),
            Some(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::board::piece::PieceKind;
    use crate::{chess_position, coord};

    #[test]
    fn test_knight_in_corner() {
        let board = Board::default();
        let knight = Piece::new(PieceKind::Knight, Color::White, coord!(A1));
        let moves = generate_knight_moves(&board, &knight);
        assert_eq!(2, moves.len());
        assert!(moves.contains_target(coord!(B3)));
        assert!(moves.contains_target(coord!(C2)));
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let board = Board::starting_position();
        let knight = *board.get(coord!(G1)).unwrap();
        let moves = generate_knight_moves(&board, &knight);
        assert_eq!(2, moves.len());
        assert!(moves.contains_endpoints(coord!(G1), coord!(F3)));
        assert!(moves.contains_endpoints(coord!(G1), coord!(H3)));
    }

    #[test]
    fn test_king_captures_and_skips_friends() {
        let board = chess_position! {
            ........
            ........
            ........
            ...rP...
            ...K....
            ........
            ........
            ........
        };
        let king = *board.get(coord!(D4)).unwrap();
        let moves = generate_king_moves(&board, &king);
        assert_eq!(7, moves.len());
        assert!(moves.contains_attacked(coord!(D5)));
        assert!(!moves.contains_target(coord!(E5)));
    }

    #[test]
    fn test_king_may_step_onto_covered_squares() {
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
        let king = *board.get(coord!(E1)).unwrap();
        let moves = generate_king_moves(&board, &king);
        assert!(moves.contains_target(coord!(E2)));
        assert_eq!(5, moves.len());
    }

    #[test]
    fn test_quiet_step_needs_destination_empty() {
        let board = Board::default();
        let king = Piece::new(PieceKind::King, Color::Black, coord!(E8));
        let moves = generate_king_moves(&board, &king);
        let step = moves.find(coord!(E8), coord!(E7)).unwrap();
        assert_eq!(&[coord!(E7)], step.needed_empty_locations());
        assert!(!step.is_capture());
    }
}
