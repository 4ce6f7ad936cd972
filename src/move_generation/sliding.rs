use crate::board::coordinate::{Coordinate, DIAGONAL_DIRECTIONS, DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::board::piece::Piece;
use crate::board::Board;
use crate::chess_move::chess_move::Move;
use crate::chess_move::move_set::MoveSet;

pub fn generate_bishop_moves(board: &Board, piece: &Piece) -> MoveSet {
    generate_sliding_moves(board, piece, DIAGONAL_DIRECTIONS)
}

pub fn generate_rook_moves(board: &Board, piece: &Piece) -> MoveSet {
    generate_sliding_moves(board, piece, ORTHOGONAL_DIRECTIONS)
}

pub fn generate_queen_moves(board: &Board, piece: &Piece) -> MoveSet {
    generate_sliding_moves(board, piece, &DIRECTIONS)
}

/// Walks each direction until the edge or the first occupied square. Quiet
/// moves need every square up to and including the destination empty; a
/// capture needs only the squares before the victim.
pub fn generate_sliding_moves(board: &Board, piece: &Piece, directions: &[Coordinate]) -> MoveSet {
    let mut moves = MoveSet::new();
    let origin = piece.position;

    for &direction in directions {
        let mut traversed: Vec<Coordinate> = Vec::new();
        let mut square = origin.step(direction);

        while board.on_board(square) {
            if let Some(occupant) = board.get(square) {
                if occupant.is_enemy_of(piece.color) {
                    moves.push(
                        Move::capture(origin, square)
                            .with_needed_empty_locations(traversed.iter().copied()),
                    );
                }
                break;
            }

            traversed.push(square);
            moves.push(Move::new(origin, square).with_needed_empty_locations(traversed.iter().copied()));
            square = square.step(direction);
        }
    }

    moves
}
