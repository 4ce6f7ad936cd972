use log::debug;

use crate::board::coordinate::Coordinate;
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;

use super::chess_move::Move;
use super::move_set::MoveSet;

/// Ways the king can castle right now. Each castle moves the king two squares
/// toward an unmoved rook at the board edge and chains the rook's hop to the
/// square the king passed over.
pub fn castle_moves(board: &Board, king: &Piece) -> MoveSet {
    let mut moves = MoveSet::new();
    if king.kind != PieceKind::King || king.has_moved {
        return moves;
    }
    for &side in [1, -1].iter() {
        if let Some(castle) = castle_toward(board, king, side) {
            moves.push(castle);
        }
    }
    moves
}

/// The unmoved rook of the king's color sitting at the board edge on `side`,
/// with the empty squares between them. At least two squares must separate
/// the pair.
fn castling_partner<'a>(
    board: &'a Board,
    king: &Piece,
    side: i32,
) -> Option<(&'a Piece, Vec<Coordinate>)> {
    let mut between: Vec<Coordinate> = Vec::new();
    let mut square = king.position.shift(side, 0);
    while board.on_board(square) && !board.is_occupied(square) {
        between.push(square);
        square = square.shift(side, 0);
    }

    let rook = board.get(square)?;
    let rook_at_edge = !board.on_board(square.shift(side, 0));
    if rook.kind != PieceKind::Rook
        || rook.color != king.color
        || rook.has_moved
        || !rook_at_edge
        || between.len() < 2
    {
        return None;
    }
    Some((rook, between))
}

fn castle_toward(board: &Board, king: &Piece, side: i32) -> Option<Move> {
    let origin = king.position;
    let (rook, between) = castling_partner(board, king, side)?;

    let passed = origin.shift(side, 0);
    let landing = origin.shift(2 * side, 0);
    if let Some(&covered) = [origin, passed, landing]
        .iter()
        .find(|&&s| board.is_attacked(s, king.color))
    {
        debug!("{} cannot castle toward {}: {} is attacked", king, rook, covered);
        return None;
    }

    let rook_hop = Move::new(rook.position, passed).chained();
    Some(
        Move::new(origin, landing)
            .with_needed_empty_locations(between)
            .with_subsequent_move(rook_hop),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::Color;
    use crate::legality::StandardRules;
    use crate::{chess_position, coord, std_move};

    fn kingside() -> Move {
        std_move!(E1, G1).with_subsequent_move(std_move!(H1, F1).chained())
    }

    fn queenside() -> Move {
        std_move!(E1, C1).with_subsequent_move(std_move!(A1, D1).chained())
    }

    #[test]
    fn test_castles_both_ways_with_clear_paths() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            R...K..R
        };
        let king = *board.get(coord!(E1)).unwrap();
        let moves = castle_moves(&board, &king);
        assert_eq!(2, moves.len());
        assert!(moves.contains(&kingside()));
        assert!(moves.contains(&queenside()));
    }

    #[test]
    fn test_no_castle_through_pieces() {
        let board = Board::starting_position();
        let king = *board.get(coord!(E1)).unwrap();
        assert!(castle_moves(&board, &king).is_empty());
    }

    #[test]
    fn test_no_castle_through_attacked_square() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            .....r..
            R...K..R
        };
        let king = *board.get(coord!(E1)).unwrap();
        let moves = castle_moves(&board, &king);
        // the f2 rook covers f1 and e2 but not the queenside path
        assert!(!moves.contains(&kingside()));
        assert!(moves.contains(&queenside()));
    }

    #[test]
    fn test_no_castle_out_of_check() {
        let board = chess_position! {
            ....k...
            ....r...
            ........
            ........
            ........
            ........
            ........
            R...K..R
        };
        let king = *board.get(coord!(E1)).unwrap();
        assert!(castle_moves(&board, &king).is_empty());
    }

    #[test]
    fn test_queenside_allows_attacked_rook_path() {
        let board = chess_position! {
            .r..k...
            ........
            ........
            ........
            ........
            ........
            ........
            R...K...
        };
        let king = *board.get(coord!(E1)).unwrap();
        assert!(castle_moves(&board, &king).contains(&queenside()));
    }

    #[test]
    fn test_moving_king_or_rook_disables_castling() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            R...K..R
        };
        assert!(board.execute_move(&std_move!(H1, H2), &StandardRules));
        assert!(board.execute_move(&std_move!(H2, H1), &StandardRules));
        let king = *board.get(coord!(E1)).unwrap();
        let moves = castle_moves(&board, &king);
        assert!(!moves.contains(&kingside()));
        assert!(moves.contains(&queenside()));

        assert!(board.execute_move(&std_move!(E1, E2), &StandardRules));
        assert!(board.execute_move(&std_move!(E2, E1), &StandardRules));
        let king = *board.get(coord!(E1)).unwrap();
        assert!(castle_moves(&board, &king).is_empty());
    }

    #[test]
    fn test_rook_must_be_at_the_edge() {
        let board = Board::from_diagram(
            10,
            3,
            "
            ....k.....
            ..........
            .R..K...R.
            ",
        )
        .unwrap();
        let king = *board.get(coord!(E1)).unwrap();
        assert!(!board.is_attacked(coord!(E1), Color::White));
        assert!(castling_partner(&board, &king, 1).is_none());
        assert!(castling_partner(&board, &king, -1).is_none());
        assert!(castle_moves(&board, &king).is_empty());
    }

    #[test]
    fn test_rook_must_be_own_color() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            r...K..R
        };
        let king = *board.get(coord!(E1)).unwrap();
        assert!(castling_partner(&board, &king, -1).is_none());
        let (rook, between) = castling_partner(&board, &king, 1).unwrap();
        assert_eq!(coord!(H1), rook.position);
        assert_eq!(vec![coord!(F1), coord!(G1)], between);
        // the a1 rook also checks the king, which rules out the kingside castle
        assert!(castle_moves(&board, &king).is_empty());
    }

    #[test]
    fn test_executing_castle_relocates_both_pieces() {
        let mut board = chess_position! {
            r...k..r
            ........
            ........
            ........
            ........
            ........
            ........
            R...K..R
        };
        let castle = std_move!(E8, C8).with_subsequent_move(std_move!(A8, D8).chained());
        assert!(board.legal_moves(coord!(E8), &StandardRules).unwrap().contains(&castle));
        assert!(board.execute_move(&castle, &StandardRules));

        let king = board.get(coord!(C8)).unwrap();
        assert_eq!(PieceKind::King, king.kind);
        assert_eq!(Color::Black, king.color);
        assert_eq!(Some(PieceKind::Rook), board.get(coord!(D8)).map(|p| p.kind));
        assert!(board.get(coord!(D8)).unwrap().has_moved);
        assert!(!board.is_occupied(coord!(A8)));
        assert!(!board.is_occupied(coord!(E8)));
        assert_eq!(6, board.pieces().len());
    }
}
