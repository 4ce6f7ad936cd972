//! Attack detection by reverse probing.
//!
//! To find who attacks a square, a hypothetical piece of every kind is placed
//! on it, wearing the defender's color, and its pseudo-moves are generated
//! against the real board. Any capture that lands on a real enemy piece of the
//! same kind is an attacker: for every piece except the pawn the attack
//! relation is symmetric, and for the pawn the defender's color makes the probe
//! look in the defender's forward direction, which is where enemy pawns
//! capture from.

use super::color::Color;
use super::coordinate::Coordinate;
use super::piece::{Piece, PieceKind, ALL_PIECE_KINDS};
use super::Board;
use crate::move_generation::generate_pseudo_moves;

impl Board {
    /// True if any piece of `defender`'s opponent attacks `location`.
    pub fn is_attacked(&self, location: Coordinate, defender: Color) -> bool {
        self.on_board(location)
            && ALL_PIECE_KINDS
                .iter()
                .any(|&kind| !self.probe(location, defender, kind).is_empty())
    }

    /// Every opposing piece that attacks `location`, grouped by kind in the
    /// order of `ALL_PIECE_KINDS`. Empty for off-board squares.
    pub fn attackers_of(&self, location: Coordinate, defender: Color) -> Vec<Piece> {
        if !self.on_board(location) {
            return Vec::new();
        }
        ALL_PIECE_KINDS
            .iter()
            .flat_map(|&kind| self.probe(location, defender, kind))
            .collect()
    }

    pub fn attackers_of_piece(&self, piece: &Piece) -> Vec<Piece> {
        self.attackers_of(piece.position, piece.color)
    }

    fn probe(&self, location: Coordinate, defender: Color, kind: PieceKind) -> Vec<Piece> {
        let hypothetical = Piece::new(kind, defender, location).moved();
        let mut attackers: Vec<Piece> = Vec::new();
        for chess_move in generate_pseudo_moves(self, &hypothetical).iter() {
            for piece in self.pieces_at(chess_move.attacked_locations()) {
                if piece.kind == kind
                    && piece.is_enemy_of(defender)
                    && !attackers.iter().any(|a| a.position == piece.position)
                {
                    attackers.push(*piece);
                }
            }
        }
        attackers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chess_position, coord};

    #[test]
    fn test_starting_position_attacks() {
        let board = Board::starting_position();
        // e3 is covered by White's d2 and f2 pawns
        let attackers = board.attackers_of(coord!(E3), Color::Black);
        assert_eq!(2, attackers.len());
        assert!(attackers.iter().all(|p| p.kind == PieceKind::Pawn));
        // f3 is covered by two pawns and the g1 knight
        assert_eq!(3, board.attackers_of(coord!(F3), Color::Black).len());
        assert!(!board.is_attacked(coord!(E4), Color::Black));
        assert!(board.is_attacked(coord!(E6), Color::White));
    }

    #[test]
    fn test_pawns_attack_forward_only() {
        let board = chess_position! {
            ........
            ........
            ........
            ...p....
            ........
            ...P....
            ........
            ........
        };
        assert!(board.is_attacked(coord!(C4), Color::White));
        assert!(board.is_attacked(coord!(E4), Color::White));
        assert!(!board.is_attacked(coord!(C6), Color::White));
        assert!(board.is_attacked(coord!(C4), Color::Black));
        assert!(!board.is_attacked(coord!(C2), Color::Black));
        // a pawn does not attack the square it can push to
        assert!(!board.is_attacked(coord!(D4), Color::White));
    }

    #[test]
    fn test_sliders_are_blocked() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ....P...
            ........
            ........
            ....r...
        };
        assert!(board.is_attacked(coord!(E3), Color::White));
        assert!(board.is_attacked(coord!(E4), Color::White));
        assert!(!board.is_attacked(coord!(E5), Color::White));
        assert!(board.is_attacked(coord!(A1), Color::White));
    }

    #[test]
    fn test_attackers_of_lists_every_attacker() {
        let board = chess_position! {
            ........
            ........
            ..n.....
            ........
            ...K..q.
            ........
            ........
            ........
        };
        let attackers = board.attackers_of(coord!(D4), Color::White);
        let mut kinds: Vec<PieceKind> = attackers.iter().map(|p| p.kind).collect();
        kinds.sort();
        assert_eq!(vec![PieceKind::Knight, PieceKind::Queen], kinds);
    }

    #[test]
    fn test_own_pieces_never_attack() {
        let board = chess_position! {
            ........
            ........
            ........
            ........
            ...K..Q.
            ........
            ........
            ........
        };
        assert!(board.attackers_of(coord!(D4), Color::White).is_empty());
    }

    #[test]
    fn test_off_board_is_never_attacked() {
        let board = Board::starting_position();
        assert!(!board.is_attacked(Coordinate::new(-1, 3), Color::White));
        assert!(board.attackers_of(Coordinate::new(8, 8), Color::Black).is_empty());
    }

    #[test]
    fn test_attackers_agree_with_pseudo_moves() {
        let board = chess_position! {
            r...k..r
            ppp..ppp
            ..n.bn..
            ...pp...
            .b.PP.q.
            ..N..N..
            PPP.BPPP
            R..QK..R
        };
        for x in 0..8 {
            for y in 0..8 {
                let square = Coordinate::new(x, y);
                for &defender in Color::ALL.iter() {
                    let mut expected: Vec<Coordinate> = board
                        .pieces_of(defender.opposite())
                        .filter(|p| {
                            crate::move_generation::generate_pseudo_moves(&board, p)
                                .contains_attacked(square)
                        })
                        .map(|p| p.position)
                        .collect();
                    let mut actual: Vec<Coordinate> = board
                        .attackers_of(square, defender)
                        .iter()
                        .map(|p| p.position)
                        .collect();
                    expected.sort();
                    actual.sort();
                    // only occupied squares of the defender's color carry captures
                    let occupied_by_defender =
                        board.get(square).map_or(false, |p| p.color == defender);
                    if occupied_by_defender {
                        assert_eq!(expected, actual, "attackers of {} vs {}", square, defender);
                    }
                }
            }
        }
    }
}
