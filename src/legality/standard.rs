use log::debug;

use crate::board::coordinate::Coordinate;
use crate::board::piece::{Piece, PieceKind};
use crate::board::Board;
use crate::chess_move::castle::castle_moves;
use crate::chess_move::chess_move::Move;
use crate::chess_move::move_set::MoveSet;
use crate::move_generation::generate_pseudo_moves;

use super::MoveFilter;

/// The rules of chess: no move may leave the mover's own king attacked. The
/// king additionally gains any available castle.
///
/// A color without a king on the board is unconstrained.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl MoveFilter for StandardRules {
    fn filter_moves(&self, board: &Board, piece: &Piece, mut moves: MoveSet) -> MoveSet {
        if piece.kind == PieceKind::King {
            retain_safe_king_moves(board, piece, &mut moves);
            moves.extend(castle_moves(board, piece));
            return moves;
        }

        let king = match board.king(piece.color) {
            Some(king) => king.position,
            None => return moves,
        };

        let attackers = board.attackers_of(king, piece.color);
        if !attackers.is_empty() {
            retain_check_resolutions(board, king, &attackers, &mut moves);
        }
        retain_moves_keeping_king_safe(board, piece, king, &mut moves);
        moves
    }
}

fn retain_safe_king_moves(board: &Board, king: &Piece, moves: &mut MoveSet) {
    let before = moves.len();
    moves.retain(|m| !board.simulate(m).is_attacked(m.end(), king.color));
    log_dropped(king, before, moves.len(), "would be attacked");
}

/// While in check, a move must deal with every checking piece: capture it or
/// interpose on its line. With two checkers no single move can, so only the
/// king is left to move.
fn retain_check_resolutions(board: &Board, king: Coordinate, attackers: &[Piece], moves: &mut MoveSet) {
    let checks: Vec<(Coordinate, Option<Move>)> = attackers
        .iter()
        .map(|attacker| {
            let checking_move = generate_pseudo_moves(board, attacker)
                .attacking_move(king)
                .cloned();
            (attacker.position, checking_move)
        })
        .collect();

    let before = moves.len();
    moves.retain(|m| {
        checks.iter().all(|(attacker, checking_move)| {
            m.attacks(*attacker) || checking_move.as_ref().map_or(false, |check| m.blocks(check))
        })
    });
    if let Some((attacker, _)) = checks.first() {
        debug!(
            "{} check(s) on {}, first from {}: {} of {} moves resolve it",
            checks.len(),
            king,
            attacker,
            moves.len(),
            before
        );
    }
}

/// Drops moves that would expose the king, e.g. moving a pinned piece off
/// its pin line.
fn retain_moves_keeping_king_safe(board: &Board, piece: &Piece, king: Coordinate, moves: &mut MoveSet) {
    let before = moves.len();
    moves.retain(|m| !board.simulate(m).is_attacked(king, piece.color));
    log_dropped(piece, before, moves.len(), "would expose the king");
}

fn log_dropped(piece: &Piece, before: usize, after: usize, reason: &str) {
    if after < before {
        debug!("dropped {} move(s) of {}: {}", before - after, piece, reason);
    }
}
