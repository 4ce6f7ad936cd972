use std::time::{Duration, Instant};

use crate::board::color::Color;
use crate::board::Board;
use crate::legality::{MoveFilter, StandardRules};

/// Number of legal move paths of length `depth` from `board` with `turn` to
/// move. Each step runs on a simulated copy, so `board` is left untouched.
pub fn count_positions(board: &Board, filter: &dyn MoveFilter, turn: Color, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }
    board
        .legal_moves_for_color(turn, filter)
        .iter()
        .map(|chess_move| {
            let next = board.simulate(chess_move);
            count_positions(&next, filter, turn.opposite(), depth - 1)
        })
        .sum()
}

pub fn run_count_positions(depth: u8) {
    let board = Board::starting_position();

    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for depth in 1..=depth {
        let started = Instant::now();
        let count = count_positions(&board, &StandardRules, Color::White, depth);
        let duration = started.elapsed();
        let positions_per_second = count as f64 / duration.as_secs_f64();

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, positions per second: {}",
            depth, count, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
}
