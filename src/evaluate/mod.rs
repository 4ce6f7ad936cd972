use core::fmt;

use crate::board::color::Color;
use crate::board::Board;
use crate::legality::MoveFilter;

/// Where the game stands for the side about to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Normal,
    Check { checked: Color },
    Checkmate { winner: Color },
    Stalemate,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        matches!(self, GameState::Checkmate { .. } | GameState::Stalemate)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::Normal
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Normal => write!(f, "Normal"),
            GameState::Check { checked } => write!(f, "{} Checked", checked),
            GameState::Checkmate { winner } => write!(f, "{} Checkmate!", winner),
            GameState::Stalemate => write!(f, "Stalemate"),
        }
    }
}

pub fn player_is_in_check(board: &Board, player: Color) -> bool {
    board
        .king(player)
        .map_or(false, |king| board.is_attacked(king.position, player))
}

/// True as soon as one piece of `player` has a move the filter allows.
pub fn has_legal_move(board: &Board, filter: &dyn MoveFilter, player: Color) -> bool {
    board
        .pieces_of(player)
        .any(|piece| !board.legal_moves_for(piece, filter).is_empty())
}

/// Evaluates the position for `to_move`, the side whose turn it now is.
pub fn game_state(board: &Board, filter: &dyn MoveFilter, to_move: Color) -> GameState {
    let check = player_is_in_check(board, to_move);
    let can_move = has_legal_move(board, filter, to_move);

    match (check, can_move) {
        (true, true) => GameState::Check { checked: to_move },
        (true, false) => GameState::Checkmate {
            winner: to_move.opposite(),
        },
        (false, false) => GameState::Stalemate,
        (false, true) => GameState::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legality::{PseudoLegal, StandardRules};
    use crate::{chess_position, std_move};

    #[test]
    fn test_starting_position_is_normal() {
        let board = Board::starting_position();
        assert_eq!(GameState::Normal, game_state(&board, &StandardRules, Color::White));
        assert_eq!(GameState::Normal, game_state(&board, &StandardRules, Color::Black));
    }

    #[test]
    fn test_fools_mate() {
        let mut board = Board::starting_position();
        for chess_move in [
            std_move!(F2, F3),
            std_move!(E7, E5),
            std_move!(G2, G4),
            std_move!(D8, H4),
        ]
        .iter()
        {
            assert!(board.execute_move(chess_move, &StandardRules));
        }
        let state = game_state(&board, &StandardRules, Color::White);
        assert_eq!(GameState::Checkmate { winner: Color::Black }, state);
        assert!(state.is_over());
        assert_eq!("Black Checkmate!", state.to_string());
    }

    #[test]
    fn test_check_with_escape() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ....r...
            ........
            ........
            ....K...
        };
        let state = game_state(&board, &StandardRules, Color::White);
        assert_eq!(GameState::Check { checked: Color::White }, state);
        assert!(!state.is_over());
        assert_eq!("White Checked", state.to_string());
    }

    #[test]
    fn test_stalemate() {
        let board = chess_position! {
            k.......
            ........
            .Q......
            ........
            ........
            ........
            ........
            .......K
        };
        assert_eq!(GameState::Stalemate, game_state(&board, &StandardRules, Color::Black));
        assert_eq!(GameState::Normal, game_state(&board, &StandardRules, Color::White));
    }

    #[test]
    fn test_back_rank_mate() {
        let board = chess_position! {
            R.....k.
            .....ppp
            ........
            ........
            ........
            ........
            ........
            ......K.
        };
        assert_eq!(
            GameState::Checkmate { winner: Color::White },
            game_state(&board, &StandardRules, Color::Black)
        );
    }

    #[test]
    fn test_filter_decides_whether_moves_exist() {
        let board = chess_position! {
            k.......
            ........
            .Q......
            ........
            ........
            ........
            ........
            .......K
        };
        // with no policy the cornered king may walk into the queen's lines
        assert_eq!(GameState::Normal, game_state(&board, &PseudoLegal, Color::Black));
    }
}
