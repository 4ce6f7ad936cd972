use crate::board::coordinate::Coordinate;
use crate::board::Board;
use crate::chess_move::chess_move::Move;
use crate::chess_move::move_set::MoveSet;
use crate::evaluate::GameState;

/// Hooks for whoever presents the game. Every method has a no-op default, so
/// an observer implements only what it draws or records.
pub trait GameObserver {
    /// Asked before a square is selected. Returning `false` vetoes the
    /// selection before any rule is consulted.
    fn selecting(&mut self, _board: &Board, _at: Coordinate) -> bool {
        true
    }

    /// A piece was selected and these are its legal moves.
    fn selected(&mut self, _board: &Board, _at: Coordinate, _moves: &MoveSet) {}

    /// A move completed; `board` already reflects it.
    fn piece_moved(&mut self, _board: &Board, _chess_move: &Move) {}

    fn state_changed(&mut self, _state: GameState) {}
}
