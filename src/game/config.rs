use crate::board::color::Color;
use crate::board::Board;

/// How a new game starts.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub starting_position: Board,
    pub first_turn: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_position: Board::starting_position(),
            first_turn: Color::White,
        }
    }
}
