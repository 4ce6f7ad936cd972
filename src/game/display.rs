use std::fmt::Write;

use crate::board::color::Color;
use crate::board::coordinate::Coordinate;
use crate::evaluate::GameState;

use super::game::Game;

/// Renders a game as text into a reusable buffer. The selected square is
/// bracketed and the selected piece's targets are starred.
pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn render_game(&mut self, game: &Game) -> &str {
        self.clear();
        let board = game.board();
        let targets = game.selected_moves().targets();
        let files: String = (0..board.width())
            .map(|x| format!(" {} ", file_label(x)))
            .collect();

        let _ = writeln!(self.buffer, "    {}", files);
        for y in (0..board.height()).rev() {
            let _ = write!(self.buffer, "{:>3} ", y + 1);
            for x in 0..board.width() {
                let square = Coordinate::new(x, y);
                let piece = board.get(square).map_or('.', |p| p.to_char());
                let cell = if game.selected() == Some(square) {
                    format!("[{}]", piece)
                } else if targets.contains(&square) {
                    format!("*{} ", piece)
                } else {
                    format!(" {} ", piece)
                };
                self.buffer.push_str(&cell);
            }
            let _ = writeln!(self.buffer, " {}", y + 1);
        }
        let _ = writeln!(self.buffer, "    {}\n", files);

        let _ = writeln!(self.buffer, "{}", turn_label(game.turn()));
        if let Some(label) = state_label(game.state()) {
            let _ = writeln!(self.buffer, "{}", label);
        }
        if let Some(last) = game.last_move() {
            let _ = writeln!(self.buffer, "Last move: {}", last);
        }

        &self.buffer
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

fn file_label(x: i32) -> char {
    if (0..26).contains(&x) {
        (b'a' + x as u8) as char
    } else {
        '?'
    }
}

pub fn turn_label(turn: Color) -> String {
    format!("{}'s Turn", turn)
}

/// Text shown beside the turn label, `None` while nothing is happening.
pub fn state_label(state: GameState) -> Option<String> {
    match state {
        GameState::Normal => None,
        other => Some(other.to_string()),
    }
}
