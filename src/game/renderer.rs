use std::time::Duration;

use super::display::GameDisplay;
use super::game::Game;

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, game: &Game);
    fn frame_delay(&self) -> Option<Duration>;
}

/// Draws the board and prompts for the next move.
pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, ui: &mut GameDisplay, game: &Game) {
        print!("{}", ui.render_game(game));
        println!("Enter your move:");
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

pub struct WatchRenderer {
    /// Random self play is instant, so a short pause makes it watchable.
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for WatchRenderer {
    fn render(&self, ui: &mut GameDisplay, game: &Game) {
        print!("{}", ui.render_game(game));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}
