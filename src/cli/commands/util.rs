//! Shared utilities for CLI commands.

use chess_rules::game::config::GameConfig;
use chess_rules::game::display::state_label;
use chess_rules::game::input_source::InputSource;
use chess_rules::game::r#loop::GameLoop;
use chess_rules::game::renderer::GameRenderer;
use chess_rules::game::Game;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, max_moves: Option<usize>)
where
    I: InputSource,
    R: GameRenderer,
{
    let game = Game::with_config(GameConfig::default());
    let mut game_loop = GameLoop::new(game, input_source, renderer);
    if let Some(max_moves) = max_moves {
        game_loop = game_loop.with_max_moves(max_moves);
    }
    let state = game_loop.run();
    if let Some(label) = state_label(state) {
        println!("{}", label);
    }
}
