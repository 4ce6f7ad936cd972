//! Watch command - watch random self play.

use std::time::Duration;

use chess_rules::game::input_source::RandomInput;
use chess_rules::game::renderer::WatchRenderer;
use structopt::StructOpt;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long = "max-moves", help = "Stop after this many moves")]
    pub max_moves: Option<usize>,
    #[structopt(long, help = "Seed for the move picker; random when omitted")]
    pub seed: Option<u64>,
    #[structopt(
        long = "delay-ms",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let input = match self.seed {
            Some(seed) => RandomInput::seeded(seed),
            None => RandomInput::new(),
        };
        let renderer = WatchRenderer {
            delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
        };
        run_game_loop(input, renderer, self.max_moves);
    }
}
