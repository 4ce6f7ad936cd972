//! PvP command - play a game against another human.

use chess_rules::game::input_source::HumanInput;
use chess_rules::game::renderer::SimpleRenderer;
use structopt::StructOpt;

use super::util::run_game_loop;
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {}

impl Command for PvpArgs {
    fn execute(self) {
        run_game_loop(HumanInput, SimpleRenderer, None);
    }
}
