//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    count_positions::CountPositionsArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "chess_rules",
    about = "A chess rules engine with a text front end ♛"
)]
pub enum Chess {
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. Enter moves as `e2e4`, or a single square to select a piece. Enter `q` to quit."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch a game where both sides pick uniformly random legal moves. Use `--seed` to replay a game, `--max-moves` to cut it short and `--delay-ms` (default: 500) to set the pace."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the number of legal move paths from the starting position for each depth up to `--depth` (default: 3), and report the time it took to do so."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Pvp(cmd),
            Watch(cmd),
            CountPositions(cmd),
        }
    }
}
