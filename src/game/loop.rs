use log::info;

use crate::evaluate::GameState;
use crate::input_handler::{InputError, MoveInput};

use super::display::GameDisplay;
use super::game::Game;
use super::input_source::InputSource;
use super::renderer::GameRenderer;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    game: Game,
    ui: GameDisplay,
    input: I,
    renderer: R,
    max_moves: Option<usize>,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(game: Game, input: I, renderer: R) -> Self {
        Self {
            game,
            ui: GameDisplay::new(),
            input,
            renderer,
            max_moves: None,
        }
    }

    /// Stops the loop after this many moves even if the game is undecided.
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = Some(max_moves);
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until the game is decided, the move limit is hit or the input
    /// asks to exit. Returns the final state.
    pub fn run(&mut self) -> GameState {
        loop {
            if self.game.state().is_over() {
                self.renderer.render(&mut self.ui, &self.game);
                break;
            }
            if let Some(max) = self.max_moves {
                if self.game.history().len() >= max {
                    info!("stopping after {} moves", max);
                    break;
                }
            }

            self.renderer.render(&mut self.ui, &self.game);

            match self.input.next_move(&self.game) {
                Ok(Some(MoveInput::Coordinates { from, to })) => {
                    match self.game.move_piece(from, to) {
                        Ok(_) => {
                            if let Some(delay) = self.renderer.frame_delay() {
                                std::thread::sleep(delay);
                            }
                        }
                        Err(error) => println!("error: {}", error),
                    }
                }
                Ok(Some(MoveInput::Select(at))) => {
                    println!("{}: {:?}", at, self.game.select(at));
                }
                Ok(Some(MoveInput::Exit)) | Err(InputError::UserExit) => break,
                Ok(None) => println!("Invalid input"),
                Err(error) => {
                    println!("error: {}", error);
                    break;
                }
            }
        }

        self.game.state()
    }
}
