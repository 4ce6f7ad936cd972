pub mod config;
pub mod display;
mod game;
pub mod input_source;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
pub mod observer;
pub mod position_counter;
pub mod renderer;

pub use game::{Game, GameError, Selection};
