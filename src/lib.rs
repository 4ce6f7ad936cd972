pub mod board;
pub mod chess_move;
pub mod evaluate;
pub mod game;
pub mod input_handler;
pub mod legality;
pub mod move_generation;
pub mod prelude;
