pub mod castle;
pub mod chess_move;
pub mod move_set;
pub mod pawn_promotion;

pub use chess_move::Move;
pub use move_set::MoveSet;
