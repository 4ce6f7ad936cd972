use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::input_handler::{read_move_input, InputError, MoveInput};

use super::game::Game;

pub trait InputSource {
    /// The next action for the side to move. `Ok(None)` means the input was
    /// not understood and the caller should ask again.
    fn next_move(&mut self, game: &Game) -> Result<Option<MoveInput>, InputError>;
}

/// Reads moves typed on stdin.
pub struct HumanInput;

impl InputSource for HumanInput {
    fn next_move(&mut self, _game: &Game) -> Result<Option<MoveInput>, InputError> {
        match read_move_input() {
            Ok(move_input) => Ok(Some(move_input)),
            Err(InputError::InvalidInput { .. }) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

/// Picks uniformly among the legal moves of the side to move. This is self
/// play for watching and smoke testing, not a search.
pub struct RandomInput {
    rng: StdRng,
}

impl RandomInput {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for RandomInput {
    fn next_move(&mut self, game: &Game) -> Result<Option<MoveInput>, InputError> {
        let moves = game.legal_moves_for_turn();
        if moves.is_empty() {
            return Ok(Some(MoveInput::Exit));
        }
        let index = self.rng.gen_range(0..moves.len());
        Ok(moves.iter().nth(index).map(|chess_move| MoveInput::Coordinates {
            from: chess_move.start(),
            to: chess_move.end(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_input_picks_legal_moves() {
        let game = Game::new();
        let mut input = RandomInput::seeded(7);
        for _ in 0..10 {
            match input.next_move(&game).unwrap() {
                Some(MoveInput::Coordinates { from, to }) => {
                    assert!(game.legal_moves_for_turn().contains_endpoints(from, to));
                }
                other => panic!("unexpected input {:?}", other),
            }
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let game = Game::new();
        let mut a = RandomInput::seeded(42);
        let mut b = RandomInput::seeded(42);
        for _ in 0..5 {
            assert_eq!(a.next_move(&game).unwrap(), b.next_move(&game).unwrap());
        }
    }
}
