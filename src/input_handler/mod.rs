//! Move input parsing and validation.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::coordinate::Coordinate;

const SQUARE: &str = "[a-z][1-9][0-9]*";

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^({})\s*[-x]?\s*({})$", SQUARE, SQUARE))
        .expect("COORD_RE regex should be valid")
});
static SELECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^({})$", SQUARE)).expect("SELECT_RE regex should be valid"));

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

#[derive(Debug, PartialEq)]
pub enum MoveInput {
    /// Move the piece on `from` to `to`, e.g. `e2e4` or `e2-e4`.
    Coordinates { from: Coordinate, to: Coordinate },
    /// Click a single square, e.g. `e2`.
    Select(Coordinate),
    Exit,
}

fn parse_square(input: &str) -> Result<Coordinate, InputError> {
    Coordinate::from_algebraic(input).ok_or_else(|| InputError::InvalidInput {
        input: input.to_string(),
    })
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_lowercase();

        if matches!(normalized.as_str(), "q" | "quit" | "exit") {
            return Ok(MoveInput::Exit);
        }

        if let Some(caps) = COORD_RE.captures(&normalized) {
            return Ok(MoveInput::Coordinates {
                from: parse_square(&caps[1])?,
                to: parse_square(&caps[2])?,
            });
        }

        if let Some(caps) = SELECT_RE.captures(&normalized) {
            return Ok(MoveInput::Select(parse_square(&caps[1])?));
        }

        Err(InputError::InvalidInput {
            input: input.to_string(),
        })
    }
}

/// Reads one line from stdin and parses it. End of input counts as a request
/// to exit.
pub fn read_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;
    if read == 0 {
        return Err(InputError::UserExit);
    }
    input.parse()
}
