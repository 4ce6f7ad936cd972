use core::fmt;
use std::str::FromStr;

/// A square on the board, addressed by `x` (file, 0 = `a`) and `y` (rank, 0 = `1`).
///
/// Coordinates carry no board context, so they can point anywhere; whether a
/// coordinate is playable is decided by `Board::on_board`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

/// Unit steps indexed 0-7: four orthogonal followed by four diagonal.
pub const DIRECTIONS: [Coordinate; 8] = [
    Coordinate { x: 1, y: 0 },
    Coordinate { x: 0, y: 1 },
    Coordinate { x: -1, y: 0 },
    Coordinate { x: 0, y: -1 },
    Coordinate { x: 1, y: 1 },
    Coordinate { x: -1, y: 1 },
    Coordinate { x: -1, y: -1 },
    Coordinate { x: 1, y: -1 },
];

pub const ORTHOGONAL_DIRECTIONS: &[Coordinate] = &[
    DIRECTIONS[0],
    DIRECTIONS[1],
    DIRECTIONS[2],
    DIRECTIONS[3],
];

pub const DIAGONAL_DIRECTIONS: &[Coordinate] = &[
    DIRECTIONS[4],
    DIRECTIONS[5],
    DIRECTIONS[6],
    DIRECTIONS[7],
];

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub const fn step(self, direction: Coordinate) -> Self {
        self.shift(direction.x, direction.y)
    }

    /// Returns the unit direction for `index`, or `None` outside 0-7.
    pub fn direction(index: usize) -> Option<Coordinate> {
        DIRECTIONS.get(index).copied()
    }

    /// Parses squares like `e2`. Files run `a`..=`z`, ranks start at 1.
    pub fn from_algebraic(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        let file = chars.next()?.to_ascii_lowercase();
        if !file.is_ascii_lowercase() {
            return None;
        }
        let rank: i32 = chars.as_str().parse().ok()?;
        if rank < 1 {
            return None;
        }
        Some(Self::new(file as i32 - 'a' as i32, rank - 1))
    }

    pub fn to_algebraic(self) -> String {
        if (0..26).contains(&self.x) && self.y >= 0 {
            let file = (b'a' + self.x as u8) as char;
            format!("{}{}", file, self.y + 1)
        } else {
            format!("({}, {})", self.x, self.y)
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Coordinate {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(input).ok_or("invalid square; expected a file letter and a rank, e.g. e2")
    }
}

/// Builds a `Coordinate` from a square name, e.g. `coord!(E2)`. Intended for
/// fixtures; panics on a malformed name.
#[macro_export]
macro_rules! coord {
    ($square:ident) => {
        $crate::board::coordinate::Coordinate::from_algebraic(stringify!($square))
            .expect("square name should be a file letter followed by a rank")
    };
}
