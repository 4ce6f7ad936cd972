use core::fmt;

use smallvec::SmallVec;

use crate::board::coordinate::Coordinate;

/// Inline storage for the handful of squares a move touches. Long slides on
/// oversized boards spill to the heap.
pub type Squares = SmallVec<[Coordinate; 8]>;

/// A relocation of one piece together with its side effects.
///
/// `attacked_locations` are the squares whose occupants are removed when the
/// move executes; `needed_empty_locations` are the squares that must be vacant
/// for the move to be available at all. Compound actions such as castling
/// chain the secondary relocation through `subsequent_moves`, which execute
/// atomically with the parent and skip the legality recheck.
#[derive(Clone)]
pub struct Move {
    start: Coordinate,
    end: Coordinate,
    attacked_locations: Squares,
    needed_empty_locations: Squares,
    subsequent_moves: Vec<Move>,
    ignore_legality_recheck: bool,
}

impl Move {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self {
            start,
            end,
            attacked_locations: Squares::new(),
            needed_empty_locations: Squares::new(),
            subsequent_moves: Vec::new(),
            ignore_legality_recheck: false,
        }
    }

    /// A move that removes whatever stands on its destination.
    pub fn capture(start: Coordinate, end: Coordinate) -> Self {
        Self::new(start, end).with_attacked_location(end)
    }

    pub fn with_attacked_location(mut self, location: Coordinate) -> Self {
        self.add_attacked_location(location);
        self
    }

    pub fn with_needed_empty_locations<I>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        for location in locations {
            self.add_needed_empty_location(location);
        }
        self
    }

    pub fn with_subsequent_move(mut self, chess_move: Move) -> Self {
        self.add_subsequent_move(chess_move);
        self
    }

    pub fn chained(mut self) -> Self {
        self.ignore_legality_recheck = true;
        self
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    pub fn attacked_locations(&self) -> &[Coordinate] {
        &self.attacked_locations
    }

    pub fn needed_empty_locations(&self) -> &[Coordinate] {
        &self.needed_empty_locations
    }

    pub fn subsequent_moves(&self) -> &[Move] {
        &self.subsequent_moves
    }

    pub fn ignores_legality_recheck(&self) -> bool {
        self.ignore_legality_recheck
    }

    pub fn set_ignore_legality_recheck(&mut self, value: bool) {
        self.ignore_legality_recheck = value;
    }

    pub fn add_attacked_location(&mut self, location: Coordinate) {
        if !self.attacked_locations.contains(&location) {
            self.attacked_locations.push(location);
        }
    }

    pub fn add_needed_empty_location(&mut self, location: Coordinate) {
        if !self.needed_empty_locations.contains(&location) {
            self.needed_empty_locations.push(location);
        }
    }

    pub fn add_subsequent_move(&mut self, chess_move: Move) {
        self.subsequent_moves.push(chess_move);
    }

    pub fn is_capture(&self) -> bool {
        !self.attacked_locations.is_empty()
    }

    pub fn attacks(&self, location: Coordinate) -> bool {
        self.attacked_locations.contains(&location)
    }

    /// True if this move, or any move chained after it, lands on one of
    /// `locations`.
    pub fn ends_on(&self, locations: &[Coordinate]) -> bool {
        locations.contains(&self.end)
            || self
                .subsequent_moves
                .iter()
                .any(|subsequent| subsequent.ends_on(locations))
    }

    /// True if this move puts a piece on a square `attacking_move` needs
    /// empty, i.e. it interposes on the attack.
    pub fn blocks(&self, attacking_move: &Move) -> bool {
        self.ends_on(attacking_move.needed_empty_locations())
    }
}

fn same_members<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.iter().all(|item| b.contains(item)) && b.iter().all(|item| a.contains(item))
}

/// Structural equality over the endpoints and the attacked and chained sets.
/// Ordering, the empty-path bookkeeping, and the recheck flag do not take part.
impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.start == other.start
            && self.end == other.end
            && same_members(&self.attacked_locations, &other.attacked_locations)
            && same_members(&self.subsequent_moves, &other.subsequent_moves)
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.attacks(self.end) { "x" } else { "" };
        write!(f, "{}{}{}", self.start, separator, self.end)?;
        for attacked in self.attacked_locations.iter().filter(|&&c| c != self.end) {
            write!(f, " x{}", attacked)?;
        }
        for subsequent in self.subsequent_moves.iter() {
            write!(f, " + {}", subsequent)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Builds a plain relocation between two named squares.
#[macro_export]
macro_rules! std_move {
    ($from:ident, $to:ident) => {
        $crate::chess_move::chess_move::Move::new($crate::coord!($from), $crate::coord!($to))
    };
}

/// Builds a move capturing on its destination square.
#[macro_export]
macro_rules! capture_move {
    ($from:ident, $to:ident) => {
        $crate::chess_move::chess_move::Move::capture($crate::coord!($from), $crate::coord!($to))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    #[test]
    fn test_equality_ignores_needed_empty_and_flag() {
        let plain = std_move!(E2, E4);
        let annotated = std_move!(E2, E4)
            .with_needed_empty_locations(vec![coord!(E3), coord!(E4)])
            .chained();
        assert_eq!(plain, annotated);
    }

    #[test]
    fn test_equality_compares_attacked_as_set() {
        let a = std_move!(A1, A2)
            .with_attacked_location(coord!(A2))
            .with_attacked_location(coord!(B2));
        let b = std_move!(A1, A2)
            .with_attacked_location(coord!(B2))
            .with_attacked_location(coord!(A2));
        assert_eq!(a, b);
        assert_ne!(a, capture_move!(A1, A2));
    }

    #[test]
    fn test_equality_compares_subsequent_moves() {
        let castle = std_move!(E1, G1).with_subsequent_move(std_move!(H1, F1).chained());
        assert_eq!(castle.clone(), castle);
        assert_ne!(castle, std_move!(E1, G1));
    }

    #[test]
    fn test_blocks_uses_attacker_path() {
        let rook_check = capture_move!(A1, E1)
            .with_needed_empty_locations(vec![coord!(B1), coord!(C1), coord!(D1)]);
        assert!(std_move!(C3, C1).blocks(&rook_check));
        assert!(!std_move!(C3, C2).blocks(&rook_check));
    }

    #[test]
    fn test_ends_on_follows_chain() {
        let castle = std_move!(E1, G1).with_subsequent_move(std_move!(H1, F1).chained());
        assert!(castle.ends_on(&[coord!(F1)]));
        assert!(!castle.ends_on(&[coord!(H1)]));
    }

    #[test]
    fn test_display() {
        assert_eq!("e2e4", format!("{}", std_move!(E2, E4)));
        assert_eq!("d4xe5", format!("{}", capture_move!(D4, E5)));
        let castle = std_move!(E1, G1).with_subsequent_move(std_move!(H1, F1).chained());
        assert_eq!("e1g1 + h1f1", format!("{}", castle));
    }
}
