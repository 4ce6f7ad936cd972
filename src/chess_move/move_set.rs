use std::iter::FromIterator;
use std::slice::Iter;

use crate::board::coordinate::Coordinate;

use super::chess_move::Move;

/// Moves in insertion order. Distinct `(start, end)` pairs are a convention
/// of the generators, not enforced here.
#[derive(Default, Clone, PartialEq, Debug)]
pub struct MoveSet {
    moves: Vec<Move>,
}

impl MoveSet {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn push(&mut self, chess_move: Move) {
        self.moves.push(chess_move);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> Iter<Move> {
        self.moves.iter()
    }

    pub fn append(&mut self, other: &mut MoveSet) {
        self.moves.append(&mut other.moves);
    }

    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(predicate);
    }

    pub fn contains(&self, chess_move: &Move) -> bool {
        self.moves.contains(chess_move)
    }

    pub fn find(&self, start: Coordinate, end: Coordinate) -> Option<&Move> {
        self.moves
            .iter()
            .find(|m| m.start() == start && m.end() == end)
    }

    pub fn contains_endpoints(&self, start: Coordinate, end: Coordinate) -> bool {
        self.find(start, end).is_some()
    }

    pub fn contains_target(&self, end: Coordinate) -> bool {
        self.moves.iter().any(|m| m.end() == end)
    }

    pub fn contains_attacked(&self, location: Coordinate) -> bool {
        self.attacking_move(location).is_some()
    }

    /// First move whose capture set includes `location`.
    pub fn attacking_move(&self, location: Coordinate) -> Option<&Move> {
        self.moves.iter().find(|m| m.attacks(location))
    }

    pub fn targets(&self) -> Vec<Coordinate> {
        self.moves.iter().map(|m| m.end()).collect()
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Extend<Move> for MoveSet {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

#[macro_export]
macro_rules! move_set {
    ( $( $t:expr ),* $(,)? ) => {
        {
            let mut collection = $crate::chess_move::move_set::MoveSet::new();
            $(
                collection.push($t);
            )*
            collection
        }
    };
}
