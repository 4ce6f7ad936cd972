pub mod attack;
pub mod color;
pub mod coordinate;
pub mod error;
pub mod piece;

mod display;


use log::{debug, warn};

use color::Color;
use coordinate::Coordinate;
use error::BoardError;
use piece::{Piece, PieceKind};

use crate::chess_move::chess_move::Move;
use crate::chess_move::move_set::MoveSet;
use crate::chess_move::pawn_promotion;
use crate::legality::MoveFilter;
use crate::move_generation::generate_pseudo_moves;

pub const DEFAULT_WIDTH: i32 = 8;
pub const DEFAULT_HEIGHT: i32 = 8;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Owns every piece in play. The grid gives O(1) lookup by square; the roster
/// gives iteration over the whole set. Both are views of the same ownership:
/// a piece is in the roster iff the grid cell at its recorded position holds
/// its roster index.
///
/// Cloning a board is a full value copy, which is how every what-if question
/// (pins, castling paths, check resolution) is answered without touching the
/// authoritative board.
#[derive(Clone, PartialEq, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    grid: Vec<Option<usize>>,
    pieces: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            grid: vec![None; (DEFAULT_WIDTH * DEFAULT_HEIGHT) as usize],
            pieces: Vec::new(),
        }
    }
}

impl Board {
    /// Creates an empty board. Non-positive dimensions, and dimensions whose
    /// square count overflows, are rejected here so they cannot surface later
    /// as out-of-range grid access.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        let area = match width.checked_mul(height) {
            Some(area) if width > 0 && height > 0 => area as usize,
            _ => return Err(BoardError::InvalidDimensions { width, height }),
        };
        Ok(Self {
            width,
            height,
            grid: vec![None; area],
            pieces: Vec::new(),
        })
    }

    /// Number of squares on the board.
    pub fn area(&self) -> usize {
        self.grid.len()
    }

    /// The standard array: White on ranks 1-2, Black on ranks 7-8.
    pub fn starting_position() -> Self {
        let mut board = Self::default();
        for &color in Color::ALL.iter() {
            let (back, front) = match color {
                Color::White => (0, 1),
                Color::Black => (DEFAULT_HEIGHT - 1, DEFAULT_HEIGHT - 2),
            };
            for (x, &kind) in BACK_RANK.iter().enumerate() {
                let x = x as i32;
                board.place(Piece::new(kind, color, Coordinate::new(x, back)));
                board.place(Piece::new(PieceKind::Pawn, color, Coordinate::new(x, front)));
            }
        }
        board
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn on_board(&self, location: Coordinate) -> bool {
        location.x >= 0 && location.y >= 0 && location.x < self.width && location.y < self.height
    }

    fn cell(&self, location: Coordinate) -> Option<usize> {
        if self.on_board(location) {
            Some((location.y * self.width + location.x) as usize)
        } else {
            None
        }
    }

    fn roster_index(&self, location: Coordinate) -> Option<usize> {
        self.cell(location).and_then(|cell| self.grid[cell])
    }

    pub fn get(&self, location: Coordinate) -> Option<&Piece> {
        self.roster_index(location).map(|index| &self.pieces[index])
    }

    pub fn is_occupied(&self, location: Coordinate) -> bool {
        self.roster_index(location).is_some()
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |piece| piece.color == color)
    }

    pub fn pieces_of_kind(&self, kind: PieceKind, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |piece| piece.kind == kind && piece.color == color)
    }

    pub fn pieces_at(&self, locations: &[Coordinate]) -> Vec<&Piece> {
        locations.iter().filter_map(|&l| self.get(l)).collect()
    }

    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces_of_kind(PieceKind::King, color).next()
    }

    pub fn put(&mut self, piece: Piece) -> Result<(), BoardError> {
        let cell = self
            .cell(piece.position)
            .ok_or(BoardError::OffBoard(piece.position))?;
        if self.grid[cell].is_some() {
            return Err(BoardError::SquareOccupied(piece.position));
        }
        self.grid[cell] = Some(self.pieces.len());
        self.pieces.push(piece);
        Ok(())
    }

    /// `put` for positions built from trusted tables.
    fn place(&mut self, piece: Piece) {
        if let Err(error) = self.put(piece) {
            warn!("skipping set-up piece {}: {}", piece, error);
        }
    }

    pub fn remove(&mut self, location: Coordinate) -> Option<Piece> {
        let cell = self.cell(location)?;
        let index = self.grid[cell].take()?;
        let removed = self.pieces.swap_remove(index);
        if let Some(moved) = self.pieces.get(index) {
            if let Some(moved_cell) = self.cell(moved.position) {
                self.grid[moved_cell] = Some(index);
            }
        }
        Some(removed)
    }

    /// Pseudo-moves of the piece on `at`, before any legality policy.
    pub fn pseudo_moves(&self, at: Coordinate) -> Option<MoveSet> {
        self.get(at).map(|piece| generate_pseudo_moves(self, piece))
    }

    /// Moves of the piece on `at` after `filter` has applied its policy.
    /// `None` if the square is empty or off the board.
    pub fn legal_moves(&self, at: Coordinate, filter: &dyn MoveFilter) -> Option<MoveSet> {
        self.get(at)
            .map(|piece| self.legal_moves_for(piece, filter))
    }

    pub fn legal_moves_for(&self, piece: &Piece, filter: &dyn MoveFilter) -> MoveSet {
        filter.filter_moves(self, piece, generate_pseudo_moves(self, piece))
    }

    pub fn legal_moves_for_color(&self, color: Color, filter: &dyn MoveFilter) -> MoveSet {
        let mut moves = MoveSet::new();
        for piece in self.pieces_of(color) {
            moves.append(&mut self.legal_moves_for(piece, filter));
        }
        moves
    }

    pub fn is_legal(&self, chess_move: &Move, filter: &dyn MoveFilter) -> bool {
        self.legal_moves(chess_move.start(), filter)
            .map_or(false, |moves| moves.contains(chess_move))
    }

    /// Executes `chess_move` and everything chained to it. Returns `false`
    /// without touching the board if the move is not in the mover's legal set
    /// (chained moves are exempt) or any step of the chain cannot be applied.
    pub fn execute_move(&mut self, chess_move: &Move, filter: &dyn MoveFilter) -> bool {
        if !chess_move.ignores_legality_recheck() && !self.is_legal(chess_move, filter) {
            warn!("rejecting move {}: not a legal move", chess_move);
            return false;
        }
        // The whole chain lands on a copy first and is committed only if
        // every step succeeded.
        let mut staged = self.clone();
        if let Err(error) = staged.apply_move(chess_move) {
            warn!("rejecting move {}: {}", chess_move, error);
            return false;
        }
        *self = staged;
        true
    }

    /// A copy of this board with `chess_move` applied unconditionally.
    pub fn simulate(&self, chess_move: &Move) -> Board {
        let mut copy = self.clone();
        if let Err(error) = copy.apply_move(chess_move) {
            debug!("simulation of {} stopped early: {}", chess_move, error);
        }
        copy
    }

    /// True if the piece currently shields `target` from one of its own
    /// attackers, i.e. lifting it off the board would let that attacker hit
    /// `target`.
    pub fn is_piece_blocking_attack(&self, piece: &Piece, target: Coordinate) -> bool {
        let mut copy = self.clone();
        copy.remove(piece.position);
        self.attackers_of(piece.position, piece.color)
            .iter()
            .any(|attacker| generate_pseudo_moves(&copy, attacker).contains_attacked(target))
    }

    fn apply_move(&mut self, chess_move: &Move) -> Result<(), BoardError> {
        for &attacked in chess_move.attacked_locations() {
            if let Some(captured) = self.remove(attacked) {
                debug!("{} captured by {}", captured, chess_move);
            }
        }

        let mut piece = self
            .remove(chess_move.start())
            .ok_or(BoardError::EmptySquare(chess_move.start()))?;
        piece.position = chess_move.end();
        piece.has_moved = true;
        self.put(piece)?;
        debug!("executed {}", chess_move);

        // Chained moves were validated with their parent and are never rechecked.
        for subsequent in chess_move.subsequent_moves() {
            self.apply_move(subsequent)?;
        }

        pawn_promotion::promote_if_due(self, chess_move.end());
        Ok(())
    }
}
