use core::fmt;

use super::color::Color;
use super::coordinate::Coordinate;

/// The closed set of piece kinds. Attack detection iterates `ALL_PIECE_KINDS`
/// rather than discovering kinds at runtime.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<(PieceKind, Color)> {
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((kind, color))
    }

    pub fn to_unicode_piece_char(self, color: Color) -> char {
        match (self, color) {
            (PieceKind::Pawn, Color::White) => '♙',
            (PieceKind::Knight, Color::White) => '♘',
            (PieceKind::Bishop, Color::White) => '♗',
            (PieceKind::Rook, Color::White) => '♖',
            (PieceKind::Queen, Color::White) => '♕',
            (PieceKind::King, Color::White) => '♔',
            (PieceKind::Pawn, Color::Black) => '♟',
            (PieceKind::Knight, Color::Black) => '♞',
            (PieceKind::Bishop, Color::Black) => '♝',
            (PieceKind::Rook, Color::Black) => '♜',
            (PieceKind::Queen, Color::Black) => '♛',
            (PieceKind::King, Color::Black) => '♚',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{}", name)
    }
}

/// A piece as owned by the board. The same value type is used for the
/// hypothetical pieces built while probing for attacks, which never touch the
/// board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Coordinate,
    /// Cleared only at set-up. Gates castling and the pawn double step.
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Coordinate) -> Self {
        Self {
            kind,
            color,
            position,
            has_moved: false,
        }
    }

    pub fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }

    pub fn to_char(&self) -> char {
        self.kind.to_char(self.color)
    }

    pub fn is_enemy_of(&self, color: Color) -> bool {
        self.color != color
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.position)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}{}",
            self.to_char(),
            self.position,
            if self.has_moved { "*" } else { "" }
        )
    }
}
