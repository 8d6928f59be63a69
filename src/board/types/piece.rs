//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// 0x88 offset of a single pawn step (+16 for White, -16 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_forward(self) -> i8 {
        match self {
            Color::White => 16,
            Color::Black => -16,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank of a legal en passant target while this color is to move
    /// (5 for White, 2 for Black): the square the opponent's pawn skipped.
    #[inline]
    #[must_use]
    pub const fn en_passant_rank(self) -> u8 {
        match self {
            Color::White => 5,
            Color::Black => 2,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

const DIAGONAL: [i8; 4] = [15, 17, -15, -17];
const ORTHOGONAL: [i8; 4] = [16, 1, -16, -1];
const EVERY_DIRECTION: [i8; 8] = [15, 17, -15, -17, 16, 1, -16, -1];
const KNIGHT_JUMPS: [i8; 8] = [33, 31, 18, 14, -14, -18, -31, -33];

/// How a non-pawn piece moves: the 0x88 offsets it steps by, and whether it
/// keeps sliding past empty squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Movement {
    pub slides: bool,
    pub offsets: &'static [i8],
}

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    /// Movement descriptor for this kind. Pawns have none: their moves depend
    /// on color, occupancy and en passant, so they are generated separately.
    #[inline]
    #[must_use]
    pub const fn movement(self) -> Option<Movement> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Knight => Some(Movement {
                slides: false,
                offsets: &KNIGHT_JUMPS,
            }),
            PieceKind::Bishop => Some(Movement {
                slides: true,
                offsets: &DIAGONAL,
            }),
            PieceKind::Rook => Some(Movement {
                slides: true,
                offsets: &ORTHOGONAL,
            }),
            PieceKind::Queen => Some(Movement {
                slides: true,
                offsets: &EVERY_DIRECTION,
            }),
            PieceKind::King => Some(Movement {
                slides: false,
                offsets: &EVERY_DIRECTION,
            }),
        }
    }

    /// Parse a piece kind from a character (case-insensitive: p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Convert kind to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
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
        f.write_str(name)
    }
}

/// A piece standing on a square.
///
/// Pieces are plain values: moving one produces a new `Piece` on the
/// destination square. Pawns additionally remember whether they have moved,
/// which gates the double step; every other kind always reports `false`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    first_move: bool,
}

impl Piece {
    /// Create a piece. A pawn on its starting rank is treated as unmoved.
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        let first_move =
            matches!(kind, PieceKind::Pawn) && square.rank() == color.pawn_start_rank();
        Piece {
            kind,
            color,
            square,
            first_move,
        }
    }

    /// Override the pawn first-move flag. Has no effect on other kinds.
    #[must_use]
    pub const fn with_first_move(mut self, first_move: bool) -> Self {
        if matches!(self.kind, PieceKind::Pawn) {
            self.first_move = first_move;
        }
        self
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        self.square
    }

    #[inline]
    #[must_use]
    pub const fn is_first_move(self) -> bool {
        self.first_move
    }

    /// The same piece after moving to `square`.
    #[inline]
    #[must_use]
    pub const fn moved_to(self, square: Square) -> Self {
        Piece {
            square,
            first_move: false,
            ..self
        }
    }

    /// A promoted piece of `kind` landing on `square`.
    #[inline]
    #[must_use]
    pub const fn promoted_to(self, kind: PieceKind, square: Square) -> Self {
        Piece {
            kind,
            color: self.color,
            square,
            first_move: false,
        }
    }

    /// FEN letter (uppercase for White)
    #[inline]
    #[must_use]
    pub fn fen_char(self) -> char {
        self.kind.to_fen_char(self.color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.color, self.kind, self.square)
    }
}
