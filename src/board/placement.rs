//! Piece placement: which piece stands on which square.

use std::fmt;

use super::types::{Color, Piece, PieceKind, Square};

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

/// A 128-slot mailbox indexed by 0x88 square.
///
/// Every stored piece records the square it sits on, and the slot it lives in
/// always matches that square. Off-board slots are never written.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    squares: [Option<Piece>; 128],
}

impl Placement {
    #[must_use]
    pub const fn empty() -> Self {
        Placement {
            squares: [None; 128],
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn starting() -> Self {
        let mut placement = Placement::empty();
        for color in Color::BOTH {
            let back = color.back_rank();
            let pawns = color.pawn_start_rank();
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                placement.insert(Piece::new(kind, color, Square::at(back, file)));
                placement.insert(Piece::new(PieceKind::Pawn, color, Square::at(pawns, file)));
            }
        }
        placement
    }

    /// Get the piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[usize::from(square.index())]
    }

    #[inline]
    #[must_use]
    pub fn is_vacant(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Place `piece` on its own square, returning whatever stood there.
    #[inline]
    pub fn insert(&mut self, piece: Piece) -> Option<Piece> {
        self.squares[usize::from(piece.square().index())].replace(piece)
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[usize::from(square.index())].take()
    }

    /// All pieces in square order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        Square::all().filter_map(|sq| self.get(sq))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// The first king of `color` found, if there is one.
    #[must_use]
    pub fn king(&self, color: Color) -> Option<Piece> {
        self.pieces_of(color).find(|p| p.kind() == PieceKind::King)
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Placement::empty()
    }
}

impl FromIterator<Piece> for Placement {
    /// Later pieces replace earlier ones on the same square.
    fn from_iter<I: IntoIterator<Item = Piece>>(iter: I) -> Self {
        let mut placement = Placement::empty();
        for piece in iter {
            placement.insert(piece);
        }
        placement
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pieces().map(|p| (p.square(), p.fen_char())))
            .finish()
    }
}
