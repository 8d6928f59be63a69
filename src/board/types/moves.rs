//! Move types and move list.
//!
//! A move carries the full pieces involved rather than just squares, so it can
//! be applied to and removed from a placement without consulting any other
//! state.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Piece, PieceKind};
use super::square::Square;

/// Any move made by exactly one piece, including captures, en passant and
/// promotions.
///
/// `end` is the piece as it stands after the move (so a promotion has a
/// different kind than `start`). `captures` sits on `end`'s square except for
/// en passant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SinglePieceMove {
    pub start: Piece,
    pub end: Piece,
    pub captures: Option<Piece>,
}

/// The rook half of a castling move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RookMove {
    pub start: Piece,
    pub end: Piece,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingMove {
    pub start: Piece,
    pub end: Piece,
    pub castled_rook: RookMove,
}

impl CastlingMove {
    /// Which side is being castled, judged by the king's destination file.
    #[inline]
    #[must_use]
    pub fn side(&self) -> CastleSide {
        if self.end.square().file() > self.start.square().file() {
            CastleSide::Short
        } else {
            CastleSide::Long
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Single(SinglePieceMove),
    Castling(CastlingMove),
}

impl Move {
    /// Build a single-piece move.
    #[inline]
    #[must_use]
    pub const fn single(start: Piece, end: Piece, captures: Option<Piece>) -> Self {
        Move::Single(SinglePieceMove {
            start,
            end,
            captures,
        })
    }

    /// The moving piece before the move (the king, for castling).
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Piece {
        match self {
            Move::Single(mv) => mv.start,
            Move::Castling(mv) => mv.start,
        }
    }

    /// The moving piece after the move.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Piece {
        match self {
            Move::Single(mv) => mv.end,
            Move::Castling(mv) => mv.end,
        }
    }

    #[inline]
    #[must_use]
    pub const fn captures(&self) -> Option<Piece> {
        match self {
            Move::Single(mv) => mv.captures,
            Move::Castling(_) => None,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.start().square()
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.end().square()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self, Move::Castling(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captures().is_some()
    }

    /// Returns true if the captured piece stands somewhere other than the
    /// destination square.
    #[inline]
    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        match self {
            Move::Single(mv) => mv.captures.is_some_and(|c| c.square() != mv.end.square()),
            Move::Castling(_) => false,
        }
    }

    /// Get the promotion kind, if this is a promotion move
    #[inline]
    #[must_use]
    pub fn promotion(&self) -> Option<PieceKind> {
        match self {
            Move::Single(mv) if mv.start.kind() != mv.end.kind() => Some(mv.end.kind()),
            _ => None,
        }
    }
}

impl From<SinglePieceMove> for Move {
    fn from(mv: SinglePieceMove) -> Self {
        Move::Single(mv)
    }
}

impl From<CastlingMove> for Move {
    fn from(mv: CastlingMove) -> Self {
        Move::Castling(mv)
    }
}

/// UCI long algebraic notation: `e2e4`, `e7e8q`, `e1g1`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Most positions have well under this many legal moves.
pub(crate) const TYPICAL_MOVES: usize = 48;

/// List of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(TYPICAL_MOVES),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub(crate) fn append(&mut self, other: MoveList) {
        self.moves.extend(other.moves);
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
