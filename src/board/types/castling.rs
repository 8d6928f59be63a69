//! Castling rights and castling geometry.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const CASTLE_WHITE_SHORT: u8 = 1 << 0;
const CASTLE_WHITE_LONG: u8 = 1 << 1;
const CASTLE_BLACK_SHORT: u8 = 1 << 2;
const CASTLE_BLACK_LONG: u8 = 1 << 3;

/// All castling rights combined
const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_SHORT | CASTLE_WHITE_LONG | CASTLE_BLACK_SHORT | CASTLE_BLACK_LONG;

/// Which rook the king castles with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Kingside (O-O)
    Short,
    /// Queenside (O-O-O)
    Long,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Short, CastleSide::Long];

    /// Files the king crosses, start-exclusive, end-inclusive.
    const fn king_path_files(self) -> &'static [u8] {
        match self {
            CastleSide::Short => &[5, 6],
            CastleSide::Long => &[3, 2],
        }
    }

    /// Files the rook crosses, start-exclusive, end-inclusive.
    const fn rook_path_files(self) -> &'static [u8] {
        match self {
            CastleSide::Short => &[6, 5],
            CastleSide::Long => &[1, 2, 3],
        }
    }

    /// The side whose rook starts on `square` for `color`, if any.
    #[must_use]
    pub fn for_rook_home(color: Color, square: Square) -> Option<CastleSide> {
        CastleSide::BOTH
            .into_iter()
            .find(|&side| CastlePath::new(color, side).rook_start() == square)
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::Short => write!(f, "short"),
            CastleSide::Long => write!(f, "long"),
        }
    }
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastleRights(0)
    }

    /// All castling rights (both sides can castle short and long)
    #[must_use]
    pub const fn all() -> Self {
        CastleRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Rights with `color`/`side` added. Only used while setting up a
    /// position; during play rights are only ever removed.
    #[inline]
    #[must_use]
    pub const fn with(self, color: Color, side: CastleSide) -> Self {
        CastleRights(self.0 | Self::bit_for(color, side))
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both rights for `color`
    #[inline]
    pub fn revoke(&mut self, color: Color) {
        self.remove(color, CastleSide::Short);
        self.remove(color, CastleSide::Long);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    const fn bit_for(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Short) => CASTLE_WHITE_SHORT,
            (Color::White, CastleSide::Long) => CASTLE_WHITE_LONG,
            (Color::Black, CastleSide::Short) => CASTLE_BLACK_SHORT,
            (Color::Black, CastleSide::Long) => CASTLE_BLACK_LONG,
        }
    }
}

/// King and rook squares involved in one castle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlePath {
    pub color: Color,
    pub side: CastleSide,
}

impl CastlePath {
    #[must_use]
    pub const fn new(color: Color, side: CastleSide) -> Self {
        CastlePath { color, side }
    }

    #[inline]
    #[must_use]
    pub const fn king_start(self) -> Square {
        Square::at(self.color.back_rank(), 4)
    }

    #[inline]
    #[must_use]
    pub const fn king_end(self) -> Square {
        match self.side {
            CastleSide::Short => Square::at(self.color.back_rank(), 6),
            CastleSide::Long => Square::at(self.color.back_rank(), 2),
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_start(self) -> Square {
        match self.side {
            CastleSide::Short => Square::at(self.color.back_rank(), 7),
            CastleSide::Long => Square::at(self.color.back_rank(), 0),
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook_end(self) -> Square {
        match self.side {
            CastleSide::Short => Square::at(self.color.back_rank(), 5),
            CastleSide::Long => Square::at(self.color.back_rank(), 3),
        }
    }

    /// Squares the king passes through, including its destination.
    pub fn king_path(self) -> impl Iterator<Item = Square> {
        let rank = self.color.back_rank();
        self.side
            .king_path_files()
            .iter()
            .map(move |&file| Square::at(rank, file))
    }

    /// Squares the rook passes through, including its destination.
    pub fn rook_path(self) -> impl Iterator<Item = Square> {
        let rank = self.color.back_rank();
        self.side
            .rook_path_files()
            .iter()
            .map(move |&file| Square::at(rank, file))
    }
}
