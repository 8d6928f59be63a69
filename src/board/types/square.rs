//! Square types and utilities.
//!
//! Squares index a 16x8 ("0x88") grid: the low nibble is the file and the high
//! nibble the rank. The right half of every rank lies off the board, so any
//! step that leaves the 8x8 board sets one of the bits in `0x88`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Bits that are set on every off-board index.
pub const OFF_BOARD_MASK: i16 = 0x88;

/// Returns true if `index` addresses a square on the 8x8 board.
#[inline]
#[must_use]
pub const fn index_on_board(index: i16) -> bool {
    index & OFF_BOARD_MASK == 0
}

/// A square on the chess board, stored as its 0x88 index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Square(u8);

impl Square {
    /// Create a square from a rank and file (both 0-7).
    #[must_use]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank << 4) | file))
        } else {
            None
        }
    }

    /// Caller guarantees `rank < 8 && file < 8`.
    #[inline]
    pub(crate) const fn at(rank: u8, file: u8) -> Self {
        Square((rank << 4) | file)
    }

    /// Create a square from a raw 0x88 index.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index_on_board(index as i16) {
            Some(Square(index))
        } else {
            None
        }
    }

    /// The raw 0x88 index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Rank 0-7, where 0 = rank 1
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 >> 4
    }

    /// File 0-7, where 0 = file a
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 & 0x0F
    }

    /// Step by a 0x88 offset, returning `None` if the result leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let index = self.0 as i16 + delta as i16;
        if index_on_board(index) {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Absolute rank difference between two squares.
    #[inline]
    #[must_use]
    pub const fn rank_distance(self, other: Square) -> u8 {
        self.rank().abs_diff(other.rank())
    }

    /// All 64 squares, a1, b1, ..., h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square::at(rank, file)))
    }
}

macro_rules! named_squares {
    ($($name:ident = ($rank:expr, $file:expr)),* $(,)?) => {
        impl Square {
            $(pub const $name: Square = Square::at($rank, $file);)*
        }
    };
}

named_squares! {
    A1 = (0, 0), B1 = (0, 1), C1 = (0, 2), D1 = (0, 3), E1 = (0, 4), F1 = (0, 5), G1 = (0, 6), H1 = (0, 7),
    A2 = (1, 0), B2 = (1, 1), C2 = (1, 2), D2 = (1, 3), E2 = (1, 4), F2 = (1, 5), G2 = (1, 6), H2 = (1, 7),
    A3 = (2, 0), B3 = (2, 1), C3 = (2, 2), D3 = (2, 3), E3 = (2, 4), F3 = (2, 5), G3 = (2, 6), H3 = (2, 7),
    A4 = (3, 0), B4 = (3, 1), C4 = (3, 2), D4 = (3, 3), E4 = (3, 4), F4 = (3, 5), G4 = (3, 6), H4 = (3, 7),
    A5 = (4, 0), B5 = (4, 1), C5 = (4, 2), D5 = (4, 3), E5 = (4, 4), F5 = (4, 5), G5 = (4, 6), H5 = (4, 7),
    A6 = (5, 0), B6 = (5, 1), C6 = (5, 2), D6 = (5, 3), E6 = (5, 4), F6 = (5, 5), G6 = (5, 6), H6 = (5, 7),
    A7 = (6, 0), B7 = (6, 1), C7 = (6, 2), D7 = (6, 3), E7 = (6, 4), F7 = (6, 5), G7 = (6, 6), H7 = (6, 7),
    A8 = (7, 0), B8 = (7, 1), C8 = (7, 2), D8 = (7, 3), E8 = (7, 4), F8 = (7, 5), G8 = (7, 6), H8 = (7, 7),
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::from_index(index).ok_or(SquareError::OffBoard { index })
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => c - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            c @ b'1'..=b'8' => c - b'1',
            _ => return Err(invalid()),
        };

        Ok(Square::at(rank, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_and_file_from_index() {
        assert_eq!(Square::E4.index(), 0x34);
        assert_eq!(Square::E4.rank(), 3);
        assert_eq!(Square::E4.file(), 4);
        assert_eq!(Square::H8.index(), 119);
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square::E4.offset(16), Some(Square::E5));
        assert_eq!(Square::E4.offset(-17), Some(Square::D3));
        assert_eq!(Square::B1.offset(31), Some(Square::A3));
    }

    #[test]
    fn test_offset_detects_edges() {
        assert_eq!(Square::H4.offset(1), None);
        assert_eq!(Square::A4.offset(-1), None);
        assert_eq!(Square::C8.offset(16), None);
        assert_eq!(Square::C1.offset(-16), None);
        assert_eq!(Square::A1.offset(-33), None);
        assert_eq!(Square::H8.offset(33), None);
        assert_eq!(Square::G7.offset(18), None);
    }

    #[test]
    fn test_off_board_indices_rejected() {
        assert!(Square::from_index(8).is_none());
        assert!(Square::from_index(0x88).is_none());
        assert!(matches!(
            Square::try_from(0x0Fu8),
            Err(SquareError::OffBoard { index: 0x0F })
        ));
        assert_eq!(Square::try_from(0x70u8), Ok(Square::A8));
    }

    #[test]
    fn test_all_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::A1);
        assert_eq!(squares[63], Square::H8);
        assert!(squares.iter().all(|sq| index_on_board(sq.index() as i16)));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("e4".parse::<Square>(), Ok(Square::E4));
        assert_eq!("C6".parse::<Square>(), Ok(Square::C6));
        assert_eq!(Square::H7.to_string(), "h7");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a10".parse::<Square>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_validates_index() {
        assert_eq!(serde_json::to_string(&Square::E4).unwrap(), "52");
        assert_eq!(serde_json::from_str::<Square>("52").unwrap(), Square::E4);
        assert!(serde_json::from_str::<Square>("8").is_err());
    }
}
