use std::fmt;
use std::hash::{Hash, Hasher};

use super::attacks::king_in_check;
use super::error::{MoveError, StateError};
use super::make_unmake::make_move;
use super::movegen::legal_moves;
use super::placement::Placement;
use super::types::{CastleRights, CastleSide, Color, Move, MoveList, PieceKind, Square};

/// A complete chess position.
///
/// Boards are values: [`Board::apply_move`] returns a new board and leaves
/// the original untouched. Two boards are equal when their notation strings
/// are equal, clocks included; use [`Board::position_key`] to compare
/// positions while ignoring the clocks.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) ply: u32,
    pub(crate) halfmove_clock: u32,
    pub(crate) to_move: Color,
    pub(crate) placement: Placement,
    pub(crate) castle_rights: CastleRights,
    pub(crate) en_passant_target: Option<Square>,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Board {
            ply: 1,
            halfmove_clock: 0,
            to_move: Color::White,
            placement: Placement::starting(),
            castle_rights: CastleRights::all(),
            en_passant_target: None,
        }
    }

    /// Half-moves since the start of the game, counting from 1.
    #[inline]
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Full-move number as written in notation.
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.ply / 2 + u32::from(self.to_move == Color::White)
    }

    #[inline]
    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[inline]
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    #[inline]
    #[must_use]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// The position after `mv`.
    ///
    /// Fails without side effects if the move does not fit this position.
    pub fn apply_move(&self, mv: &Move) -> Result<Board, MoveError> {
        let mover = mv.start().color();
        if mover != self.to_move {
            return Err(StateError::OutOfTurn { color: mover }.into());
        }
        let (placement, resolved) = make_move(&self.placement, mv)?;
        let castle_rights = update_castle_rights(self.castle_rights, &resolved)?;

        Ok(Board {
            ply: self.ply.saturating_add(1),
            halfmove_clock: next_halfmove_clock(self.halfmove_clock, &resolved),
            to_move: self.to_move.opponent(),
            placement,
            castle_rights,
            en_passant_target: en_passant_target_after(&resolved),
        })
    }

    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(self)
    }

    /// Is the side to move in check?
    #[must_use]
    pub fn in_check(&self) -> bool {
        king_in_check(&self.placement, self.to_move)
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && self.legal_moves().is_empty()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && self.legal_moves().is_empty()
    }

    /// Identity of the position without the move clocks.
    #[must_use]
    pub fn position_key(&self) -> PositionKey {
        PositionKey(self.position_fields())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.to_notation() == other.to_notation()
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_notation().hash(state);
    }
}

/// Text diagram of the board, White at the bottom.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..8u8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8u8 {
                let ch = self
                    .placement
                    .get(Square::at(rank, file))
                    .map_or('.', |p| p.fen_char());
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")?;
        write!(f, "{} to move", self.to_move)
    }
}

/// The first four notation fields: placement, side to move, castling rights
/// and en passant target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PositionKey(String);

impl PositionKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Castling rights after `mv` has been played.
///
/// Moving the king gives up both sides; moving a rook off its home corner, or
/// having it captured there, gives up that side. Castling consumes both
/// rights and fails if the side it uses was no longer available.
pub fn update_castle_rights(rights: CastleRights, mv: &Move) -> Result<CastleRights, MoveError> {
    let mut next = rights;
    match mv {
        Move::Castling(castle) => {
            let color = castle.start.color();
            let side = castle.side();
            if !rights.has(color, side) {
                return Err(MoveError::IllegalCastle { color, side });
            }
            next.revoke(color);
        }
        Move::Single(single) => {
            let mover = single.start;
            match mover.kind() {
                PieceKind::King => next.revoke(mover.color()),
                PieceKind::Rook => {
                    if let Some(side) = CastleSide::for_rook_home(mover.color(), mover.square()) {
                        next.remove(mover.color(), side);
                    }
                }
                _ => {}
            }
            if let Some(rook) = single.captures.filter(|p| p.kind() == PieceKind::Rook) {
                if let Some(side) = CastleSide::for_rook_home(rook.color(), rook.square()) {
                    next.remove(rook.color(), side);
                }
            }
        }
    }
    Ok(next)
}

/// Pawn moves and captures reset the clock; everything else, castling
/// included, advances it.
pub(crate) fn next_halfmove_clock(clock: u32, mv: &Move) -> u32 {
    match mv {
        Move::Single(single) if single.start.kind() == PieceKind::Pawn => 0,
        Move::Single(single) if single.captures.is_some() => 0,
        _ => clock.saturating_add(1),
    }
}

/// The square skipped by a pawn double step, if `mv` is one.
pub(crate) fn en_passant_target_after(mv: &Move) -> Option<Square> {
    match mv {
        Move::Single(single)
            if single.start.kind() == PieceKind::Pawn
                && single.start.square().rank_distance(single.end.square()) == 2 =>
        {
            single
                .start
                .square()
                .offset(single.start.color().pawn_forward())
        }
        _ => None,
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Board {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_notation())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Board {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let notation = <String as serde::Deserialize>::deserialize(deserializer)?;
        Board::from_notation(&notation).map_err(serde::de::Error::custom)
    }
}
