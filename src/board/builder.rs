//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing notation.
//!
//! # Example
//! ```
//! use chess_oracle::board::{BoardBuilder, CastleSide, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::E1, Color::White, PieceKind::King)
//!     .piece(Square::H1, Color::White, PieceKind::Rook)
//!     .piece(Square::E8, Color::Black, PieceKind::King)
//!     .castle(Color::White, CastleSide::Short)
//!     .build();
//! assert_eq!(board.legal_moves().iter().filter(|m| m.is_castling()).count(), 1);
//! ```

use super::placement::Placement;
use super::state::Board;
use super::types::{CastleRights, CastleSide, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
///
/// No legality checks are made: a built position may lack kings or hold
/// rights whose king and rook are not at home.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    placement: Placement,
    side_to_move: Color,
    castle_rights: CastleRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            placement: Placement::empty(),
            side_to_move: Color::White,
            castle_rights: CastleRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            placement: Placement::starting(),
            castle_rights: CastleRights::all(),
            ..Self::new()
        }
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.placement.insert(Piece::new(kind, color, square));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.placement.remove(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Grant one castling right.
    #[must_use]
    pub const fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castle_rights = self.castle_rights.with(color, side);
        self
    }

    #[must_use]
    pub const fn castle_rights(mut self, rights: CastleRights) -> Self {
        self.castle_rights = rights;
        self
    }

    /// Set the en passant target square.
    ///
    /// A target off the rank the opponent's pawn would have skipped is
    /// dropped when the board is built.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Set the halfmove clock (for 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the full-move number. Values below 1 are treated as 1.
    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let fullmove = self.fullmove_number.max(1);
        let ply = fullmove
            .saturating_mul(2)
            .saturating_sub(1)
            .saturating_add(u32::from(self.side_to_move == Color::Black));
        Board {
            ply,
            halfmove_clock: self.halfmove_clock,
            to_move: self.side_to_move,
            placement: self.placement,
            castle_rights: self.castle_rights,
            en_passant_target: self
                .en_passant_target
                .filter(|target| target.rank() == self.side_to_move.en_passant_rank()),
        }
    }
}
