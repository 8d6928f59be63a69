//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the crate:
//! - `Piece`, `PieceKind` and `Color` - chess pieces and their movement
//! - `Square` - 0x88 board square
//! - `Move` and `MoveList` - move representation
//! - `CastleRights` and `CastlePath` - castling state and geometry

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastlePath, CastleRights, CastleSide};
pub use moves::{CastlingMove, Move, MoveList, RookMove, SinglePieceMove};
pub use piece::{Color, Movement, Piece, PieceKind};
pub use square::{index_on_board, Square, OFF_BOARD_MASK};
