//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_oracle::board::prelude::*;
//!
//! let board: Board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
//! assert!(!board.in_check());
//! ```

pub use super::{
    legal_moves, Board, BoardBuilder, CastleRights, CastleSide, Color, FenError, Move, MoveError,
    MoveList, MoveParseError, Piece, PieceKind, Square,
};
