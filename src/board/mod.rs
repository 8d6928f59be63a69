//! Chess board representation and rules.
//!
//! Positions are stored as a 0x88 mailbox of immutable piece values. Boards
//! are never mutated: applying a move yields a new board. Supports full chess
//! rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use chess_oracle::board::Board;
//!
//! let board = Board::new();
//! let moves = board.legal_moves();
//! assert_eq!(moves.len(), 20);
//!
//! let mv = board.find_move("e2e4").unwrap();
//! let next = board.apply_move(&mv).unwrap();
//! assert_eq!(
//!     next.to_notation(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod placement;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use attacks::{king_in_check, square_is_attacked};
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError, StateError};
pub use make_unmake::{make_move, unmake_move};
pub use movegen::{generate_castling_moves, generate_legal_moves, legal_moves};
pub use placement::Placement;
pub use state::{update_castle_rights, Board, PositionKey};
pub use types::{
    index_on_board, CastlePath, CastleRights, CastleSide, CastlingMove, Color, Move, MoveList,
    Movement, Piece, PieceKind, RookMove, SinglePieceMove, Square, OFF_BOARD_MASK,
};
