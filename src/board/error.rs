//! Error types for chess board operations.

use thiserror::Error;

use super::types::{CastleSide, Color, Piece, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    /// FEN string must have exactly six whitespace-separated fields
    #[error("FEN must have 6 fields, found {found}")]
    WrongFieldCount { found: usize },
    /// Placement field must describe eight ranks
    #[error("FEN placement must have 8 ranks, found {found}")]
    RankCount { found: usize },
    /// A rank must cover exactly eight files
    #[error("rank {rank} covers {files} files, expected 8")]
    RankLength { rank: u8, files: usize },
    /// Invalid piece character in position string
    #[error("invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    #[error("invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    #[error("invalid castling character '{char}' in FEN")]
    InvalidCastling { char: char },
    #[error("invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    #[error("invalid halfmove clock '{found}'")]
    InvalidHalfmoveClock { found: String },
    #[error("invalid fullmove number '{found}'")]
    InvalidFullmoveNumber { found: String },
}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    #[error("move must be 4-5 characters, found {len}")]
    InvalidLength { len: usize },
    /// Invalid square notation in move
    #[error("invalid square notation in '{notation}'")]
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    #[error("invalid promotion piece '{char}'")]
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    #[error("illegal move '{notation}'")]
    IllegalMove { notation: String },
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("invalid square notation '{notation}'")]
    InvalidNotation { notation: String },
    /// Raw index is not on the 8x8 part of the 0x88 grid
    #[error("index {index:#04x} is off the board")]
    OffBoard { index: u8 },
}

/// A placement does not look the way a move expects it to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("no piece on {square}")]
    MissingPiece { square: Square },
    #[error("expected {expected}, found {found}")]
    PieceMismatch { expected: Piece, found: Piece },
    #[error("{square} is occupied by {occupant}")]
    SquareOccupied { square: Square, occupant: Piece },
    /// The declared capture disagrees with the piece on the destination.
    #[error("move declares capture of {declared} but {observed} stands on the destination")]
    CaptureMismatch { declared: Piece, observed: Piece },
    #[error("{color} moved but it is not {color}'s turn")]
    OutOfTurn { color: Color },
}

/// Error type for applying or reverting moves
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal state: {0}")]
    IllegalState(#[from] StateError),
    #[error("{captor} cannot capture {captured}")]
    IllegalCapture { captor: Piece, captured: Piece },
    #[error("{color} has no {side} castling right")]
    IllegalCastle { color: Color, side: CastleSide },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::PieceKind;

    #[test]
    fn test_fen_error_messages() {
        let err = FenError::WrongFieldCount { found: 4 };
        assert!(err.to_string().contains('4'));
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
        let err = FenError::InvalidSideToMove {
            found: "X".to_string(),
        };
        assert!(err.to_string().contains("'X'"));
    }

    #[test]
    fn test_move_parse_error_messages() {
        let err = MoveParseError::InvalidLength { len: 3 };
        assert!(err.to_string().contains('3'));
        let err = MoveParseError::IllegalMove {
            notation: "e2e5".to_string(),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_square_error_messages() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
        assert_eq!(
            SquareError::OffBoard { index: 0x08 }.to_string(),
            "index 0x08 is off the board"
        );
    }

    #[test]
    fn test_state_error_converts_into_move_error() {
        let err: MoveError = StateError::MissingPiece {
            square: Square::E2,
        }
        .into();
        assert_eq!(
            err,
            MoveError::IllegalState(StateError::MissingPiece {
                square: Square::E2
            })
        );
        assert_eq!(err.to_string(), "illegal state: no piece on e2");
    }

    #[test]
    fn test_capture_error_names_both_pieces() {
        let err = MoveError::IllegalCapture {
            captor: Piece::new(PieceKind::Queen, Color::White, Square::D1),
            captured: Piece::new(PieceKind::Pawn, Color::White, Square::D2),
        };
        let text = err.to_string();
        assert!(text.contains("White queen on d1"));
        assert!(text.contains("White pawn on d2"));
    }

    #[test]
    fn test_castle_error() {
        let err = MoveError::IllegalCastle {
            color: Color::Black,
            side: CastleSide::Long,
        };
        assert_eq!(err.to_string(), "Black has no long castling right");
    }
}
