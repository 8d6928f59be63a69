//! A chess rules oracle: positions on a 0x88 board, fully legal move
//! generation, reversible move application and perft node counting.

pub mod board;
pub mod perft;

pub use board::{
    generate_castling_moves, legal_moves, make_move, square_is_attacked, unmake_move,
    update_castle_rights, Board, BoardBuilder, CastleRights, CastleSide, Color, FenError, Move,
    MoveError, MoveList, MoveParseError, Piece, PieceKind, Placement, Square,
};
pub use perft::{perft, perft_divide, perft_with, NodeCounts, PerftConfig};
