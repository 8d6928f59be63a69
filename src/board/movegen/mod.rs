//! Move generation.
//!
//! Pieces generate pseudo-legal moves from their own geometry; the legal
//! generator then plays each one on a scratch placement and drops those that
//! leave the mover's king attacked.

mod castling;
mod pawns;
mod rays;

pub use castling::generate_castling_moves;

use super::attacks::square_is_attacked;
use super::placement::Placement;
use super::state::Board;
use super::types::{CastleRights, Color, MoveList, Piece, PieceKind, Square};

impl Piece {
    /// Every move this piece could make ignoring checks and castling.
    #[must_use]
    pub fn pseudo_legal_moves(
        &self,
        placement: &Placement,
        en_passant_target: Option<Square>,
    ) -> MoveList {
        let mut moves = MoveList::new();
        self.push_pseudo_legal_moves(placement, en_passant_target, &mut moves);
        moves
    }

    fn push_pseudo_legal_moves(
        self,
        placement: &Placement,
        en_passant_target: Option<Square>,
        moves: &mut MoveList,
    ) {
        match self.kind().movement() {
            Some(movement) => self.push_ray_moves(movement, placement, moves),
            None => self.push_pawn_moves(placement, en_passant_target, moves),
        }
    }
}

/// All legal moves for `to_move`, castling included.
#[must_use]
pub fn generate_legal_moves(
    placement: &Placement,
    to_move: Color,
    castle_rights: CastleRights,
    en_passant_target: Option<Square>,
) -> MoveList {
    let mut moves = MoveList::new();
    for piece in placement.pieces_of(to_move) {
        piece.push_pseudo_legal_moves(placement, en_passant_target, &mut moves);
    }

    if let Some(king) = placement.king(to_move) {
        let opponent = Some(to_move.opponent());
        let mut scratch = placement.clone();
        moves.retain(|mv| {
            let resolved = match scratch.apply(mv) {
                Ok(resolved) => resolved,
                Err(_err) => {
                    #[cfg(feature = "logging")]
                    log::debug!("dropping unplayable move {mv}: {_err}");
                    return false;
                }
            };
            let king_square = if mv.start().kind() == PieceKind::King {
                mv.to()
            } else {
                king.square()
            };
            let safe = !square_is_attacked(king_square, &scratch, opponent);
            if scratch.revert(&resolved).is_err() {
                scratch.clone_from(placement);
            }
            #[cfg(feature = "logging")]
            if !safe {
                log::debug!("{mv} leaves the {to_move} king on {king_square} attacked");
            }
            safe
        });
    }

    moves.append(generate_castling_moves(placement, castle_rights, to_move));
    moves
}

/// All legal moves in `board`.
#[must_use]
pub fn legal_moves(board: &Board) -> MoveList {
    generate_legal_moves(
        board.placement(),
        board.to_move(),
        board.castle_rights(),
        board.en_passant_target(),
    )
}
