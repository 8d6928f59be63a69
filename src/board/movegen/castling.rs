use super::super::attacks::square_is_attacked;
use super::super::placement::Placement;
use super::super::types::{
    CastlePath, CastleRights, CastleSide, CastlingMove, Color, Move, MoveList, Piece, PieceKind,
    RookMove,
};

/// Castling moves available to `to_move`.
///
/// A side is offered only when its right is still held, the king and rook
/// stand on their home squares, the king is not in check, every square the
/// king or rook crosses is empty, and no square the king crosses is attacked.
#[must_use]
pub fn generate_castling_moves(
    placement: &Placement,
    castle_rights: CastleRights,
    to_move: Color,
) -> MoveList {
    CastleSide::BOTH
        .into_iter()
        .filter(|&side| castle_rights.has(to_move, side))
        .filter_map(|side| castling_move(placement, CastlePath::new(to_move, side)))
        .collect()
}

fn castling_move(placement: &Placement, path: CastlePath) -> Option<Move> {
    let home = |square, kind| {
        placement
            .get(square)
            .filter(|p: &Piece| p.kind() == kind && p.color() == path.color)
    };
    let king = home(path.king_start(), PieceKind::King)?;
    let rook = home(path.rook_start(), PieceKind::Rook)?;

    let opponent = Some(path.color.opponent());
    if square_is_attacked(king.square(), placement, opponent) {
        return None;
    }
    if path
        .king_path()
        .chain(path.rook_path())
        .any(|sq| !placement.is_vacant(sq))
    {
        return None;
    }
    if path
        .king_path()
        .any(|sq| square_is_attacked(sq, placement, opponent))
    {
        return None;
    }

    Some(Move::Castling(CastlingMove {
        start: king,
        end: king.moved_to(path.king_end()),
        castled_rook: RookMove {
            start: rook,
            end: rook.moved_to(path.rook_end()),
        },
    }))
}
