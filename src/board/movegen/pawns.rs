use super::super::placement::Placement;
use super::super::types::{Move, MoveList, Piece, PieceKind, Square};

/// File steps of the two capture diagonals.
const CAPTURE_SIDES: [i8; 2] = [-1, 1];

impl Piece {
    pub(crate) fn push_pawn_moves(
        self,
        placement: &Placement,
        en_passant_target: Option<Square>,
        moves: &mut MoveList,
    ) {
        let forward = self.color().pawn_forward();

        if let Some(single) = self.square().offset(forward) {
            if placement.is_vacant(single) {
                self.push_with_promotions(single, None, moves);
                if self.is_first_move() {
                    if let Some(double) = single.offset(forward) {
                        if placement.is_vacant(double) {
                            moves.push(Move::single(self, self.moved_to(double), None));
                        }
                    }
                }
            }
        }

        for side in CAPTURE_SIDES {
            let Some(target) = self.square().offset(forward + side) else {
                continue;
            };
            match placement.get(target) {
                Some(occupant) if occupant.color() != self.color() => {
                    self.push_with_promotions(target, Some(occupant), moves);
                }
                Some(_) => {}
                None if en_passant_target == Some(target) => {
                    // The pawn that just double-stepped sits behind the target.
                    let victim = target
                        .offset(-forward)
                        .and_then(|behind| placement.get(behind))
                        .filter(|p| p.kind() == PieceKind::Pawn && p.color() != self.color());
                    if let Some(victim) = victim {
                        moves.push(Move::single(self, self.moved_to(target), Some(victim)));
                    }
                }
                None => {}
            }
        }
    }

    fn push_with_promotions(self, target: Square, captures: Option<Piece>, moves: &mut MoveList) {
        if target.rank() == self.color().promotion_rank() {
            for kind in PieceKind::PROMOTIONS {
                moves.push(Move::single(self, self.promoted_to(kind, target), captures));
            }
        } else {
            moves.push(Move::single(self, self.moved_to(target), captures));
        }
    }

    /// Pawns attack both forward diagonals, occupied or not.
    pub(crate) fn pawn_reaches(self, target: Square) -> bool {
        let forward = self.color().pawn_forward();
        CAPTURE_SIDES
            .into_iter()
            .any(|side| self.square().offset(forward + side) == Some(target))
    }
}
