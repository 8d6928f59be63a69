use super::super::placement::Placement;
use super::super::types::{Move, MoveList, Movement, Piece, Square};

impl Piece {
    /// Walk every offset of `movement` from this piece's square. Each walk
    /// stops at the first occupied square, which becomes a capture if it holds
    /// an enemy piece; steppers stop after one square regardless.
    pub(crate) fn push_ray_moves(
        self,
        movement: Movement,
        placement: &Placement,
        moves: &mut MoveList,
    ) {
        for &delta in movement.offsets {
            let mut current = self.square();
            while let Some(next) = current.offset(delta) {
                match placement.get(next) {
                    None => moves.push(Move::single(self, self.moved_to(next), None)),
                    Some(occupant) => {
                        if occupant.color() != self.color() {
                            moves.push(Move::single(self, self.moved_to(next), Some(occupant)));
                        }
                        break;
                    }
                }
                if !movement.slides {
                    break;
                }
                current = next;
            }
        }
    }

    /// True if one of this piece's walks lands on `target`, whatever stands
    /// there. Blocked exactly like move generation.
    pub(crate) fn ray_reaches(self, movement: Movement, target: Square, placement: &Placement) -> bool {
        movement.offsets.iter().any(|&delta| {
            let mut current = self.square();
            while let Some(next) = current.offset(delta) {
                if next == target {
                    return true;
                }
                if !movement.slides || !placement.is_vacant(next) {
                    return false;
                }
                current = next;
            }
            false
        })
    }
}
