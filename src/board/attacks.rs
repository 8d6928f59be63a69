//! Attack detection.

use super::placement::Placement;
use super::types::{Color, Piece, Square};

impl Piece {
    /// True if this piece attacks `target` in the given placement.
    ///
    /// Non-pawns attack every square they could move to, plus squares held by
    /// their own side. Pawns attack their two forward diagonals only.
    #[must_use]
    pub fn attacks(&self, target: Square, placement: &Placement) -> bool {
        match self.kind().movement() {
            Some(movement) => self.ray_reaches(movement, target, placement),
            None => self.pawn_reaches(target),
        }
    }
}

/// Is `square` attacked by any piece of color `by` (or by any piece at all
/// when `by` is `None`)?
#[must_use]
pub fn square_is_attacked(square: Square, placement: &Placement, by: Option<Color>) -> bool {
    placement
        .pieces()
        .filter(|p| by.map_or(true, |color| p.color() == color))
        .any(|p| p.attacks(square, placement))
}

/// Is the king of `color` attacked? A side without a king is never in check.
#[must_use]
pub fn king_in_check(placement: &Placement, color: Color) -> bool {
    placement
        .king(color)
        .is_some_and(|king| square_is_attacked(king.square(), placement, Some(color.opponent())))
}
