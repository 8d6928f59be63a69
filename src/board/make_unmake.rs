//! Applying moves to a placement and taking them back.
//!
//! Every operation checks the whole placement against the move before it
//! touches a square, so a failed call leaves the placement exactly as it was.

use super::error::{MoveError, StateError};
use super::placement::Placement;
use super::types::{CastlingMove, Move, Piece, SinglePieceMove, Square};

impl Placement {
    /// Require exactly `expected` on its own square.
    fn expect_piece(&self, expected: Piece) -> Result<(), StateError> {
        match self.get(expected.square()) {
            None => Err(StateError::MissingPiece {
                square: expected.square(),
            }),
            Some(found) if found != expected => Err(StateError::PieceMismatch { expected, found }),
            Some(_) => Ok(()),
        }
    }

    fn expect_vacant(&self, square: Square) -> Result<(), StateError> {
        match self.get(square) {
            Some(occupant) => Err(StateError::SquareOccupied { square, occupant }),
            None => Ok(()),
        }
    }

    /// Apply `mv` in place and return it with its capture resolved.
    pub fn apply(&mut self, mv: &Move) -> Result<Move, MoveError> {
        match mv {
            Move::Single(single) => self.apply_single(single),
            Move::Castling(castle) => self.apply_castling(castle),
        }
    }

    fn apply_single(&mut self, mv: &SinglePieceMove) -> Result<Move, MoveError> {
        self.expect_piece(mv.start)?;

        let observed = self.get(mv.end.square());
        let illegal_capture = |captured: Piece| MoveError::IllegalCapture {
            captor: mv.start,
            captured,
        };
        if let Some(occupant) = observed.filter(|p| p.color() == mv.start.color()) {
            return Err(illegal_capture(occupant));
        }

        let captured = match mv.captures {
            None => observed,
            Some(declared) => {
                if declared.color() == mv.start.color() {
                    return Err(illegal_capture(declared));
                }
                match observed {
                    Some(occupant) if occupant != declared => {
                        return Err(StateError::CaptureMismatch {
                            declared,
                            observed: occupant,
                        }
                        .into());
                    }
                    _ => self.expect_piece(declared)?,
                }
                Some(declared)
            }
        };

        self.remove(mv.start.square());
        if let Some(captured) = captured {
            self.remove(captured.square());
        }
        self.insert(mv.end);

        Ok(Move::single(mv.start, mv.end, captured))
    }

    fn apply_castling(&mut self, mv: &CastlingMove) -> Result<Move, MoveError> {
        let rook = mv.castled_rook;
        self.expect_piece(mv.start)?;
        self.expect_piece(rook.start)?;
        for square in [mv.end.square(), rook.end.square()] {
            if square != mv.start.square() && square != rook.start.square() {
                self.expect_vacant(square)?;
            }
        }

        self.remove(mv.start.square());
        self.remove(rook.start.square());
        self.insert(mv.end);
        self.insert(rook.end);

        Ok(Move::Castling(*mv))
    }

    /// Take back a move previously returned by [`Placement::apply`].
    pub fn revert(&mut self, mv: &Move) -> Result<(), MoveError> {
        match mv {
            Move::Single(single) => {
                self.expect_vacant(single.start.square())?;
                self.expect_piece(single.end)?;
                if let Some(captured) = single.captures {
                    if captured.square() != single.end.square() {
                        self.expect_vacant(captured.square())?;
                    }
                }

                self.remove(single.end.square());
                if let Some(captured) = single.captures {
                    self.insert(captured);
                }
                self.insert(single.start);
            }
            Move::Castling(castle) => {
                let rook = castle.castled_rook;
                self.expect_piece(castle.end)?;
                self.expect_piece(rook.end)?;
                for square in [castle.start.square(), rook.start.square()] {
                    if square != castle.end.square() && square != rook.end.square() {
                        self.expect_vacant(square)?;
                    }
                }

                self.remove(castle.end.square());
                self.remove(rook.end.square());
                self.insert(rook.start);
                self.insert(castle.start);
            }
        }
        Ok(())
    }
}

/// Apply `mv` to a copy of `placement`.
///
/// Returns the new placement and the move with its capture filled in from
/// whatever stood on the destination square.
pub fn make_move(placement: &Placement, mv: &Move) -> Result<(Placement, Move), MoveError> {
    let mut next = placement.clone();
    let resolved = next.apply(mv)?;
    Ok((next, resolved))
}

/// Undo a resolved move on a copy of `placement`.
pub fn unmake_move(placement: &Placement, mv: &Move) -> Result<Placement, MoveError> {
    let mut previous = placement.clone();
    previous.revert(mv)?;
    Ok(previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{Color, PieceKind, RookMove};

    fn piece(kind: PieceKind, color: Color, square: Square) -> Piece {
        Piece::new(kind, color, square)
    }

    #[test]
    fn test_missing_mover() {
        let placement = Placement::empty();
        let pawn = piece(PieceKind::Pawn, Color::White, Square::E2);
        let mv = Move::single(pawn, pawn.moved_to(Square::E4), None);
        assert_eq!(
            make_move(&placement, &mv),
            Err(MoveError::IllegalState(StateError::MissingPiece {
                square: Square::E2
            }))
        );
    }

    #[test]
    fn test_mover_mismatch() {
        let knight = piece(PieceKind::Knight, Color::White, Square::E2);
        let placement: Placement = [knight].into_iter().collect();
        let pawn = piece(PieceKind::Pawn, Color::White, Square::E2);
        let mv = Move::single(pawn, pawn.moved_to(Square::E3), None);
        assert!(matches!(
            make_move(&placement, &mv),
            Err(MoveError::IllegalState(StateError::PieceMismatch { .. }))
        ));
    }

    #[test]
    fn test_capture_resolved_from_destination() {
        let rook = piece(PieceKind::Rook, Color::White, Square::A1);
        let victim = piece(PieceKind::Knight, Color::Black, Square::A7);
        let placement: Placement = [rook, victim].into_iter().collect();
        let mv = Move::single(rook, rook.moved_to(Square::A7), None);
        let (after, resolved) = make_move(&placement, &mv).unwrap();
        assert_eq!(resolved.captures(), Some(victim));
        assert_eq!(after.get(Square::A7), Some(rook.moved_to(Square::A7)));
        assert_eq!(after.len(), 1);
        assert_eq!(unmake_move(&after, &resolved).unwrap(), placement);
    }

    #[test]
    fn test_same_color_capture_rejected() {
        let queen = piece(PieceKind::Queen, Color::White, Square::D1);
        let own = piece(PieceKind::Pawn, Color::White, Square::D2);
        let placement: Placement = [queen, own].into_iter().collect();
        let mv = Move::single(queen, queen.moved_to(Square::D2), None);
        assert_eq!(
            make_move(&placement, &mv),
            Err(MoveError::IllegalCapture {
                captor: queen,
                captured: own
            })
        );
    }

    #[test]
    fn test_en_passant_round_trip() {
        let pawn = piece(PieceKind::Pawn, Color::White, Square::B5);
        let victim = piece(PieceKind::Pawn, Color::Black, Square::C5);
        let placement: Placement = [pawn, victim].into_iter().collect();
        let mv = Move::single(pawn, pawn.moved_to(Square::C6), Some(victim));
        let (after, resolved) = make_move(&placement, &mv).unwrap();
        assert!(after.is_vacant(Square::C5));
        assert!(after.is_vacant(Square::B5));
        assert_eq!(resolved, mv);
        assert_eq!(unmake_move(&after, &resolved).unwrap(), placement);
    }

    #[test]
    fn test_declared_capture_must_be_present() {
        let pawn = piece(PieceKind::Pawn, Color::White, Square::B5);
        let victim = piece(PieceKind::Pawn, Color::Black, Square::C5);
        let placement: Placement = [pawn].into_iter().collect();
        let mv = Move::single(pawn, pawn.moved_to(Square::C6), Some(victim));
        assert!(matches!(
            make_move(&placement, &mv),
            Err(MoveError::IllegalState(StateError::MissingPiece { .. }))
        ));
    }

    #[test]
    fn test_declared_capture_disagrees_with_destination() {
        let pawn = piece(PieceKind::Pawn, Color::White, Square::B5);
        let declared = piece(PieceKind::Pawn, Color::Black, Square::C5);
        let observed = piece(PieceKind::Knight, Color::Black, Square::C6);
        let placement: Placement = [pawn, declared, observed].into_iter().collect();
        let mv = Move::single(pawn, pawn.moved_to(Square::C6), Some(declared));
        let before = placement.clone();
        assert_eq!(
            make_move(&placement, &mv),
            Err(MoveError::IllegalState(StateError::CaptureMismatch {
                declared,
                observed
            }))
        );
        assert_eq!(placement, before);
    }

    #[test]
    fn test_castling_moves_king_and_rook() {
        let king = piece(PieceKind::King, Color::White, Square::E1);
        let rook = piece(PieceKind::Rook, Color::White, Square::H1);
        let placement: Placement = [king, rook].into_iter().collect();
        let mv = Move::Castling(CastlingMove {
            start: king,
            end: king.moved_to(Square::G1),
            castled_rook: RookMove {
                start: rook,
                end: rook.moved_to(Square::F1),
            },
        });
        let (after, _) = make_move(&placement, &mv).unwrap();
        assert_eq!(after.get(Square::G1).map(Piece::kind), Some(PieceKind::King));
        assert_eq!(after.get(Square::F1).map(Piece::kind), Some(PieceKind::Rook));
        assert_eq!(after.len(), 2);
        assert_eq!(unmake_move(&after, &mv).unwrap(), placement);
    }

    #[test]
    fn test_castling_into_occupied_square() {
        let king = piece(PieceKind::King, Color::Black, Square::E8);
        let rook = piece(PieceKind::Rook, Color::Black, Square::A8);
        let blocker = piece(PieceKind::Bishop, Color::White, Square::C8);
        let placement: Placement = [king, rook, blocker].into_iter().collect();
        let mv = Move::Castling(CastlingMove {
            start: king,
            end: king.moved_to(Square::C8),
            castled_rook: RookMove {
                start: rook,
                end: rook.moved_to(Square::D8),
            },
        });
        assert_eq!(
            make_move(&placement, &mv),
            Err(MoveError::IllegalState(StateError::SquareOccupied {
                square: Square::C8,
                occupant: blocker
            }))
        );
    }

    #[test]
    fn test_unmake_rejects_occupied_start() {
        let knight = piece(PieceKind::Knight, Color::White, Square::G1);
        let moved = knight.moved_to(Square::F3);
        let intruder = piece(PieceKind::Bishop, Color::Black, Square::G1);
        let placement: Placement = [moved, intruder].into_iter().collect();
        let mv = Move::single(knight, moved, None);
        assert!(matches!(
            unmake_move(&placement, &mv),
            Err(MoveError::IllegalState(StateError::SquareOccupied { .. }))
        ));
    }

    #[test]
    fn test_unmake_rejects_wrong_end_piece() {
        let knight = piece(PieceKind::Knight, Color::White, Square::G1);
        let other = piece(PieceKind::Bishop, Color::White, Square::F3);
        let placement: Placement = [other].into_iter().collect();
        let mv = Move::single(knight, knight.moved_to(Square::F3), None);
        assert!(matches!(
            unmake_move(&placement, &mv),
            Err(MoveError::IllegalState(StateError::PieceMismatch { .. }))
        ));
    }
}
