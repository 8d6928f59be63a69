use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::placement::Placement;
use super::state::Board;
use super::types::{CastleRights, CastleSide, Color, Move, Piece, PieceKind, Square};

/// Castling letters in the order they are written.
const CASTLING_LETTERS: [(char, Color, CastleSide); 4] = [
    ('K', Color::White, CastleSide::Short),
    ('Q', Color::White, CastleSide::Long),
    ('k', Color::Black, CastleSide::Short),
    ('q', Color::Black, CastleSide::Long),
];

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// All six fields are required. Pawns standing on their starting rank are
    /// treated as unmoved.
    pub fn from_notation(text: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        let [placement, side, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        };

        let placement = parse_placement(placement)?;

        let to_move = match *side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let castle_rights = parse_castling(castling)?;
        let en_passant_target = parse_en_passant(en_passant, to_move)?;

        let halfmove_clock = halfmove
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock {
                found: halfmove.to_string(),
            })?;

        let invalid_fullmove = || FenError::InvalidFullmoveNumber {
            found: fullmove.to_string(),
        };
        let fullmove = fullmove
            .parse::<u32>()
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(invalid_fullmove)?;
        let ply = fullmove
            .checked_mul(2)
            .and_then(|p| p.checked_sub(1))
            .and_then(|p| p.checked_add(u32::from(to_move == Color::Black)))
            .ok_or_else(invalid_fullmove)?;

        Ok(Board {
            ply,
            halfmove_clock,
            to_move,
            placement,
            castle_rights,
            en_passant_target,
        })
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_notation(&self) -> String {
        format!(
            "{} {} {}",
            self.position_fields(),
            self.halfmove_clock,
            self.fullmove_number()
        )
    }

    /// Placement, side to move, castling and en passant fields.
    pub(crate) fn position_fields(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                match self.placement.get(Square::at(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling: String = CASTLING_LETTERS
            .iter()
            .filter(|(_, color, side)| self.castle_rights.has(*color, *side))
            .map(|(letter, _, _)| *letter)
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {}", rows.join("/"), active, castling, ep)
    }

    /// Find the legal move written in UCI long algebraic notation (e.g.
    /// "e2e4", "e7e8q", "e1g1").
    ///
    /// # Example
    /// ```
    /// use chess_oracle::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.find_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn find_move(&self, uci: &str) -> Result<Move, MoveParseError> {
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: uci.to_string(),
        };
        if !uci.is_ascii() {
            return Err(invalid_square());
        }

        let from: Square = uci[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = uci[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match uci[4..].chars().next() {
            None => None,
            Some(c) => Some(
                PieceKind::from_char(c)
                    .filter(|kind| PieceKind::PROMOTIONS.contains(kind))
                    .ok_or(MoveParseError::InvalidPromotion { char: c })?,
            ),
        };

        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: uci.to_string(),
            })
    }
}

fn parse_placement(field: &str) -> Result<Placement, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount { found: ranks.len() });
    }

    let mut placement = Placement::empty();
    for (rank, text) in (0..8u8).rev().zip(ranks) {
        let mut file = 0usize;
        for c in text.chars() {
            if let Some(gap) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += gap as usize;
                continue;
            }
            let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            if file >= 8 {
                return Err(FenError::RankLength {
                    rank: rank + 1,
                    files: file + 1,
                });
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            placement.insert(Piece::new(kind, color, Square::at(rank, file as u8)));
            file += 1;
        }
        if file != 8 {
            return Err(FenError::RankLength {
                rank: rank + 1,
                files: file,
            });
        }
    }
    Ok(placement)
}

fn parse_castling(field: &str) -> Result<CastleRights, FenError> {
    if field == "-" {
        return Ok(CastleRights::none());
    }
    field.chars().try_fold(CastleRights::none(), |rights, c| {
        CASTLING_LETTERS
            .iter()
            .find(|(letter, _, _)| *letter == c)
            .map(|&(_, color, side)| rights.with(color, side))
            .ok_or(FenError::InvalidCastling { char: c })
    })
}

/// The target must sit on the rank a pawn of the side that just moved skipped.
fn parse_en_passant(field: &str, to_move: Color) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let square: Square = field.parse().map_err(|_| invalid())?;
    if square.rank() != to_move.en_passant_rank() {
        return Err(invalid());
    }
    Ok(Some(square))
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_notation(s)
    }
}
