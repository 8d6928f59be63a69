//! Position notation and move text through the public crate API.

use chess_oracle::{Board, Color, FenError, Move, MoveParseError, PieceKind, Square};
use test_case::test_case;

#[test]
fn starting_position_round_trip() {
    let text = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let board: Board = text.parse().unwrap();
    assert_eq!(board, Board::new());
    assert_eq!(board.to_notation(), text);
}

#[test]
fn fields_are_read() {
    let board = Board::from_notation("4k3/8/8/3pP3/8/8/8/4K3 w - d6 5 40").unwrap();
    assert_eq!(board.to_move(), Color::White);
    assert_eq!(board.en_passant_target(), Some(Square::D6));
    assert_eq!(board.halfmove_clock(), 5);
    assert_eq!(board.fullmove_number(), 40);
    assert_eq!(
        board.placement().get(Square::E5).map(|p| p.kind()),
        Some(PieceKind::Pawn)
    );
}

#[test_case("8/8/8/8/8/8/8/8 w - -", FenError::WrongFieldCount { found: 4 }; "missing clocks")]
#[test_case("8/8/8/8/8/8/8 w - - 0 1", FenError::RankCount { found: 7 }; "seven ranks")]
#[test_case("8/8/8/8/8/8/8/4X3 w - - 0 1", FenError::InvalidPiece { char: 'X' }; "unknown piece")]
#[test_case("8/8/8/8/8/8/8/7 w - - 0 1", FenError::RankLength { rank: 1, files: 7 }; "short rank")]
#[test_case("8/8/8/8/8/8/8/8 x - - 0 1", FenError::InvalidSideToMove { found: "x".into() }; "bad side")]
#[test_case("8/8/8/8/8/8/8/8 w KZ - 0 1", FenError::InvalidCastling { char: 'Z' }; "bad castling letter")]
#[test_case("8/8/8/8/8/8/8/8 w - e9 0 1", FenError::InvalidEnPassant { found: "e9".into() }; "off-board target")]
#[test_case("8/8/8/8/8/8/8/8 w - e3 0 1", FenError::InvalidEnPassant { found: "e3".into() }; "target on the wrong rank")]
#[test_case("8/8/8/8/8/8/8/8 w - - x 1", FenError::InvalidHalfmoveClock { found: "x".into() }; "bad halfmove clock")]
#[test_case("8/8/8/8/8/8/8/8 w - - 0 0", FenError::InvalidFullmoveNumber { found: "0".into() }; "fullmove zero")]
fn malformed_notation_is_rejected(text: &str, expected: FenError) {
    assert_eq!(Board::from_notation(text), Err(expected));
}

#[test]
fn boards_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Board>();
    assert_send_sync::<Move>();
}

#[test]
fn move_text() {
    let board = Board::new();
    assert_eq!(board.find_move("g1f3").unwrap().to_string(), "g1f3");
    assert_eq!(
        board.find_move("e2"),
        Err(MoveParseError::InvalidLength { len: 2 })
    );
    assert!(matches!(
        board.find_move("z2e4"),
        Err(MoveParseError::InvalidSquare { .. })
    ));
    assert!(matches!(
        board.find_move("e2e5"),
        Err(MoveParseError::IllegalMove { .. })
    ));

    let promo = Board::from_notation("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    assert_eq!(promo.find_move("a7a8q").unwrap().to_string(), "a7a8q");
    assert_eq!(
        promo.find_move("a7a8k"),
        Err(MoveParseError::InvalidPromotion { char: 'k' })
    );
}

#[test]
fn notation_follows_a_game() {
    let mut board = Board::new();
    for uci in ["e2e4", "c7c5", "g1f3"] {
        board = board.apply_move(&board.find_move(uci).unwrap()).unwrap();
    }
    assert_eq!(
        board.to_notation(),
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
}
