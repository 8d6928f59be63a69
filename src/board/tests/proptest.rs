//! Property-based tests using proptest.

use crate::board::{
    king_in_check, make_move, unmake_move, Board, Move, Placement, PieceKind,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Plays up to `plies` random legal moves, stopping early at mate or stalemate.
fn random_game(seed: u64, plies: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut boards = vec![Board::new()];
    for _ in 0..plies {
        let Some(board) = boards.last() else { break };
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        let next = board.apply_move(&mv).unwrap();
        boards.push(next);
    }
    boards
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: unmaking every move in reverse restores each earlier placement
    #[test]
    fn prop_make_unmake_restores_placement(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut history: Vec<(Placement, Move)> = Vec::new();

        for _ in 0..num_moves {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let (_, resolved) = make_move(board.placement(), &mv).unwrap();
            history.push((board.placement().clone(), resolved));
            board = board.apply_move(&mv).unwrap();
        }

        let mut placement = board.placement().clone();
        while let Some((before, mv)) = history.pop() {
            placement = unmake_move(&placement, &mv).unwrap();
            prop_assert_eq!(&placement, &before, "unmaking {}", mv);
        }
        let start = Board::new();
        prop_assert_eq!(&placement, start.placement());
    }

    /// Property: notation round-trip preserves the whole board
    #[test]
    fn prop_notation_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        for board in random_game(seed, num_moves) {
            let text = board.to_notation();
            let restored = Board::from_notation(&text).unwrap();
            prop_assert_eq!(restored.to_notation(), text);
            prop_assert_eq!(&restored, &board);
            prop_assert_eq!(restored.legal_moves().len(), board.legal_moves().len());
        }
    }

    /// Property: no legal move leaves the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..20usize) {
        for board in random_game(seed, num_moves) {
            let mover = board.to_move();
            for mv in &board.legal_moves() {
                let (after, _) = make_move(board.placement(), mv).unwrap();
                prop_assert!(!king_in_check(&after, mover),
                    "Legal move left king in check: {} from {}", mv, board.to_notation());
            }
        }
    }

    /// Property: pawn moves and captures reset the halfmove clock, others advance it
    #[test]
    fn prop_halfmove_clock_rules(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();

        for _ in 0..num_moves {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let pawn_move = !mv.is_castling() && board
                .placement()
                .get(mv.from())
                .is_some_and(|p| p.kind() == PieceKind::Pawn);
            let next = board.apply_move(&mv).unwrap();

            if pawn_move || mv.is_capture() {
                prop_assert_eq!(next.halfmove_clock(), 0);
            } else {
                prop_assert_eq!(next.halfmove_clock(), board.halfmove_clock() + 1);
            }
            prop_assert_eq!(next.ply(), board.ply() + 1);
            prop_assert_ne!(next.to_move(), board.to_move());
            board = next;
        }
    }
}
