//! Perft: count every position reachable in a fixed number of plies.
//!
//! Counts from well-known positions are the standard way to check a move
//! generator, since a single wrong move shows up as a count mismatch.
//!
//! # Example
//! ```
//! use chess_oracle::board::Board;
//! use chess_oracle::perft::perft;
//!
//! let counts = perft(&Board::new(), 3).unwrap();
//! assert_eq!(counts.as_slice(), &[20, 400, 8902]);
//! ```

use std::collections::HashMap;
use std::ops::Index;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;

use crate::board::{Board, Move, MoveError, PositionKey};

/// Number of positions at each depth, for depths `1..=depth`.
///
/// Every depth is present; a tree that dies out (mate or stalemate) simply
/// records zeros below that point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeCounts(Vec<u64>);

impl NodeCounts {
    fn zeroed(depth: usize) -> Self {
        NodeCounts(vec![0; depth])
    }

    /// Count at `depth` (1-based), if it was searched.
    #[must_use]
    pub fn get(&self, depth: usize) -> Option<u64> {
        depth.checked_sub(1).and_then(|i| self.0.get(i).copied())
    }

    /// Deepest depth counted.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Positions at the deepest depth, the usual perft number.
    #[must_use]
    pub fn leaves(&self) -> u64 {
        self.0.last().copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// `(depth, count)` pairs, shallowest first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.0.iter().enumerate().map(|(i, &count)| (i + 1, count))
    }

    fn add_shifted(&mut self, offset: usize, counts: &[u64]) {
        for (slot, count) in self.0[offset..].iter_mut().zip(counts) {
            *slot += count;
        }
    }
}

impl Index<usize> for NodeCounts {
    type Output = u64;

    /// Indexed by depth, starting at 1.
    fn index(&self, depth: usize) -> &Self::Output {
        &self.0[depth - 1]
    }
}

/// How a perft run is carried out. All strategies produce identical counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PerftConfig {
    /// Plies to search below the root
    pub depth: usize,
    /// Worker threads; 0 and 1 both mean single-threaded
    pub threads: usize,
    /// Reuse subtree counts for positions reached by different move orders
    pub transpositions: bool,
}

impl Default for PerftConfig {
    fn default() -> Self {
        PerftConfig {
            depth: 1,
            threads: 1,
            transpositions: false,
        }
    }
}

impl PerftConfig {
    #[must_use]
    pub fn new(depth: usize) -> Self {
        PerftConfig {
            depth,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    #[must_use]
    pub const fn with_transpositions(mut self, enabled: bool) -> Self {
        self.transpositions = enabled;
        self
    }
}

/// Per-depth node counts for depths `1..=depth` below `board`.
pub fn perft(board: &Board, depth: usize) -> Result<NodeCounts, MoveError> {
    perft_with(board, &PerftConfig::new(depth))
}

/// Run perft with an explicit strategy.
pub fn perft_with(board: &Board, config: &PerftConfig) -> Result<NodeCounts, MoveError> {
    let counts = if config.threads > 1 && config.depth > 1 {
        count_parallel(board, config)?
    } else if config.transpositions {
        let mut cache = SubtreeCache::new();
        NodeCounts(count_cached(board, config.depth, &mut cache)?)
    } else {
        let mut counts = NodeCounts::zeroed(config.depth);
        count_plain(board, &mut counts.0)?;
        counts
    };

    #[cfg(feature = "logging")]
    log::debug!(
        "perft depth {} ({} threads, transpositions {}): {} leaves, {} nodes",
        config.depth,
        config.threads.max(1),
        config.transpositions,
        counts.leaves(),
        counts.total()
    );

    Ok(counts)
}

/// Leaf count at `depth` below each legal root move.
pub fn perft_divide(board: &Board, depth: usize) -> Result<Vec<(Move, u64)>, MoveError> {
    if depth == 0 {
        return Ok(Vec::new());
    }
    board
        .legal_moves()
        .into_iter()
        .map(|mv| -> Result<(Move, u64), MoveError> {
            let child = board.apply_move(&mv)?;
            let leaves = if depth == 1 {
                1
            } else {
                let mut counts = NodeCounts::zeroed(depth - 1);
                count_plain(&child, &mut counts.0)?;
                counts.leaves()
            };
            #[cfg(feature = "logging")]
            log::trace!("{mv}: {leaves}");
            Ok((mv, leaves))
        })
        .collect()
}

/// Adds the positions found at each remaining depth into `counts`, whose
/// first slot is one ply below `board`.
fn count_plain(board: &Board, counts: &mut [u64]) -> Result<(), MoveError> {
    let Some((here, deeper)) = counts.split_first_mut() else {
        return Ok(());
    };
    let moves = board.legal_moves();
    *here += moves.len() as u64;
    if deeper.is_empty() {
        return Ok(());
    }
    for mv in &moves {
        count_plain(&board.apply_move(mv)?, deeper)?;
    }
    Ok(())
}

type SubtreeCache = HashMap<(PositionKey, usize), Vec<u64>>;

/// Like [`count_plain`], but remembers the counts below every position so a
/// transposition is only walked once.
fn count_cached(
    board: &Board,
    remaining: usize,
    cache: &mut SubtreeCache,
) -> Result<Vec<u64>, MoveError> {
    if remaining == 0 {
        return Ok(Vec::new());
    }
    let key = (board.position_key(), remaining);
    if let Some(counts) = cache.get(&key) {
        return Ok(counts.clone());
    }

    let moves = board.legal_moves();
    let mut counts = vec![0; remaining];
    counts[0] = moves.len() as u64;
    if remaining > 1 {
        for mv in &moves {
            let below = count_cached(&board.apply_move(mv)?, remaining - 1, cache)?;
            for (slot, count) in counts[1..].iter_mut().zip(&below) {
                *slot += count;
            }
        }
    }

    cache.insert(key, counts.clone());
    Ok(counts)
}

/// Split the tree by root move. Workers claim root moves from a shared
/// cursor and fold their subtree counts into one total.
fn count_parallel(board: &Board, config: &PerftConfig) -> Result<NodeCounts, MoveError> {
    let roots = board.legal_moves();
    let mut counts = NodeCounts::zeroed(config.depth);
    counts.0[0] = roots.len() as u64;

    let cursor = AtomicUsize::new(0);
    let totals = Mutex::new(NodeCounts::zeroed(config.depth - 1));
    let failure: Mutex<Option<MoveError>> = Mutex::new(None);
    let workers = config.threads.min(roots.len());

    thread::scope(|scope| {
        for _ in 0..workers {
            scope.spawn(|| {
                let mut cache = SubtreeCache::new();
                loop {
                    let idx = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(mv) = roots.get(idx) else {
                        break;
                    };
                    let below = board.apply_move(&mv).and_then(|child| {
                        if config.transpositions {
                            count_cached(&child, config.depth - 1, &mut cache)
                        } else {
                            let mut below = vec![0; config.depth - 1];
                            count_plain(&child, &mut below).map(|()| below)
                        }
                    });
                    match below {
                        Ok(below) => totals.lock().add_shifted(0, &below),
                        Err(err) => {
                            failure.lock().get_or_insert(err);
                            break;
                        }
                    }
                }
            });
        }
    });

    if let Some(err) = failure.into_inner() {
        return Err(err);
    }
    counts.add_shifted(1, totals.into_inner().as_slice());
    Ok(counts)
}
