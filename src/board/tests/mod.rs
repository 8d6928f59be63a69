//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts from well-known positions
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `castling.rs` - Castling generation and rights
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod proptest;
