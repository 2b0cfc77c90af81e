//! Command-line front end for the N-Queens solver.
//!
//! The binary parses a board size, runs
//! [`QueensSolver`](queens_solver::QueensSolver) and prints the resulting
//! placements in one of the [`OutputFormat`]s provided here.

pub use self::render::*;

mod render;
