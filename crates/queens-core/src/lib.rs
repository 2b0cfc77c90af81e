//! Core data structures for N-Queens placement.
//!
//! This crate provides the board model used by the search engine: validated
//! board sizes, queen coordinates, an occupancy-tracking chessboard and the
//! frozen placement type used to compare solutions by value.
//!
//! # Overview
//!
//! 1. **Core types**
//!    - [`board_size`]: A positive board size, validated on construction
//!    - [`queen`]: A `(row, column)` coordinate on the board
//!
//! 2. **Board model**
//!    - [`chessboard`]: A partial or complete placement with legality queries
//!      and geometric transforms (rotate, reflect)
//!    - [`placement`]: An immutable, hashable queen set
//!
//! 3. **Containers**
//!    - [`line_set`]: Bitset over line indices (rows, columns, diagonals)
//!
//! # Examples
//!
//! ```
//! use queens_core::{BoardSize, Chessboard, Queen};
//!
//! let size = BoardSize::new(4)?;
//! let mut board = Chessboard::new(size);
//!
//! board.add_queen(Queen::new(0, 1));
//! assert!(!board.can_add_queen(Queen::new(1, 2))); // diagonal
//! assert!(board.can_add_queen(Queen::new(1, 3)));
//! # Ok::<(), queens_core::BoardError>(())
//! ```

pub mod board_size;
pub mod chessboard;
pub mod line_set;
pub mod placement;
pub mod queen;

mod error;

pub use self::{
    board_size::BoardSize, chessboard::Chessboard, error::BoardError, line_set::LineSet,
    placement::Placement, queen::Queen,
};
