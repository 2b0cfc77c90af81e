//! Depth-first N-Queens search with symmetry expansion.
//!
//! The solver places one queen in the left half of row 0, searches depth
//! first for the first complete non-attacking placement, and expands that
//! single placement into its orbit under the eight symmetries of the square.
//!
//! # Examples
//!
//! ```
//! let solutions = queens_solver::search_n_queens(4)?;
//! assert_eq!(solutions.len(), 2);
//!
//! let solutions = queens_solver::search_n_queens(3)?;
//! assert!(solutions.is_empty());
//! # Ok::<(), queens_core::BoardError>(())
//! ```

use queens_core::{BoardError, BoardSize};

pub use self::{queens_solver::*, search_node::SearchNode, solutions::Solutions};

mod queens_solver;
mod search_node;
mod solutions;
pub mod symmetry;

/// Searches a board of `size` and returns the symmetry orbit of the first
/// placement found.
///
/// Sizes 2 and 3 have no placement and yield an empty set.
///
/// # Errors
///
/// Returns [`BoardError::InvalidSize`] for size 0 and
/// [`BoardError::SizeTooLarge`] above [`BoardSize::MAX`].
pub fn search_n_queens(size: usize) -> Result<Solutions, BoardError> {
    let size = BoardSize::new(size)?;
    Ok(QueensSolver::new(size).search_n_queens())
}
