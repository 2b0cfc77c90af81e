//! Symmetry expansion of a solved board.
//!
//! The eight symmetries of the square (four rotations, each optionally
//! followed by a horizontal reflection) map a non-attacking placement to
//! another non-attacking placement.

use queens_core::Chessboard;

use crate::Solutions;

/// Returns the three successive quarter-turn rotations of `board`.
///
/// # Examples
///
/// ```
/// use queens_core::{Chessboard, Queen};
/// use queens_solver::symmetry::make_rotations;
///
/// let mut board = Chessboard::with_size(3)?;
/// board.add_queen(Queen::new(0, 0));
///
/// let [quarter, half, three_quarters] = make_rotations(&board);
/// assert!(quarter.contains(Queen::new(0, 2)));
/// assert!(half.contains(Queen::new(2, 2)));
/// assert!(three_quarters.contains(Queen::new(2, 0)));
/// # Ok::<(), queens_core::BoardError>(())
/// ```
#[must_use]
pub fn make_rotations(board: &Chessboard) -> [Chessboard; 3] {
    let quarter = board.rotate();
    let half = quarter.rotate();
    let three_quarters = half.rotate();
    [quarter, half, three_quarters]
}

/// Returns the orbit of `board` under the eight symmetries of the square.
///
/// Transforms that reproduce an already-present placement collapse, so a
/// board with self-symmetry yields fewer than eight placements.
///
/// # Examples
///
/// ```
/// use queens_core::Chessboard;
/// use queens_solver::symmetry::generate_symmetry_solutions;
///
/// let board: Chessboard = ".Q..\n...Q\nQ...\n..Q.".parse()?;
/// let solutions = generate_symmetry_solutions(&board);
/// assert_eq!(solutions.len(), 2);
/// # Ok::<(), queens_core::BoardError>(())
/// ```
#[must_use]
pub fn generate_symmetry_solutions(board: &Chessboard) -> Solutions {
    let mut solutions = Solutions::new(board.size());
    let rotations = make_rotations(board);
    for rotated in std::iter::once(board).chain(&rotations) {
        solutions.insert(rotated);
        solutions.insert(&rotated.reflect_horizontal());
    }
    solutions
}
