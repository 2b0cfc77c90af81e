//! The N×N board model.
//!
//! This module provides [`Chessboard`], a partial or complete placement of
//! queens on a square board. Besides the placed queens it tracks occupied
//! rows, columns and both diagonal directions in [`LineSet`]s, so legality
//! queries do not scan the placed queens.
//!
//! # Text format
//!
//! Boards render one row per line, `Q` for a queen and `.` for an empty
//! square. Parsing accepts the same format; whitespace inside a row and blank
//! lines are ignored, and `_` is accepted as an empty square.
//!
//! ```
//! use queens_core::Chessboard;
//!
//! let board: Chessboard = "
//!     . Q . .
//!     . . . Q
//!     Q . . .
//!     . . Q .
//! "
//! .parse()?;
//!
//! assert!(board.is_complete());
//! assert_eq!(board.to_string(), ".Q..\n...Q\nQ...\n..Q.");
//! # Ok::<(), queens_core::BoardError>(())
//! ```

use std::{
    collections::BTreeSet,
    fmt::{self, Display},
    str::FromStr,
};

use crate::{BoardError, BoardSize, LineSet, Placement, Queen};

/// A board of fixed size holding a set of queens.
///
/// Queens form a set keyed by coordinate. Boards built through
/// [`can_add_queen`](Self::can_add_queen)-checked placements never hold two
/// queens on the same row, column or diagonal.
///
/// # Examples
///
/// ```
/// use queens_core::{BoardSize, Chessboard, Queen};
///
/// let mut board = Chessboard::new(BoardSize::new(4)?);
/// board.add_queen(Queen::new(0, 0));
///
/// assert!(!board.can_add_queen(Queen::new(0, 1))); // same row
/// assert!(!board.can_add_queen(Queen::new(1, 0))); // same column
/// assert!(!board.can_add_queen(Queen::new(1, 1))); // same diagonal
/// assert!(board.can_add_queen(Queen::new(1, 2)));
///
/// assert_eq!(board.available_rows().collect::<Vec<_>>(), vec![1, 2, 3]);
/// # Ok::<(), queens_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chessboard {
    size: BoardSize,
    queens: BTreeSet<Queen>,
    rows: LineSet,
    columns: LineSet,
    /// Indexed by `row - column + size - 1`.
    diagonals: LineSet,
    /// Indexed by `row + column`.
    anti_diagonals: LineSet,
}

impl Chessboard {
    /// Creates an empty board.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            queens: BTreeSet::new(),
            rows: LineSet::new(),
            columns: LineSet::new(),
            diagonals: LineSet::new(),
            anti_diagonals: LineSet::new(),
        }
    }

    /// Creates an empty board from a raw size.
    ///
    /// # Errors
    ///
    /// Returns the [`BoardSize::new`] error if `size` is not a supported
    /// positive size.
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        Ok(Self::new(BoardSize::new(size)?))
    }

    /// Rebuilds a board from a frozen placement.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] or [`BoardError::UnderAttack`] if
    /// the placement does not fit a board of `size` as a non-attacking set.
    pub fn from_placement(size: BoardSize, placement: &Placement) -> Result<Self, BoardError> {
        let mut board = Self::new(size);
        for queen in placement.iter() {
            board.try_add_queen(queen)?;
        }
        Ok(board)
    }

    /// Returns the board size.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the number of placed queens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queens.len()
    }

    /// Returns `true` if no queen is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queens.is_empty()
    }

    /// Returns the placed queens in row-major order.
    pub fn queens(&self) -> impl DoubleEndedIterator<Item = Queen> + ExactSizeIterator + '_ {
        self.queens.iter().copied()
    }

    /// Returns `true` if the queen is placed on this board.
    #[must_use]
    pub fn contains(&self, queen: Queen) -> bool {
        self.queens.contains(&queen)
    }

    /// Returns `true` if the queen's square lies on the board.
    #[must_use]
    pub const fn in_bounds(&self, queen: Queen) -> bool {
        queen.row() <= self.size.last() && queen.column() <= self.size.last()
    }

    /// Returns the set of rows holding no queen.
    #[must_use]
    pub const fn open_rows(&self) -> LineSet {
        LineSet::prefix(self.size.get()).difference(self.rows)
    }

    /// Returns the set of columns holding no queen.
    #[must_use]
    pub const fn open_columns(&self) -> LineSet {
        LineSet::prefix(self.size.get()).difference(self.columns)
    }

    /// Returns the rows holding no queen, in ascending order.
    pub fn available_rows(
        &self,
    ) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + use<> {
        self.open_rows().into_iter().map(to_line)
    }

    /// Returns the columns holding no queen, in ascending order.
    pub fn available_columns(
        &self,
    ) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + use<> {
        self.open_columns().into_iter().map(to_line)
    }

    /// Returns `true` if every row holds a queen.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.rows.len() == self.size.get()
    }

    /// Returns `true` if the queen can be placed without sharing a row,
    /// column or diagonal with any placed queen.
    ///
    /// Squares outside the board are never placeable.
    #[must_use]
    pub const fn can_add_queen(&self, queen: Queen) -> bool {
        self.in_bounds(queen)
            && !self.rows.contains(queen.row() as usize)
            && !self.columns.contains(queen.column() as usize)
            && !self.diagonals.contains(self.diagonal(queen))
            && !self.anti_diagonals.contains(Self::anti_diagonal(queen))
    }

    /// Places a queen without checking for attacks.
    ///
    /// The caller is responsible for having checked
    /// [`can_add_queen`](Self::can_add_queen); placing an attacked queen
    /// breaks the one-queen-per-line invariant. Debug builds assert it.
    ///
    /// # Panics
    ///
    /// Panics if the queen lies outside the board.
    pub fn add_queen(&mut self, queen: Queen) {
        assert!(
            self.in_bounds(queen),
            "queen {queen} is outside a {size}x{size} board",
            size = self.size
        );
        debug_assert!(
            self.can_add_queen(queen),
            "queen {queen} is attacked on board\n{self}"
        );
        self.insert(queen);
    }

    /// Places a queen after checking that it is on the board and not attacked.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the square is off the board and
    /// [`BoardError::UnderAttack`] if a placed queen attacks it.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens_core::{BoardError, Chessboard, Queen};
    ///
    /// let mut board = Chessboard::with_size(4)?;
    /// board.try_add_queen(Queen::new(0, 0))?;
    /// assert_eq!(
    ///     board.try_add_queen(Queen::new(2, 2)),
    ///     Err(BoardError::UnderAttack { queen: Queen::new(2, 2) })
    /// );
    /// # Ok::<(), BoardError>(())
    /// ```
    pub fn try_add_queen(&mut self, queen: Queen) -> Result<(), BoardError> {
        if !self.in_bounds(queen) {
            return Err(BoardError::OutOfBounds {
                queen,
                size: self.size.get(),
            });
        }
        if !self.can_add_queen(queen) {
            return Err(BoardError::UnderAttack { queen });
        }
        self.insert(queen);
        Ok(())
    }

    /// Removes a queen, undoing [`add_queen`](Self::add_queen).
    ///
    /// Returns `true` if the queen was on the board.
    pub fn remove_queen(&mut self, queen: Queen) -> bool {
        if !self.queens.remove(&queen) {
            return false;
        }
        self.rows.remove(queen.row() as usize);
        self.columns.remove(queen.column() as usize);
        self.diagonals.remove(self.diagonal(queen));
        self.anti_diagonals.remove(Self::anti_diagonal(queen));
        true
    }

    /// Returns `true` if no two placed queens attack each other.
    ///
    /// Unlike [`can_add_queen`](Self::can_add_queen) this compares every pair
    /// of queens, so it also detects boards corrupted through unchecked
    /// [`add_queen`](Self::add_queen) calls.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let queens: Vec<_> = self.queens().collect();
        queens
            .iter()
            .enumerate()
            .all(|(i, a)| queens[i + 1..].iter().all(|b| !a.attacks(*b)))
    }

    /// Returns the board rotated a quarter turn clockwise.
    ///
    /// A queen at `(row, column)` moves to `(column, size - 1 - row)`. Four
    /// rotations give back the original board.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens_core::{Chessboard, Queen};
    ///
    /// let mut board = Chessboard::with_size(4)?;
    /// board.add_queen(Queen::new(0, 1));
    ///
    /// let rotated = board.rotate();
    /// assert!(rotated.contains(Queen::new(1, 3)));
    /// assert_eq!(rotated.rotate().rotate().rotate(), board);
    /// # Ok::<(), queens_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn rotate(&self) -> Self {
        let last = self.size.last();
        self.map_queens(|q| Queen::new(q.column(), last - q.row()))
    }

    /// Returns the board mirrored left to right.
    ///
    /// A queen at `(row, column)` moves to `(row, size - 1 - column)`.
    #[must_use]
    pub fn reflect_horizontal(&self) -> Self {
        let last = self.size.last();
        self.map_queens(|q| Queen::new(q.row(), last - q.column()))
    }

    /// Returns the board mirrored top to bottom.
    ///
    /// A queen at `(row, column)` moves to `(size - 1 - row, column)`.
    #[must_use]
    pub fn reflect_vertical(&self) -> Self {
        let last = self.size.last();
        self.map_queens(|q| Queen::new(last - q.row(), q.column()))
    }

    /// Returns the board mirrored along its main diagonal.
    #[must_use]
    pub fn transpose(&self) -> Self {
        self.map_queens(|q| Queen::new(q.column(), q.row()))
    }

    /// Returns the frozen queen set of this board.
    #[must_use]
    pub fn to_placement(&self) -> Placement {
        self.queens().collect()
    }

    /// Returns the static starting-column bound for `size`.
    ///
    /// See [`BoardSize::middle`].
    #[must_use]
    pub const fn static_middle(size: BoardSize) -> u8 {
        size.middle()
    }

    fn map_queens(&self, f: impl Fn(Queen) -> Queen) -> Self {
        let mut board = Self::new(self.size);
        for queen in self.queens() {
            board.insert(f(queen));
        }
        board
    }

    fn insert(&mut self, queen: Queen) {
        self.queens.insert(queen);
        self.rows.insert(queen.row() as usize);
        self.columns.insert(queen.column() as usize);
        self.diagonals.insert(self.diagonal(queen));
        self.anti_diagonals.insert(Self::anti_diagonal(queen));
    }

    const fn diagonal(&self, queen: Queen) -> usize {
        queen.row() as usize + self.size.last() as usize - queen.column() as usize
    }

    const fn anti_diagonal(queen: Queen) -> usize {
        queen.row() as usize + queen.column() as usize
    }
}

impl From<&Chessboard> for Placement {
    fn from(board: &Chessboard) -> Self {
        board.to_placement()
    }
}

// Line indices are always below `BoardSize::MAX`.
#[allow(clippy::cast_possible_truncation)]
fn to_line(index: usize) -> u8 {
    index as u8
}

impl Display for Chessboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.size.lines() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for column in self.size.lines() {
                let cell = if self.contains(Queen::new(row, column)) {
                    'Q'
                } else {
                    '.'
                };
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Chessboard {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<(usize, Vec<char>)> = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.chars().filter(|c| !c.is_whitespace()).collect()))
            .filter(|(_, cells): &(usize, Vec<char>)| !cells.is_empty())
            .collect();

        let size = BoardSize::new(rows.len())?;
        let mut board = Self::new(size);
        for ((line, cells), row) in rows.iter().zip(size.lines()) {
            if cells.len() != size.get() {
                return Err(BoardError::Parse {
                    line: *line,
                    reason: "row length differs from the number of rows",
                });
            }
            for (&cell, column) in cells.iter().zip(size.lines()) {
                match cell {
                    'Q' | 'q' => board.try_add_queen(Queen::new(row, column))?,
                    '.' | '_' => {}
                    _ => {
                        return Err(BoardError::Parse {
                            line: *line,
                            reason: "expected `Q`, `.` or `_`",
                        });
                    }
                }
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn board(size: usize, queens: &[(u8, u8)]) -> Chessboard {
        let mut board = Chessboard::with_size(size).unwrap();
        for &queen in queens {
            board.add_queen(queen.into());
        }
        board
    }

    // The unique fundamental 4-queens solution.
    const FOUR: [(u8, u8); 4] = [(0, 1), (1, 3), (2, 0), (3, 2)];

    #[test]
    fn test_can_add_queen_on_empty_board() {
        let board = board(5, &[]);
        for row in 0..5 {
            for column in 0..5 {
                assert!(board.can_add_queen(Queen::new(row, column)));
            }
        }
        assert!(!board.can_add_queen(Queen::new(5, 0)));
        assert!(!board.can_add_queen(Queen::new(0, 5)));
    }

    #[test]
    fn test_can_add_queen_conflicts() {
        let board = board(4, &[(0, 0)]);
        assert!(!board.can_add_queen(Queen::new(0, 1)));
        assert!(!board.can_add_queen(Queen::new(1, 0)));
        assert!(!board.can_add_queen(Queen::new(1, 1)));
        assert!(board.can_add_queen(Queen::new(1, 2)));
    }

    #[test]
    fn test_can_add_queen_anti_diagonal() {
        let board = board(4, &[(0, 3)]);
        assert!(!board.can_add_queen(Queen::new(1, 2)));
        assert!(!board.can_add_queen(Queen::new(3, 0)));
        assert!(board.can_add_queen(Queen::new(1, 1)));
    }

    #[test]
    fn test_available_lines() {
        let board = board(5, &[(1, 3), (3, 0)]);
        assert_eq!(board.available_rows().collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(board.available_columns().collect::<Vec<_>>(), vec![1, 2, 4]);
        assert!(!board.is_complete());
    }

    #[test]
    fn test_single_square_board() {
        let board = board(1, &[(0, 0)]);
        assert!(board.is_complete());
        assert_eq!(board.available_rows().count(), 0);
        assert_eq!(board.available_columns().count(), 0);
    }

    #[test]
    fn test_remove_queen_restores_state() {
        let before = board(6, &[(0, 1), (1, 3)]);
        let mut after = before.clone();
        after.add_queen(Queen::new(2, 5));
        assert_ne!(after, before);

        assert!(after.remove_queen(Queen::new(2, 5)));
        assert_eq!(after, before);
        assert!(!after.remove_queen(Queen::new(2, 5)));
    }

    #[test]
    #[should_panic(expected = "outside a 4x4 board")]
    fn test_add_queen_out_of_bounds_panics() {
        let mut board = board(4, &[]);
        board.add_queen(Queen::new(4, 0));
    }

    #[test]
    fn test_try_add_queen_errors() {
        let mut board = board(4, &[(0, 0)]);
        assert_eq!(
            board.try_add_queen(Queen::new(0, 4)),
            Err(BoardError::OutOfBounds {
                queen: Queen::new(0, 4),
                size: 4
            })
        );
        assert_eq!(
            board.try_add_queen(Queen::new(3, 0)),
            Err(BoardError::UnderAttack {
                queen: Queen::new(3, 0)
            })
        );
        assert_eq!(board.len(), 1);
        assert!(board.try_add_queen(Queen::new(1, 2)).is_ok());
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_rotate_convention() {
        let rotated = board(4, &FOUR).rotate();
        let expected = board(4, &[(1, 3), (3, 2), (0, 1), (2, 0)]);
        assert_eq!(rotated, expected);
    }

    #[test]
    fn test_four_queens_orbit() {
        let original = board(4, &FOUR);
        let mirrored = original.reflect_horizontal();
        assert_ne!(mirrored, original);
        assert_eq!(original.rotate(), original);
        assert_eq!(original.reflect_vertical(), mirrored);
        assert_eq!(original.transpose(), mirrored);
    }

    #[test]
    fn test_transforms_keep_size() {
        let board = board(7, &[(0, 0), (1, 2)]);
        for transformed in [
            board.rotate(),
            board.reflect_horizontal(),
            board.reflect_vertical(),
            board.transpose(),
        ] {
            assert_eq!(transformed.size(), board.size());
            assert_eq!(transformed.len(), board.len());
        }
    }

    #[test]
    fn test_is_valid_detects_unchecked_conflicts() {
        assert!(board(4, &FOUR).is_valid());

        let mut corrupt = board(4, &[(0, 0)]);
        corrupt.insert(Queen::new(2, 2));
        assert!(!corrupt.is_valid());
    }

    #[test]
    fn test_placement_round_trip() {
        let board = board(4, &FOUR);
        let placement = board.to_placement();
        assert_eq!(placement.len(), 4);
        assert_eq!(
            Chessboard::from_placement(board.size(), &placement).unwrap(),
            board
        );
        assert!(matches!(
            Chessboard::from_placement(BoardSize::new(3).unwrap(), &placement),
            Err(BoardError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_parse() {
        let board: Chessboard = "
            . Q . .
            . . . Q
            Q . . .
            . . Q .
        "
        .parse()
        .unwrap();
        assert_eq!(board, self::board(4, &FOUR));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "".parse::<Chessboard>(),
            Err(BoardError::InvalidSize { size: 0 })
        );
        assert!(matches!(
            "...\n..".parse::<Chessboard>(),
            Err(BoardError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            "Q.\n.x".parse::<Chessboard>(),
            Err(BoardError::Parse { line: 2, .. })
        ));
        assert_eq!(
            "Q.\n.Q".parse::<Chessboard>(),
            Err(BoardError::UnderAttack {
                queen: Queen::new(1, 1)
            })
        );
    }

    #[test]
    fn test_static_middle() {
        assert_eq!(Chessboard::static_middle(BoardSize::new(1).unwrap()), 1);
        assert_eq!(Chessboard::static_middle(BoardSize::new(4).unwrap()), 2);
        assert_eq!(Chessboard::static_middle(BoardSize::new(5).unwrap()), 3);
    }

    /// Strategy producing a board with queens placed greedily from a list of
    /// candidate squares, skipping attacked ones.
    fn arb_board() -> impl Strategy<Value = Chessboard> {
        (1_u8..=12).prop_flat_map(|size| {
            prop::collection::vec((0..size, 0..size), 0..16).prop_map(move |squares| {
                let mut board = Chessboard::with_size(usize::from(size)).unwrap();
                for (row, column) in squares {
                    let _ = board.try_add_queen(Queen::new(row, column));
                }
                board
            })
        })
    }

    proptest! {
        #[test]
        fn prop_rotate_four_times_is_identity(board in arb_board()) {
            prop_assert_eq!(board.rotate().rotate().rotate().rotate(), board);
        }

        #[test]
        fn prop_reflect_twice_is_identity(board in arb_board()) {
            prop_assert_eq!(board.reflect_horizontal().reflect_horizontal(), board.clone());
            prop_assert_eq!(board.reflect_vertical().reflect_vertical(), board);
        }

        #[test]
        fn prop_transforms_preserve_validity(board in arb_board()) {
            prop_assert!(board.is_valid());
            prop_assert!(board.rotate().is_valid());
            prop_assert!(board.reflect_horizontal().is_valid());
        }

        #[test]
        fn prop_display_parses_back(board in arb_board()) {
            let text = board.to_string();
            prop_assert_eq!(text.parse::<Chessboard>().unwrap(), board);
        }

        #[test]
        fn prop_can_add_matches_pairwise_scan(board in arb_board(), row in 0_u8..12, column in 0_u8..12) {
            let queen = Queen::new(row, column);
            let scan = board.in_bounds(queen) && board.queens().all(|q| !q.attacks(queen));
            prop_assert_eq!(board.can_add_queen(queen), scan);
        }
    }
}
