use std::collections::{BTreeSet, btree_set};

use queens_core::{BoardSize, Chessboard, Placement};

/// A set of placements on boards of one shared size.
///
/// Placements are kept in ascending order so iteration is deterministic.
/// Inserting a placement that is already present has no effect.
///
/// # Examples
///
/// ```
/// use queens_core::{BoardSize, Chessboard, Queen};
/// use queens_solver::Solutions;
///
/// let size = BoardSize::new(1)?;
/// let mut solutions = Solutions::new(size);
/// assert!(solutions.is_empty());
///
/// let mut board = Chessboard::new(size);
/// board.add_queen(Queen::new(0, 0));
/// assert!(solutions.insert(&board));
/// assert!(!solutions.insert(&board));
/// assert_eq!(solutions.len(), 1);
/// # Ok::<(), queens_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solutions {
    size: BoardSize,
    placements: BTreeSet<Placement>,
}

impl Solutions {
    /// Creates an empty set for boards of `size`.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            placements: BTreeSet::new(),
        }
    }

    /// Adds the placement of `board`. Returns `true` if it was new.
    ///
    /// # Panics
    ///
    /// Panics if the board size differs from the set's size.
    pub fn insert(&mut self, board: &Chessboard) -> bool {
        assert_eq!(
            board.size(),
            self.size,
            "board size differs from solution set size"
        );
        self.placements.insert(board.to_placement())
    }

    /// Returns the board size shared by every placement.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the number of distinct placements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Returns `true` if the set holds no placement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns `true` if the set holds the placement.
    #[must_use]
    pub fn contains(&self, placement: &Placement) -> bool {
        self.placements.contains(placement)
    }

    /// Returns the placements in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, Placement> {
        self.placements.iter()
    }

    /// Returns each placement rebuilt as a board.
    pub fn boards(&self) -> impl Iterator<Item = Chessboard> + '_ {
        self.placements.iter().map(|placement| {
            let mut board = Chessboard::new(self.size);
            for queen in placement.iter() {
                board.add_queen(queen);
            }
            board
        })
    }
}

impl<'a> IntoIterator for &'a Solutions {
    type Item = &'a Placement;
    type IntoIter = btree_set::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Solutions {
    type Item = Placement;
    type IntoIter = btree_set::IntoIter<Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use queens_core::Queen;

    use super::*;

    #[test]
    fn test_boards_rebuild_placements() {
        let size = BoardSize::new(4).unwrap();
        let board: Chessboard = ".Q..\n...Q\nQ...\n..Q.".parse().unwrap();
        let mut solutions = Solutions::new(size);
        solutions.insert(&board);
        solutions.insert(&board.reflect_horizontal());

        let boards: Vec<_> = solutions.boards().collect();
        assert_eq!(boards.len(), 2);
        assert!(boards.contains(&board));
        assert!(boards.iter().all(|b| b.size() == size && b.is_valid()));
        assert!(solutions.contains(&board.to_placement()));
    }

    #[test]
    #[should_panic(expected = "board size differs")]
    fn test_insert_rejects_other_size() {
        let mut solutions = Solutions::new(BoardSize::new(4).unwrap());
        let mut board = Chessboard::with_size(5).unwrap();
        board.add_queen(Queen::new(0, 0));
        solutions.insert(&board);
    }
}
