use queens_core::{BoardSize, Chessboard, Queen};

use crate::{SearchNode, Solutions, symmetry};

/// Statistics collected during a search.
///
/// # Examples
///
/// ```
/// use queens_core::BoardSize;
/// use queens_solver::QueensSolver;
///
/// let solver = QueensSolver::new(BoardSize::new(8)?);
/// let (solutions, stats) = solver.search_with_stats();
///
/// assert!(!solutions.is_empty());
/// assert_eq!(stats.starting_columns(), 1);
/// assert_eq!(stats.max_depth(), 7);
/// # Ok::<(), queens_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    starting_columns: usize,
    nodes_visited: usize,
    candidates_checked: usize,
    dead_ends: usize,
    max_depth: usize,
}

impl SearchStats {
    /// Returns the number of row-0 starting columns tried.
    #[must_use]
    pub fn starting_columns(&self) -> usize {
        self.starting_columns
    }

    /// Returns the number of search nodes entered, roots included.
    #[must_use]
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Returns the number of candidate squares tested with
    /// [`Chessboard::can_add_queen`].
    #[must_use]
    pub fn candidates_checked(&self) -> usize {
        self.candidates_checked
    }

    /// Returns the number of nodes whose whole subtree held no solution.
    #[must_use]
    pub fn dead_ends(&self) -> usize {
        self.dead_ends
    }

    /// Returns the deepest node depth reached.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// A depth-first N-Queens solver for one board size.
///
/// The solver tries starting columns `0..ceil(size / 2)` in row 0 and runs
/// [`branch_and_search`](Self::branch_and_search) from each until one yields
/// a complete placement. That placement is expanded into its symmetry orbit
/// with [`symmetry::generate_symmetry_solutions`].
///
/// # Examples
///
/// ```
/// use queens_core::BoardSize;
/// use queens_solver::QueensSolver;
///
/// let solver = QueensSolver::new(BoardSize::new(6)?);
/// let solutions = solver.search_n_queens();
///
/// assert_eq!(solutions.len(), 4);
/// for board in solutions.boards() {
///     assert!(board.is_complete());
///     assert!(board.is_valid());
/// }
/// # Ok::<(), queens_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueensSolver {
    size: BoardSize,
}

impl QueensSolver {
    /// Creates a solver for boards of `size`.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self { size }
    }

    /// Returns the board size this solver searches.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Finds one placement and returns its symmetry orbit.
    ///
    /// Returns an empty set when no placement exists (sizes 2 and 3).
    #[must_use]
    pub fn search_n_queens(&self) -> Solutions {
        self.search_with_stats().0
    }

    /// Like [`search_n_queens`](Self::search_n_queens), also returning
    /// statistics about the search.
    #[must_use]
    pub fn search_with_stats(&self) -> (Solutions, SearchStats) {
        let mut stats = SearchStats::default();
        let solutions = match self.find_with_stats(&mut stats) {
            Some(board) => symmetry::generate_symmetry_solutions(&board),
            None => Solutions::new(self.size),
        };
        log::debug!(
            "{size}x{size}: {count} placement(s) after {nodes} node(s)",
            size = self.size,
            count = solutions.len(),
            nodes = stats.nodes_visited,
        );
        (solutions, stats)
    }

    /// Returns the first complete placement found, before symmetry expansion.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens_core::{BoardSize, Queen};
    /// use queens_solver::QueensSolver;
    ///
    /// let solver = QueensSolver::new(BoardSize::new(4)?);
    /// let board = solver.find_fundamental().unwrap();
    /// assert!(board.contains(Queen::new(0, 1)));
    ///
    /// let solver = QueensSolver::new(BoardSize::new(2)?);
    /// assert!(solver.find_fundamental().is_none());
    /// # Ok::<(), queens_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn find_fundamental(&self) -> Option<Chessboard> {
        self.find_with_stats(&mut SearchStats::default())
    }

    /// Searches depth first below `node` and returns the first complete board.
    ///
    /// Candidates are tried in ascending row, then ascending column order,
    /// and the first child subtree holding a solution wins. The node is
    /// restored before returning.
    ///
    /// # Panics
    ///
    /// Panics if the node's board size differs from the solver's.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens_core::{BoardSize, Chessboard, Queen};
    /// use queens_solver::{QueensSolver, SearchNode};
    ///
    /// let size = BoardSize::new(4)?;
    /// let mut board = Chessboard::new(size);
    /// board.add_queen(Queen::new(0, 0));
    ///
    /// // No 4-queens placement has a queen in a corner.
    /// let mut node = SearchNode::root(board);
    /// assert!(QueensSolver::new(size).branch_and_search(&mut node).is_none());
    /// assert_eq!(node.board().len(), 1);
    /// # Ok::<(), queens_core::BoardError>(())
    /// ```
    pub fn branch_and_search(&self, node: &mut SearchNode) -> Option<Chessboard> {
        assert_eq!(
            node.board().size(),
            self.size,
            "node board size differs from solver size"
        );
        search(node, &mut SearchStats::default())
    }

    fn find_with_stats(&self, stats: &mut SearchStats) -> Option<Chessboard> {
        for column in 0..Chessboard::static_middle(self.size) {
            stats.starting_columns += 1;
            log::debug!(
                "{size}x{size}: starting from {queen}",
                size = self.size,
                queen = Queen::new(0, column),
            );

            let mut board = Chessboard::new(self.size);
            board.add_queen(Queen::new(0, column));
            let mut root = SearchNode::root(board);
            if let Some(solution) = search(&mut root, stats) {
                return Some(solution);
            }
        }
        log::debug!("{size}x{size}: no placement exists", size = self.size);
        None
    }
}

fn search(node: &mut SearchNode, stats: &mut SearchStats) -> Option<Chessboard> {
    stats.nodes_visited += 1;
    stats.max_depth = stats.max_depth.max(node.depth());

    if node.is_leaf() {
        return Some(node.board().clone());
    }

    // Every completion of this node holds a queen in its lowest open row, so
    // once that row's candidates are exhausted no later row can succeed.
    let row = node.board().available_rows().next()?;
    for column in node.board().available_columns() {
        let queen = Queen::new(row, column);
        stats.candidates_checked += 1;
        if !node.board().can_add_queen(queen) {
            continue;
        }

        node.push(queen);
        let result = search(node, stats);
        node.pop(queen);
        if result.is_some() {
            return result;
        }
    }

    stats.dead_ends += 1;
    log::trace!("dead end at depth {}:\n{}", node.depth(), node.board());
    None
}
