use std::hash::{Hash, Hasher};

use queens_core::{Chessboard, Queen};

/// A state in the depth-first search tree.
///
/// A node owns a board together with its depth below the root and whether
/// the board is complete. Two nodes are equal when their boards are; depth
/// and the leaf flag are derived metadata.
///
/// # Examples
///
/// ```
/// use queens_core::{Chessboard, Queen};
/// use queens_solver::SearchNode;
///
/// let mut board = Chessboard::with_size(4)?;
/// board.add_queen(Queen::new(0, 1));
///
/// let root = SearchNode::root(board);
/// assert!(root.is_root());
/// assert!(!root.is_leaf());
///
/// let child = root.branch_with_queen(Queen::new(1, 3));
/// assert_eq!(child.depth(), 1);
/// assert_eq!(root.board().len(), 1); // the parent is untouched
/// # Ok::<(), queens_core::BoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Chessboard,
    depth: usize,
    is_leaf: bool,
}

impl SearchNode {
    /// Creates a root node at depth 0.
    ///
    /// A 1×1 board holding its queen is already a leaf.
    #[must_use]
    pub fn root(board: Chessboard) -> Self {
        let is_leaf = board.is_complete();
        Self {
            board,
            depth: 0,
            is_leaf,
        }
    }

    /// Returns the board of this node.
    #[must_use]
    pub fn board(&self) -> &Chessboard {
        &self.board
    }

    /// Consumes the node and returns its board.
    #[must_use]
    pub fn into_board(self) -> Chessboard {
        self.board
    }

    /// Returns the number of branching steps taken since the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `true` if no rows remain open.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Returns `true` if this is the root node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Returns an independent child node with `queen` added.
    ///
    /// The caller must have checked the queen with
    /// [`Chessboard::can_add_queen`].
    #[must_use]
    pub fn branch_with_queen(&self, queen: Queen) -> Self {
        let mut child = self.clone();
        child.push(queen);
        child
    }

    /// Descends into the child holding `queen`, in place.
    pub(crate) fn push(&mut self, queen: Queen) {
        self.board.add_queen(queen);
        self.depth += 1;
        self.is_leaf = self.board.is_complete();
    }

    /// Returns to the parent of a node entered by [`push`](Self::push).
    pub(crate) fn pop(&mut self, queen: Queen) {
        let removed = self.board.remove_queen(queen);
        debug_assert!(removed, "queen {queen} was not placed");
        self.depth -= 1;
        self.is_leaf = false;
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}
