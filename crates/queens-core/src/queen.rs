//! Queen coordinates.

use std::fmt::{self, Display};

/// A queen at a `(row, column)` coordinate, both 0-indexed.
///
/// Queens compare, order and hash by coordinate; two queens on the same
/// square are the same queen. Ordering is row-major.
///
/// # Examples
///
/// ```
/// use queens_core::Queen;
///
/// let queen = Queen::new(2, 5);
/// assert_eq!(queen.row(), 2);
/// assert_eq!(queen.column(), 5);
/// assert_eq!(queen.to_string(), "(2, 5)");
/// assert!(Queen::new(0, 7) < Queen::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Queen {
    row: u8,
    column: u8,
}

impl Queen {
    /// Creates a queen at the given coordinate.
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Returns the row (0-indexed).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-indexed).
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns `true` if both queens lie on the same row, column or diagonal.
    ///
    /// A queen does attack itself under this definition.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens_core::Queen;
    ///
    /// let queen = Queen::new(0, 0);
    /// assert!(queen.attacks(Queen::new(0, 3)));
    /// assert!(queen.attacks(Queen::new(3, 0)));
    /// assert!(queen.attacks(Queen::new(3, 3)));
    /// assert!(!queen.attacks(Queen::new(1, 2)));
    /// ```
    #[must_use]
    pub const fn attacks(self, other: Self) -> bool {
        self.row == other.row
            || self.column == other.column
            || self.row.abs_diff(other.row) == self.column.abs_diff(other.column)
    }
}

impl Display for Queen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(u8, u8)> for Queen {
    fn from((row, column): (u8, u8)) -> Self {
        Self::new(row, column)
    }
}

impl From<Queen> for (u8, u8) {
    fn from(queen: Queen) -> Self {
        (queen.row, queen.column)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_value_identity() {
        let a = Queen::new(3, 4);
        let b = Queen::from((3, 4));
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b, Queen::new(4, 3)].into_iter().collect();
        assert_eq!(set.len(), 2);

        let pair: (u8, u8) = a.into();
        assert_eq!(pair, (3, 4));
    }

    #[test]
    fn test_attacks_is_symmetric() {
        let queens = [
            Queen::new(0, 0),
            Queen::new(1, 2),
            Queen::new(3, 1),
            Queen::new(4, 4),
            Queen::new(2, 6),
        ];
        for a in queens {
            for b in queens {
                assert_eq!(a.attacks(b), b.attacks(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_anti_diagonal() {
        assert!(Queen::new(0, 3).attacks(Queen::new(3, 0)));
        assert!(Queen::new(2, 1).attacks(Queen::new(1, 2)));
        assert!(!Queen::new(2, 1).attacks(Queen::new(0, 2)));
    }
}
