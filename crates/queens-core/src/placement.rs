//! Frozen queen placements.

use std::{
    collections::{BTreeSet, btree_set},
    fmt::{self, Display},
};

use crate::Queen;

/// An immutable set of queens, compared and hashed by value.
///
/// A `Placement` is what remains of a [`Chessboard`](crate::Chessboard) once
/// only the occupied squares matter: insertion order is irrelevant and the
/// board size is carried by whoever owns the placement.
///
/// # Examples
///
/// ```
/// use queens_core::{Placement, Queen};
///
/// let a: Placement = [Queen::new(0, 1), Queen::new(1, 3)].into_iter().collect();
/// let b: Placement = [Queen::new(1, 3), Queen::new(0, 1)].into_iter().collect();
///
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "{(0, 1), (1, 3)}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placement {
    queens: BTreeSet<Queen>,
}

impl Placement {
    /// Returns the number of queens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queens.len()
    }

    /// Returns `true` if no queen is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queens.is_empty()
    }

    /// Returns `true` if the placement contains the queen.
    #[must_use]
    pub fn contains(&self, queen: Queen) -> bool {
        self.queens.contains(&queen)
    }

    /// Returns the queens in row-major order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Queen> + ExactSizeIterator + '_ {
        self.queens.iter().copied()
    }
}

impl FromIterator<Queen> for Placement {
    fn from_iter<I: IntoIterator<Item = Queen>>(iter: I) -> Self {
        Self {
            queens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Placement {
    type Item = Queen;
    type IntoIter = btree_set::IntoIter<Queen>;

    fn into_iter(self) -> Self::IntoIter {
        self.queens.into_iter()
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, queen) in self.queens.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(queen, f)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let placement: Placement = [Queen::new(2, 2), Queen::new(2, 2), Queen::new(0, 1)]
            .into_iter()
            .collect();
        assert_eq!(placement.len(), 2);
        assert!(placement.contains(Queen::new(0, 1)));
        assert!(!placement.contains(Queen::new(1, 0)));
    }

    #[test]
    fn test_hash_by_value() {
        let a: Placement = [Queen::new(0, 0)].into_iter().collect();
        let b: Placement = [Queen::new(0, 0)].into_iter().collect();
        let c: Placement = [Queen::new(0, 1)].into_iter().collect();

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(Placement::default().to_string(), "{}");
        assert!(Placement::default().is_empty());
    }
}
