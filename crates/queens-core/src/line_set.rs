//! A set of board line indices.
//!
//! This module provides [`LineSet`], a compact bitset used by
//! [`Chessboard`](crate::Chessboard) to track which rows, columns and
//! diagonals are occupied.
//!
//! # Examples
//!
//! ```
//! use queens_core::LineSet;
//!
//! let mut set = LineSet::new();
//! set.insert(3);
//! set.insert(0);
//! set.insert(100);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(100));
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3, 100]);
//! ```

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
};

/// A set of line indices in the range `0..128`.
///
/// The representation is a single `u128` where bit `i` marks index `i`.
/// Iteration is always in ascending order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSet {
    bits: u128,
}

impl LineSet {
    /// Number of indices a set can hold.
    pub const CAPACITY: usize = 128;

    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates the set `{0, 1, ..., len - 1}`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds [`LineSet::CAPACITY`].
    #[must_use]
    pub const fn prefix(len: usize) -> Self {
        assert!(len <= Self::CAPACITY, "prefix length out of range");
        let bits = if len == Self::CAPACITY {
            u128::MAX
        } else {
            (1 << len) - 1
        };
        Self { bits }
    }

    #[inline]
    const fn bit(index: usize) -> u128 {
        assert!(index < Self::CAPACITY, "line index out of range");
        1 << index
    }

    /// Inserts an index. Returns `true` if it was not already present.
    #[inline]
    pub const fn insert(&mut self, index: usize) -> bool {
        let bit = Self::bit(index);
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Removes an index. Returns `true` if it was present.
    #[inline]
    pub const fn remove(&mut self, index: usize) -> bool {
        let bit = Self::bit(index);
        let removed = self.bits & bit != 0;
        self.bits &= !bit;
        removed
    }

    /// Returns `true` if the index is in the set.
    #[inline]
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index < Self::CAPACITY && self.bits & (1 << index) != 0
    }

    /// Returns the number of indices in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the indices in `self` that are not in `other`.
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns the smallest index in the set.
    #[inline]
    #[must_use]
    pub const fn first(&self) -> Option<usize> {
        if self.bits == 0 {
            None
        } else {
            Some(self.bits.trailing_zeros() as usize)
        }
    }

    /// Returns an ascending iterator over the indices.
    #[must_use]
    pub const fn iter(&self) -> LineSetIter {
        LineSetIter { bits: self.bits }
    }
}

impl Debug for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for LineSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl IntoIterator for LineSet {
    type Item = usize;
    type IntoIter = LineSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &LineSet {
    type Item = usize;
    type IntoIter = LineSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over a [`LineSet`].
#[derive(Debug, Clone)]
pub struct LineSetIter {
    bits: u128,
}

impl Iterator for LineSetIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for LineSetIter {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = 127 - self.bits.leading_zeros() as usize;
        self.bits &= !(1 << index);
        Some(index)
    }
}

impl FusedIterator for LineSetIter {}
impl ExactSizeIterator for LineSetIter {}
