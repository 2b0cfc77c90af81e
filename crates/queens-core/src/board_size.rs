//! Validated board sizes.

use std::{
    fmt::{self, Display},
    num::NonZeroU8,
    str::FromStr,
};

use crate::BoardError;

/// The side length of a square board.
///
/// A `BoardSize` is always in the range `1..=BoardSize::MAX`, so boards built
/// from it never need to re-check their dimensions.
///
/// # Examples
///
/// ```
/// use queens_core::{BoardError, BoardSize};
///
/// let size = BoardSize::new(8)?;
/// assert_eq!(size.get(), 8);
///
/// assert_eq!(
///     BoardSize::new(0),
///     Err(BoardError::InvalidSize { size: 0 })
/// );
/// # Ok::<(), BoardError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSize(NonZeroU8);

impl BoardSize {
    /// The largest supported board size.
    ///
    /// Rows and columns are tracked in 64-bit lines and diagonals in
    /// 128-bit lines.
    pub const MAX: usize = 64;

    /// Creates a board size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is zero and
    /// [`BoardError::SizeTooLarge`] if it exceeds [`BoardSize::MAX`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size > Self::MAX {
            return Err(BoardError::SizeTooLarge {
                size,
                max: Self::MAX,
            });
        }
        u8::try_from(size)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(BoardError::InvalidSize { size })
    }

    /// Returns the side length.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get() as usize
    }

    /// Returns the index of the last row or column.
    #[must_use]
    pub const fn last(self) -> u8 {
        self.0.get() - 1
    }

    /// Returns the number of starting columns worth trying in row 0.
    ///
    /// This is `ceil(size / 2)`: a placement starting right of center is the
    /// mirror image of one starting left of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens_core::BoardSize;
    ///
    /// assert_eq!(BoardSize::new(1)?.middle(), 1);
    /// assert_eq!(BoardSize::new(8)?.middle(), 4);
    /// assert_eq!(BoardSize::new(9)?.middle(), 5);
    /// # Ok::<(), queens_core::BoardError>(())
    /// ```
    #[must_use]
    pub const fn middle(self) -> u8 {
        self.0.get().div_ceil(2)
    }

    /// Returns an iterator over the line indices `0..size`.
    pub fn lines(self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator {
        0..self.0.get()
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl FromStr for BoardSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = s
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid board size `{s}`: {e}"))?;
        Self::new(size).map_err(|e| e.to_string())
    }
}

impl Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> usize {
        size.get()
    }
}
