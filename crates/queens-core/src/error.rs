use crate::Queen;

/// Errors produced by the board model.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The board size is not a positive integer.
    #[display("board size must be positive, got {size}")]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// The board size exceeds the supported maximum.
    #[display("board size {size} exceeds the maximum of {max}")]
    SizeTooLarge {
        /// The rejected size.
        size: usize,
        /// The largest supported size.
        max: usize,
    },
    /// A queen lies outside the board.
    #[display("queen {queen} is outside a {size}x{size} board")]
    OutOfBounds {
        /// The rejected queen.
        queen: Queen,
        /// The board size.
        size: usize,
    },
    /// A queen shares a row, column or diagonal with a placed queen.
    #[display("queen {queen} is attacked by a placed queen")]
    UnderAttack {
        /// The rejected queen.
        queen: Queen,
    },
    /// A textual board could not be parsed.
    #[display("invalid board text at line {line}: {reason}")]
    Parse {
        /// 1-based line number of the offending row.
        line: usize,
        /// What went wrong.
        reason: &'static str,
    },
}
