//! # Error reporting for matrix operations
//!
//! Every fallible operation returns one of the variants below to the caller; the crate never
//! terminates the process on bad input.
use std::error;
use std::fmt;

/// Extents of a matrix operand as a (rows, columns) pair.
pub type Extents = (usize, usize);

/// The ways a matrix operation can fail.
///
/// Out-of-range coordinates and operand extent mismatches are the only failure categories
/// modeled; allocation failure is not handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A coordinate passed to `get` or `set` falls outside the matrix extents.
    OutOfBounds {
        /// Row coordinate as provided by the caller.
        x: usize,
        /// Column coordinate as provided by the caller.
        y: usize,
        /// Number of rows of the matrix operated on.
        rows: usize,
        /// Number of columns of the matrix operated on.
        columns: usize,
    },
    /// Operand extents don't satisfy the operation's dimension rule.
    ///
    /// For `add` and `subtract` the extents must be identical; for `multiply` the left
    /// operand's column count must equal the right operand's row count.
    DimensionMismatch {
        /// Extents of the left operand (the receiver).
        left: Extents,
        /// Extents of the right operand (the argument).
        right: Extents,
    },
    /// A `resize` would discard live nonzeros and `force` was not set.
    Truncation {
        /// Number of nonzeros the shrink would have discarded.
        discarded: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfBounds { x, y, rows, columns } => write!(
                f, "coordinate ({}, {}) is outside the {}x{} matrix", x, y, rows, columns,
            ),
            Error::DimensionMismatch { left, right } => write!(
                f, "operand extents {}x{} and {}x{} don't match",
                left.0, left.1, right.0, right.1,
            ),
            Error::Truncation { discarded } => write!(
                f, "resizing would discard {} nonzero(s); pass force to allow this", discarded,
            ),
        }
    }
}

impl error::Error for Error {
}
