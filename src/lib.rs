//! # Sparse matrices as orthogonal linked lists
//!
//! A value-typed 2-D container storing only nonzero entries. Every nonzero is a member of
//! exactly two singly-linked chains, one per row (sorted by column) and one per column (sorted
//! by row), so both row-wise and column-wise traversal cost only the nonzeros actually visited.
//! The arithmetic (scalar multiply, matrix multiply, add, subtract, transpose) is built
//! directly on merge-walks over these chains.
//!
//! Entries live in a single slab-backed store and the chains link by key, so each nonzero is
//! owned exactly once regardless of how many chains reference it.
#![warn(missing_docs)]

pub mod error;
pub mod matrix;

pub use error::Error;
pub use matrix::CrossList;

#[cfg(test)]
mod tests;
