//! # Integration tests combining multiple operations.
pub mod algebra;
