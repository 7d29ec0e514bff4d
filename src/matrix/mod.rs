//! # Matrix engine
//!
//! The `CrossList` matrix stores only its nonzeros. Every stored value sits in exactly two
//! singly-linked chains: the chain of its row, sorted ascending by column, and the chain of
//! its column, sorted ascending by row. A per-row and per-column head slot anchors each chain.
//!
//! Every mutation resolves to one or two chain walks producing slot cursors, followed by a
//! constant-time splice through those cursors. The arithmetic operations live in
//! [`arithmetic`]; they never mutate their operands and build their result through the same
//! insertion path, so results stay sparse automatically.
use std::fmt;

use itertools::Itertools;
use num_traits::{One, Zero};
use slab::Slab;

pub use store::{ColumnIter, RowIter};

use crate::error::Error;
use crate::matrix::store::Entry;

pub mod arithmetic;
mod store;

/// The chain a slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Row,
    Column,
}

/// Cursor produced by a chain walk.
///
/// Identifies the link field through which the walk's target key is reachable: either a head
/// slot (`prev` is `None`) or the successor link of the predecessor entry. Reading the slot
/// yields the current occupant; writing it is the splice.
#[derive(Debug, Clone, Copy)]
struct Slot {
    axis: Axis,
    /// Which head anchors the walked chain: a row index for `Axis::Row`, a column index
    /// otherwise. Only read when `prev` is `None`.
    head: usize,
    /// Key of the entry whose successor link is the slot, or `None` for the head slot itself.
    prev: Option<usize>,
}

/// A sparse matrix backed by an orthogonal linked list.
///
/// Extents are fixed at construction and change only through [`CrossList::resize`]. The
/// additive identity is never stored: writing a zero is removal, reading an absent coordinate
/// yields zero.
#[derive(Debug, Clone)]
pub struct CrossList<F> {
    entries: Slab<Entry<F>>,
    row_heads: Vec<Option<usize>>,
    column_heads: Vec<Option<usize>>,
}

impl<F> CrossList<F> {
    /// Create an empty matrix with the given extents.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            entries: Slab::new(),
            row_heads: vec![None; rows],
            column_heads: vec![None; columns],
        }
    }

    /// The number of rows in this matrix.
    #[must_use]
    pub fn nr_rows(&self) -> usize {
        self.row_heads.len()
    }

    /// The number of columns in this matrix.
    #[must_use]
    pub fn nr_columns(&self) -> usize {
        self.column_heads.len()
    }

    /// The number of nonzeros in this matrix.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// All `(column, value)` tuples of row `i`, in ascending column order.
    pub fn row(&self, i: usize) -> RowIter<'_, F> {
        debug_assert!(i < self.nr_rows());

        RowIter::new(&self.entries, self.row_heads[i])
    }

    /// All `(row, value)` tuples of column `j`, in ascending row order.
    pub fn column(&self, j: usize) -> ColumnIter<'_, F> {
        debug_assert!(j < self.nr_columns());

        ColumnIter::new(&self.entries, self.column_heads[j])
    }

    /// Walk row `x`'s chain up to the slot that holds, or would hold, column `y`.
    ///
    /// # Return value
    ///
    /// The slot, and the occupant's key if it sits exactly at column `y`. Costs O(k) with k
    /// the number of nonzeros in the row before column `y`.
    fn find_by_row(&self, x: usize, y: usize) -> (Slot, Option<usize>) {
        debug_assert!(x < self.nr_rows());

        let mut prev = None;
        let mut current = self.row_heads[x];
        while let Some(key) = current {
            if self.entries[key].column >= y {
                break;
            }
            prev = Some(key);
            current = self.entries[key].row_next;
        }

        let matched = current.filter(|&key| self.entries[key].column == y);
        (Slot { axis: Axis::Row, head: x, prev }, matched)
    }

    /// Walk column `y`'s chain up to the slot that holds, or would hold, row `x`.
    fn find_by_column(&self, x: usize, y: usize) -> (Slot, Option<usize>) {
        debug_assert!(y < self.nr_columns());

        let mut prev = None;
        let mut current = self.column_heads[y];
        while let Some(key) = current {
            if self.entries[key].row >= x {
                break;
            }
            prev = Some(key);
            current = self.entries[key].column_next;
        }

        let matched = current.filter(|&key| self.entries[key].row == x);
        (Slot { axis: Axis::Column, head: y, prev }, matched)
    }

    /// The key currently reachable through a slot.
    fn occupant(&self, slot: Slot) -> Option<usize> {
        match (slot.prev, slot.axis) {
            (Some(key), Axis::Row) => self.entries[key].row_next,
            (Some(key), Axis::Column) => self.entries[key].column_next,
            (None, Axis::Row) => self.row_heads[slot.head],
            (None, Axis::Column) => self.column_heads[slot.head],
        }
    }

    /// Redirect a slot to a new target. Constant time; this is the splice.
    fn relink(&mut self, slot: Slot, target: Option<usize>) {
        match (slot.prev, slot.axis) {
            (Some(key), Axis::Row) => self.entries[key].row_next = target,
            (Some(key), Axis::Column) => self.entries[key].column_next = target,
            (None, Axis::Row) => self.row_heads[slot.head] = target,
            (None, Axis::Column) => self.column_heads[slot.head] = target,
        }
    }

    /// Splice one entry out of both its chains and drop it from the store.
    fn detach(&mut self, key: usize) {
        let (x, y) = (self.entries[key].row, self.entries[key].column);
        let (row_slot, row_match) = self.find_by_row(x, y);
        let (column_slot, column_match) = self.find_by_column(x, y);
        debug_assert_eq!(row_match, Some(key));
        debug_assert_eq!(column_match, Some(key));

        let entry = self.entries.remove(key);
        self.relink(row_slot, entry.row_next);
        self.relink(column_slot, entry.column_next);
    }

    /// Empty the matrix for reuse, keeping the extents.
    pub fn clear(&mut self) {
        self.entries.clear();
        for head in self.row_heads.iter_mut() {
            *head = None;
        }
        for head in self.column_heads.iter_mut() {
            *head = None;
        }
    }

    /// Change the extents of this matrix.
    ///
    /// Growing appends empty chains. Shrinking detaches every nonzero whose row or column
    /// falls outside the new extents from both of its chains, so no stale cross-references
    /// survive into the kept rows and columns.
    ///
    /// # Arguments
    ///
    /// * `rows`, `columns`: New extents.
    /// * `force`: Allow a shrink that discards live nonzeros. A lossless call ignores it.
    ///
    /// # Errors
    ///
    /// `Error::Truncation` when nonzeros would be discarded and `force` is not set; the
    /// matrix is left unchanged.
    pub fn resize(&mut self, rows: usize, columns: usize, force: bool) -> Result<(), Error> {
        let doomed = self.entries.iter()
            .filter(|&(_, entry)| entry.row >= rows || entry.column >= columns)
            .map(|(key, _)| key)
            .collect::<Vec<_>>();

        if !doomed.is_empty() && !force {
            return Err(Error::Truncation { discarded: doomed.len() });
        }

        for key in doomed {
            self.detach(key);
        }
        self.row_heads.resize(rows, None);
        self.column_heads.resize(columns, None);

        Ok(())
    }
}

impl<F: Zero> CrossList<F> {
    /// Create a matrix from a dense row-major dump, filtering out the zeros.
    ///
    /// All inner vectors must have equal length.
    #[must_use]
    pub fn from_dense(data: Vec<Vec<F>>) -> Self {
        let rows = data.len();
        let columns = data.first().map_or(0, Vec::len);
        debug_assert!(data.iter().all(|row| row.len() == columns));

        let mut matrix = Self::new(rows, columns);
        for (x, row) in data.into_iter().enumerate() {
            for (y, value) in row.into_iter().enumerate() {
                matrix.splice(x, y, value);
            }
        }

        matrix
    }

    /// Create a square identity matrix of the given size.
    #[must_use]
    pub fn identity(size: usize) -> Self
    where
        F: One,
    {
        let mut matrix = Self::new(size, size);
        for i in 0..size {
            matrix.splice(i, i, F::one());
        }

        matrix
    }

    /// Store `value` at coordinate (`x`, `y`).
    ///
    /// A nonzero `value` overwrites in place when the coordinate is occupied and inserts
    /// otherwise. A zero `value` removes the occupant, or does nothing on an absent
    /// coordinate; zeros are never stored.
    ///
    /// # Errors
    ///
    /// `Error::OutOfBounds` when the coordinate falls outside the extents.
    pub fn set(&mut self, x: usize, y: usize, value: F) -> Result<(), Error> {
        if x >= self.nr_rows() || y >= self.nr_columns() {
            return Err(Error::OutOfBounds {
                x, y,
                rows: self.nr_rows(),
                columns: self.nr_columns(),
            });
        }

        self.splice(x, y, value);
        Ok(())
    }

    /// `set` for coordinates already known to be within bounds.
    fn splice(&mut self, x: usize, y: usize, value: F) {
        let (row_slot, row_match) = self.find_by_row(x, y);

        if let Some(key) = row_match {
            if !value.is_zero() {
                // Overwrite in place; the position in both chains is unchanged.
                self.entries[key].value = value;
                return;
            }

            let (column_slot, column_match) = self.find_by_column(x, y);
            debug_assert_eq!(column_match, Some(key));

            let entry = self.entries.remove(key);
            self.relink(row_slot, entry.row_next);
            self.relink(column_slot, entry.column_next);
            return;
        }

        if value.is_zero() {
            return;
        }

        let (column_slot, _) = self.find_by_column(x, y);
        let row_next = self.occupant(row_slot);
        let column_next = self.occupant(column_slot);
        let key = self.entries.insert(Entry { row: x, column: y, value, row_next, column_next });
        self.relink(row_slot, Some(key));
        self.relink(column_slot, Some(key));
    }

    /// The value at coordinate (`x`, `y`), or the additive identity when absent.
    ///
    /// Walks only the row chain, costing the number of nonzeros in the row before column `y`.
    ///
    /// # Errors
    ///
    /// `Error::OutOfBounds` when the coordinate falls outside the extents.
    pub fn get(&self, x: usize, y: usize) -> Result<F, Error>
    where
        F: Clone,
    {
        if x >= self.nr_rows() || y >= self.nr_columns() {
            return Err(Error::OutOfBounds {
                x, y,
                rows: self.nr_rows(),
                columns: self.nr_columns(),
            });
        }

        let (_, matched) = self.find_by_row(x, y);
        Ok(matched.map_or_else(F::zero, |key| self.entries[key].value.clone()))
    }
}

impl<F: PartialEq> PartialEq for CrossList<F> {
    /// Equality of extents and logical content; storage keys don't participate.
    fn eq(&self, other: &Self) -> bool {
        self.nr_rows() == other.nr_rows()
            && self.nr_columns() == other.nr_columns()
            && (0..self.nr_rows()).all(|x| self.row(x).eq(other.row(x)))
    }
}

impl<F: Zero + fmt::Display> fmt::Display for CrossList<F> {
    /// The dense row-by-row dump: one line per row, `nr_columns` space-separated values in
    /// column order, the additive identity substituted for absent entries.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let zero = F::zero();
        let zero = &zero;
        for x in 0..self.nr_rows() {
            let mut chain = self.row(x).peekable();
            let padded = (0..self.nr_columns()).map(move |y| match chain.peek() {
                Some(&(column, value)) if column == y => {
                    chain.next();
                    value
                },
                _ => zero,
            });
            writeln!(f, "{}", padded.format(" "))?;
        }

        Ok(())
    }
}
