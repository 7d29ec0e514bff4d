//! # Entry store
//!
//! A single slab-backed arena owns every nonzero exactly once; the row and column chains
//! reference into it by key. Removing an entry from the store invalidates both chain views at
//! once, so there is no separate notion of which chain "owns" an entry.
use slab::Slab;

/// A single stored nonzero with its two chain links.
///
/// The links are keys into the store. `row_next` points to the next entry in the same row
/// (next larger column), `column_next` to the next entry in the same column (next larger row).
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Entry<F> {
    /// Row coordinate.
    pub row: usize,
    /// Column coordinate.
    pub column: usize,
    /// The stored value. Never the additive identity; a zero is represented by absence.
    pub value: F,
    /// Key of this row chain's next entry.
    pub row_next: Option<usize>,
    /// Key of this column chain's next entry.
    pub column_next: Option<usize>,
}

/// Iterator over one row chain, yielding `(column, &value)` in ascending column order.
#[derive(Debug, Clone)]
pub struct RowIter<'a, F> {
    entries: &'a Slab<Entry<F>>,
    next: Option<usize>,
}

impl<'a, F> RowIter<'a, F> {
    pub(super) fn new(entries: &'a Slab<Entry<F>>, head: Option<usize>) -> Self {
        Self { entries, next: head }
    }
}

impl<'a, F> Iterator for RowIter<'a, F> {
    type Item = (usize, &'a F);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next?;
        let entry = &self.entries[key];
        self.next = entry.row_next;

        Some((entry.column, &entry.value))
    }
}

/// Iterator over one column chain, yielding `(row, &value)` in ascending row order.
#[derive(Debug, Clone)]
pub struct ColumnIter<'a, F> {
    entries: &'a Slab<Entry<F>>,
    next: Option<usize>,
}

impl<'a, F> ColumnIter<'a, F> {
    pub(super) fn new(entries: &'a Slab<Entry<F>>, head: Option<usize>) -> Self {
        Self { entries, next: head }
    }
}

impl<'a, F> Iterator for ColumnIter<'a, F> {
    type Item = (usize, &'a F);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next?;
        let entry = &self.entries[key];
        self.next = entry.column_next;

        Some((entry.row, &entry.value))
    }
}
