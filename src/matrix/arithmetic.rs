//! # Arithmetic on the chain representation
//!
//! Every operation treats its operands as read-only and builds a fresh matrix by walking, or
//! merge-walking, operand chains and writing results through the ordinary insertion path.
//! Zeros produced along the way are therefore dropped automatically and results stay sparse.
use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use itertools::{EitherOrBoth, merge_join_by};
use num_traits::Zero;

use crate::error::Error;
use crate::matrix::CrossList;
use crate::matrix::store::Entry;

impl<F: Zero> CrossList<F> {
    /// Multiply every stored value by a scalar.
    ///
    /// Walks every row chain once, costing the number of nonzeros. A zero scalar yields an
    /// entirely empty result, because every product is zero and zeros are never stored.
    #[must_use]
    pub fn scalar_multiply<'a, G>(&'a self, scalar: G) -> Self
    where
        G: Copy,
        &'a F: Mul<G, Output = F>,
    {
        let mut result = Self::new(self.nr_rows(), self.nr_columns());
        for x in 0..self.nr_rows() {
            for (y, value) in self.row(x) {
                result.splice(x, y, value * scalar);
            }
        }

        result
    }

    /// The matrix product `self * other`.
    ///
    /// For every row of `self` and column of `other`, the two chains are merge-walked along
    /// the contraction axis: the row chain is sorted by column and the column chain by row,
    /// so the walk advances whichever cursor holds the smaller index and accumulates a
    /// product whenever they coincide. The cost per output coordinate is the sum of the two
    /// chain lengths, not the contraction dimension's extent.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` unless `self.nr_columns() == other.nr_rows()`.
    pub fn multiply<'a>(&'a self, other: &'a Self) -> Result<Self, Error>
    where
        &'a F: Mul<&'a F, Output = F>,
    {
        if self.nr_columns() != other.nr_rows() {
            return Err(Error::DimensionMismatch {
                left: (self.nr_rows(), self.nr_columns()),
                right: (other.nr_rows(), other.nr_columns()),
            });
        }

        let mut result = Self::new(self.nr_rows(), other.nr_columns());
        for i in 0..self.nr_rows() {
            for j in 0..other.nr_columns() {
                let mut row = self.row(i);
                let mut column = other.column(j);
                let mut row_cursor = row.next();
                let mut column_cursor = column.next();

                let mut sum = F::zero();
                while let (Some((k, left)), Some((l, right))) = (row_cursor, column_cursor) {
                    match k.cmp(&l) {
                        Ordering::Less => row_cursor = row.next(),
                        Ordering::Greater => column_cursor = column.next(),
                        Ordering::Equal => {
                            sum = sum + left * right;
                            row_cursor = row.next();
                            column_cursor = column.next();
                        },
                    }
                }

                // A zero sum is dropped here, keeping the result sparse.
                result.splice(i, j, sum);
            }
        }

        Ok(result)
    }

    /// The element-wise sum `self + other`.
    ///
    /// Merge-walks both operands' row chains per row. A column present in only one operand
    /// passes its value through unchanged; a column present in both yields the sum, which is
    /// dropped when it cancels to zero.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` unless the extents are identical.
    pub fn add<'a>(&'a self, other: &'a Self) -> Result<Self, Error>
    where
        F: Clone,
        &'a F: Add<&'a F, Output = F>,
    {
        self.same_extents_as(other)?;

        let mut result = Self::new(self.nr_rows(), self.nr_columns());
        for x in 0..self.nr_rows() {
            let merged = merge_join_by(self.row(x), other.row(x), |left, right| left.0.cmp(&right.0));
            for pair in merged {
                let (y, value) = match pair {
                    EitherOrBoth::Both((y, left), (_, right)) => (y, left + right),
                    EitherOrBoth::Left((y, value)) => (y, value.clone()),
                    EitherOrBoth::Right((y, value)) => (y, value.clone()),
                };
                result.splice(x, y, value);
            }
        }

        Ok(result)
    }

    /// The element-wise difference `self - other`.
    ///
    /// Like [`CrossList::add`], except a column present in only the right operand passes
    /// through negated.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` unless the extents are identical.
    pub fn subtract<'a>(&'a self, other: &'a Self) -> Result<Self, Error>
    where
        F: Clone,
        &'a F: Sub<&'a F, Output = F> + Neg<Output = F>,
    {
        self.same_extents_as(other)?;

        let mut result = Self::new(self.nr_rows(), self.nr_columns());
        for x in 0..self.nr_rows() {
            let merged = merge_join_by(self.row(x), other.row(x), |left, right| left.0.cmp(&right.0));
            for pair in merged {
                let (y, value) = match pair {
                    EitherOrBoth::Both((y, left), (_, right)) => (y, left - right),
                    EitherOrBoth::Left((y, value)) => (y, value.clone()),
                    EitherOrBoth::Right((y, value)) => (y, -value),
                };
                result.splice(x, y, value);
            }
        }

        Ok(result)
    }

    fn same_extents_as(&self, other: &Self) -> Result<(), Error> {
        if self.nr_rows() == other.nr_rows() && self.nr_columns() == other.nr_columns() {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                left: (self.nr_rows(), self.nr_columns()),
                right: (other.nr_rows(), other.nr_columns()),
            })
        }
    }
}

impl<F: Clone> CrossList<F> {
    /// The transpose, with swapped extents.
    ///
    /// Source columns are emitted in order. A source column chain is already sorted by row,
    /// so with coordinates swapped it becomes a destination row chain as-is. Destination
    /// column chains fill incrementally through a per-column tail key, valid because
    /// destination columns are populated smallest-row-first; no destination chain is
    /// rescanned from its head. Costs the number of nonzeros.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::new(self.nr_columns(), self.nr_rows());
        let mut column_tails: Vec<Option<usize>> = vec![None; self.nr_rows()];

        for i in 0..self.nr_columns() {
            let mut row_tail: Option<usize> = None;
            for (x, value) in self.column(i) {
                let key = result.entries.insert(Entry {
                    row: i,
                    column: x,
                    value: value.clone(),
                    row_next: None,
                    column_next: None,
                });

                match row_tail {
                    Some(previous) => result.entries[previous].row_next = Some(key),
                    None => result.row_heads[i] = Some(key),
                }
                row_tail = Some(key);

                match column_tails[x] {
                    Some(previous) => result.entries[previous].column_next = Some(key),
                    None => result.column_heads[x] = Some(key),
                }
                column_tails[x] = Some(key);
            }
        }

        result
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::matrix::CrossList;

    fn fixture() -> CrossList<i32> {
        CrossList::from_dense(vec![
            vec![1, 0, 2],
            vec![0, -3, 0],
        ])
    }

    #[test]
    fn scalar_multiply_scales_every_nonzero() {
        let scaled = fixture().scalar_multiply(4);

        assert_eq!(scaled, CrossList::from_dense(vec![
            vec![4, 0, 8],
            vec![0, -12, 0],
        ]));
        assert_eq!(scaled.size(), 3);
    }

    #[test]
    fn scalar_multiply_by_zero_empties_the_result() {
        let scaled = fixture().scalar_multiply(0);

        assert_eq!(scaled.size(), 0);
        assert_eq!(scaled.nr_rows(), 2);
        assert_eq!(scaled.nr_columns(), 3);
    }

    #[test]
    fn multiply_diagonal_example() {
        let mut left = CrossList::new(2, 2);
        left.set(0, 0, 1).unwrap();
        left.set(1, 1, 2).unwrap();

        let mut right = CrossList::new(2, 2);
        right.set(0, 1, 3).unwrap();

        let product = left.multiply(&right).unwrap();
        assert_eq!(product, CrossList::from_dense(vec![
            vec![0, 3],
            vec![0, 0],
        ]));
    }

    #[test]
    fn multiply_contracts_along_the_shared_axis() {
        let left = fixture();                        // 2x3
        let right = CrossList::from_dense(vec![      // 3x2
            vec![0, 1],
            vec![2, 0],
            vec![0, -1],
        ]);

        let product = left.multiply(&right).unwrap();
        assert_eq!(product, CrossList::from_dense(vec![
            vec![0, -1],
            vec![-6, 0],
        ]));
    }

    #[test]
    fn multiply_by_identity_is_a_no_op() {
        let matrix = fixture();

        assert_eq!(matrix.multiply(&CrossList::identity(3)).unwrap(), matrix);
        assert_eq!(CrossList::identity(2).multiply(&matrix).unwrap(), matrix);
    }

    #[test]
    fn multiply_rejects_mismatched_extents() {
        let left = CrossList::<i32>::new(2, 3);
        let right = CrossList::<i32>::new(2, 2);

        assert_eq!(
            left.multiply(&right),
            Err(Error::DimensionMismatch { left: (2, 3), right: (2, 2) }),
        );
    }

    #[test]
    fn add_merges_per_row() {
        let left = fixture();
        let right = CrossList::from_dense(vec![
            vec![-1, 5, 0],
            vec![0, 3, 1],
        ]);

        let sum = left.add(&right).unwrap();
        // (0, 0) cancels to zero and is dropped from the result.
        assert_eq!(sum, CrossList::from_dense(vec![
            vec![0, 5, 2],
            vec![0, 0, 1],
        ]));
        assert_eq!(sum.size(), 3);
    }

    #[test]
    fn subtract_negates_right_only_columns() {
        let left = CrossList::from_dense(vec![vec![0, 2]]);
        let right = CrossList::from_dense(vec![vec![7, 2]]);

        let difference = left.subtract(&right).unwrap();
        assert_eq!(difference, CrossList::from_dense(vec![vec![-7, 0]]));
    }

    #[test]
    fn add_rejects_mismatched_extents() {
        let left = CrossList::<i32>::new(2, 3);
        let right = CrossList::<i32>::new(3, 2);

        assert_eq!(
            left.add(&right),
            Err(Error::DimensionMismatch { left: (2, 3), right: (3, 2) }),
        );
        assert_eq!(
            left.subtract(&right),
            Err(Error::DimensionMismatch { left: (2, 3), right: (3, 2) }),
        );
    }

    #[test]
    fn transpose_swaps_extents_and_coordinates() {
        let transposed = fixture().transpose();

        assert_eq!(transposed, CrossList::from_dense(vec![
            vec![1, 0],
            vec![0, -3],
            vec![2, 0],
        ]));
    }

    #[test]
    fn transpose_builds_sorted_chains() {
        let transposed = fixture().transpose();

        // Row chains ascending by column, column chains ascending by row.
        let row = transposed.row(0).map(|(y, &v)| (y, v)).collect::<Vec<_>>();
        assert_eq!(row, vec![(0, 1)]);
        let column = transposed.column(0).map(|(x, &v)| (x, v)).collect::<Vec<_>>();
        assert_eq!(column, vec![(0, 1), (2, 2)]);
    }
}
