//! Algebraic identities that should hold for any operand extents and sparsity patterns.
use crate::error::Error;
use crate::matrix::CrossList;

fn left() -> CrossList<i32> {
    CrossList::from_dense(vec![
        vec![2, 0, 0, -1],
        vec![0, 0, 3, 0],
        vec![5, -4, 0, 0],
    ])
}

fn right() -> CrossList<i32> {
    CrossList::from_dense(vec![
        vec![0, 7, 0, 1],
        vec![0, 0, -3, 0],
        vec![-5, 4, 1, 8],
    ])
}

#[test]
fn add_then_subtract_restores_the_left_operand() {
    let a = left();
    let b = right();

    // (2, 0) and (2, 1) cancel in the sum and reappear in the difference.
    let restored = a.add(&b).unwrap().subtract(&b).unwrap();
    assert_eq!(restored, a);
}

#[test]
fn subtracting_a_matrix_from_itself_yields_an_empty_matrix() {
    let a = left();

    let difference = a.subtract(&a).unwrap();
    assert_eq!(difference.size(), 0);
    assert_eq!(difference, CrossList::new(3, 4));
}

#[test]
fn transpose_is_an_involution() {
    let a = left();

    assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn transpose_reverses_multiplication_order() {
    let a = left();                                  // 3x4
    let b = CrossList::from_dense(vec![              // 4x2
        vec![1, 0],
        vec![0, 2],
        vec![0, -1],
        vec![3, 0],
    ]);

    // (A B)^T == B^T A^T
    let direct = a.multiply(&b).unwrap().transpose();
    let reversed = b.transpose().multiply(&a.transpose()).unwrap();
    assert_eq!(direct, reversed);
}

#[test]
fn scalar_multiplication_distributes_over_addition() {
    let a = left();
    let b = right();

    let scaled_sum = a.add(&b).unwrap().scalar_multiply(3);
    let sum_of_scaled = a.scalar_multiply(3).add(&b.scalar_multiply(3)).unwrap();
    assert_eq!(scaled_sum, sum_of_scaled);
}

#[test]
fn multiplication_is_associative() {
    let a = left();                                  // 3x4
    let b = CrossList::from_dense(vec![              // 4x3
        vec![0, 1, 0],
        vec![2, 0, 0],
        vec![0, 0, 0],
        vec![0, -1, 4],
    ]);
    let c = right();                                 // 3x4

    let left_first = a.multiply(&b).unwrap().multiply(&c).unwrap();
    let right_first = a.multiply(&b.multiply(&c).unwrap()).unwrap();
    assert_eq!(left_first, right_first);
}

#[test]
fn operands_are_left_untouched() {
    let a = left();
    let b = right();
    let a_before = a.clone();
    let b_before = b.clone();

    let _ = a.add(&b).unwrap();
    let _ = a.subtract(&b).unwrap();
    let _ = a.scalar_multiply(-2);
    let _ = a.transpose();

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn mismatched_extents_are_reported_with_both_operands() {
    let a = left();
    let b = a.transpose();

    assert_eq!(
        a.add(&b),
        Err(Error::DimensionMismatch { left: (3, 4), right: (4, 3) }),
    );
}

#[test]
fn floating_point_values_are_supported() {
    let a = CrossList::from_dense(vec![
        vec![0.5, 0.0],
        vec![0.0, -2.0],
    ]);

    let product = a.multiply(&a).unwrap();
    assert_eq!(product.get(0, 0), Ok(0.25));
    assert_eq!(product.get(1, 1), Ok(4.0));
    assert_eq!(product.size(), 2);

    assert_eq!(a.scalar_multiply(2.0).get(0, 0), Ok(1.0));
}
