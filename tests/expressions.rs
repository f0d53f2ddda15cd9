//! Integration tests for the lazy expression engine over matrices.

use cellmat::{Matrix, MatrixOperand};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(rows: usize, cols: usize, seed: u64) -> Matrix<f64> {
    let mut m = Matrix::zeros(rows, cols);
    m.set_random_with(&mut StdRng::seed_from_u64(seed), 0, 9);
    m
}

// ---------------------------------------------------------------------------
// Laziness
// ---------------------------------------------------------------------------

#[test]
fn nodes_evaluate_on_demand_without_materializing() {
    let a = seeded(3, 3, 1);
    let b = seeded(3, 3, 2);
    let node = &a + &b;
    // Individual elements can be pulled out of the unevaluated tree.
    assert_eq!(MatrixOperand::<f64>::at(&node, 4), a[4] + b[4]);
    assert_eq!(MatrixOperand::<f64>::at_rc(&node, 2, 1), a[(2, 1)] + b[(2, 1)]);
}

#[test]
fn reevaluating_a_node_recomputes_identically() {
    let a = seeded(2, 2, 3);
    let b = seeded(2, 2, 4);
    let node = &a * &b;
    let first: Matrix<f64> = node.eval();
    let second: Matrix<f64> = node.eval();
    assert_eq!(first, second);
}

#[test]
fn in_place_update_through_eval() {
    let b = seeded(2, 2, 5);
    let mut a = seeded(2, 2, 6);
    let expected: Matrix<f64> = (&a + &b).eval();
    a = (&a + &b).eval();
    assert_eq!(a, expected);
}

#[test]
fn owned_operands_move_into_the_node() {
    let a = Matrix::from_shape_vec((1, 2), vec![1.0, 2.0]).unwrap();
    let b = Matrix::from_shape_vec((1, 2), vec![3.0, 4.0]).unwrap();
    let node = a + b; // both moved; the node is self-contained
    let out: Matrix<f64> = node.eval();
    assert_eq!(out.as_slice(), &[4.0, 6.0]);
}

// ---------------------------------------------------------------------------
// Elementwise algebra
// ---------------------------------------------------------------------------

#[test]
fn addition_is_commutative() {
    let a = seeded(4, 3, 7);
    let b = seeded(4, 3, 8);
    let ab: Matrix<f64> = (&a + &b).eval();
    let ba: Matrix<f64> = (&b + &a).eval();
    assert_eq!(ab, ba);
}

#[test]
fn addition_is_associative() {
    let a = seeded(3, 3, 9);
    let b = seeded(3, 3, 10);
    let c = seeded(3, 3, 11);
    let left: Matrix<f64> = ((&a + &b) + &c).eval();
    let right: Matrix<f64> = (&a + (&b + &c)).eval();
    assert_eq!(left, right);
}

#[test]
fn subtraction_and_division_are_not_commutative() {
    let mut a = Matrix::<f64>::zeros(1, 2);
    let mut b = Matrix::<f64>::zeros(1, 2);
    a.set(&[8.0, 6.0]);
    b.set(&[2.0, 3.0]);
    let sub: Matrix<f64> = (&a - &b).eval();
    let div: Matrix<f64> = (&a / &b).eval();
    assert_eq!(sub.as_slice(), &[6.0, 3.0]);
    assert_eq!(div.as_slice(), &[4.0, 2.0]);
}

#[test]
fn scalars_compose_on_both_sides() {
    let mut a = Matrix::<f64>::zeros(2, 2);
    a.set(&[1.0, 2.0, 3.0, 4.0]);

    let plus: Matrix<f64> = (7.9 + &a).eval();
    assert_eq!(plus[(0, 0)], 7.9 + 1.0);

    let scaled: Matrix<f64> = (&a * 2.0).eval();
    assert_eq!(scaled.as_slice(), &[2.0, 4.0, 6.0, 8.0]);

    let offset: Matrix<f64> = (&a - 1.0).eval();
    assert_eq!(offset.as_slice(), &[0.0, 1.0, 2.0, 3.0]);

    let inverted: Matrix<f64> = (12.0 / &a).eval();
    assert_eq!(inverted.as_slice(), &[12.0, 6.0, 4.0, 3.0]);
}

#[test]
fn integer_elements_work_end_to_end() {
    let mut a = Matrix::<i64>::zeros(2, 2);
    a.set(&[1, 2, 3, 4]);
    let out: Matrix<i64> = ((&a + 1) * &a).eval();
    // (a + 1) * a is a true matrix product: [[2,3],[4,5]] * [[1,2],[3,4]]
    assert_eq!(out.as_slice(), &[11, 16, 19, 28]);
}

// ---------------------------------------------------------------------------
// Matrix products
// ---------------------------------------------------------------------------

#[test]
fn product_follows_matrix_multiply_rules() {
    let a = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let b = Matrix::from_shape_vec((2, 2), vec![5.0, 6.0, 7.0, 8.0]).unwrap();
    let c: Matrix<f64> = (&a * &b).eval();
    assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn product_of_rectangular_shapes() {
    let a = Matrix::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let b = Matrix::from_shape_vec((3, 1), vec![1.0, 0.0, -1.0]).unwrap();
    let c: Matrix<f64> = (&a * &b).eval();
    assert_eq!(c.shape(), (2, 1));
    assert_eq!(c.as_slice(), &[-2.0, -2.0]);
}

#[test]
fn multiply_distributes_over_addition() {
    let a = seeded(3, 4, 20);
    let b = seeded(4, 2, 21);
    let c = seeded(4, 2, 22);
    let left: Matrix<f64> = (&a * (&b + &c)).eval();
    let right: Matrix<f64> = (&a * &b + &a * &c).eval();
    assert_eq!(left, right);
}

#[test]
fn nested_expression_matches_manual_evaluation() {
    let mat1 = seeded(6, 10, 30);
    let mat2 = seeded(6, 10, 31);
    let mat4 = seeded(10, 4, 32);
    let mat5 = seeded(10, 4, 33);

    let mat6: Matrix<f64> = (((&mat1 + 7.9) * &mat4) - ((&mat2 * 2.8) * (3.3 + &mat5))).eval();
    assert_eq!(mat6.shape(), (6, 4));

    for r in 0..6 {
        for c in 0..4 {
            let mut first = 0.0;
            let mut second = 0.0;
            for k in 0..10 {
                first += (mat1[(r, k)] + 7.9) * mat4[(k, c)];
                second += (mat2[(r, k)] * 2.8) * (3.3 + mat5[(k, c)]);
            }
            assert_eq!(mat6[(r, c)], first - second);
        }
    }
}

#[test]
fn assign_writes_into_an_existing_matrix() {
    let a = seeded(2, 3, 40);
    let b = seeded(3, 2, 41);
    let mut out = Matrix::<f64>::zeros(2, 2);
    out.assign(&a * &b);
    let reference: Matrix<f64> = (&a * &b).eval();
    assert_eq!(out, reference);
}

// ---------------------------------------------------------------------------
// Shape rejection at construction
// ---------------------------------------------------------------------------

#[test]
#[should_panic(expected = "shape mismatch")]
fn elementwise_shape_mismatch_is_rejected_at_construction() {
    let a = Matrix::<f64>::zeros(2, 2);
    let b = Matrix::<f64>::zeros(2, 3);
    let _ = &a + &b;
}

#[test]
#[should_panic(expected = "cannot multiply")]
fn product_inner_dimension_mismatch_is_rejected_at_construction() {
    let a = Matrix::<f64>::zeros(2, 3);
    let b = Matrix::<f64>::zeros(2, 3);
    let _ = &a * &b;
}

#[test]
#[should_panic(expected = "shape mismatch")]
fn assign_rejects_wrong_destination_shape() {
    let a = Matrix::<f64>::zeros(2, 2);
    let b = Matrix::<f64>::zeros(2, 2);
    let mut out = Matrix::<f64>::zeros(3, 3);
    out.assign(&a + &b);
}
