//! Integration tests for transpose, cofactor, determinant, adjoint, inverse.

use cellmat::algebra::{adjoint, cofactor, determinant, inverse, transpose};
use cellmat::Matrix;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_shape_and_indices() {
    let m = Matrix::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let t = transpose(&m);
    assert_eq!(t.shape(), (3, 2));
    for r in 0..2 {
        for c in 0..3 {
            assert_eq!(t[(c, r)], m[(r, c)]);
        }
    }
}

#[test]
fn transpose_is_an_involution() {
    let mut m = Matrix::<f64>::zeros(4, 7);
    m.set_random_with(&mut StdRng::seed_from_u64(50), 0, 9);
    assert_eq!(transpose(&transpose(&m)), m);
}

// ---------------------------------------------------------------------------
// Cofactor
// ---------------------------------------------------------------------------

#[test]
fn cofactor_deletes_row_and_column_in_order() {
    let m = Matrix::from_shape_vec((3, 3), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    let c = cofactor(&m, 1, 0);
    assert_eq!(c.shape(), (2, 2));
    assert_eq!(c.as_slice(), &[2, 3, 8, 9]);
}

#[test]
#[should_panic(expected = "1x1")]
fn cofactor_of_one_by_one_is_undefined() {
    let m = Matrix::from_elem((1, 1), 4.0);
    let _ = cofactor(&m, 0, 0);
}

// ---------------------------------------------------------------------------
// Determinant
// ---------------------------------------------------------------------------

#[test]
fn determinant_of_one_by_one_returns_the_element() {
    let m = Matrix::from_elem((1, 1), -3.5);
    assert_eq!(determinant(&m), -3.5);
}

#[test]
fn determinant_of_identity_is_one() {
    for n in 1..=4 {
        let id = Matrix::<f64>::identity(n);
        assert_eq!(determinant(&id), 1.0);
    }
}

#[test]
fn determinant_of_known_matrices() {
    let m = Matrix::from_shape_vec((2, 2), vec![3.0, 8.0, 4.0, 6.0]).unwrap();
    assert_eq!(determinant(&m), -14.0);

    let m = Matrix::from_shape_vec((3, 3), vec![6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0])
        .unwrap();
    assert_eq!(determinant(&m), -306.0);
}

#[test]
fn determinant_with_zero_row_is_zero() {
    let m = Matrix::from_shape_vec((3, 3), vec![1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 7.0, 8.0, 9.0])
        .unwrap();
    assert_eq!(determinant(&m), 0.0);
}

#[test]
#[should_panic(expected = "square")]
fn determinant_requires_a_square_matrix() {
    let m = Matrix::<f64>::zeros(2, 3);
    let _ = determinant(&m);
}

// ---------------------------------------------------------------------------
// Adjoint
// ---------------------------------------------------------------------------

#[test]
fn adjoint_of_one_by_one_is_unit() {
    let m = Matrix::from_elem((1, 1), 123.0);
    let adj = adjoint(&m);
    assert_eq!(adj.shape(), (1, 1));
    assert_eq!(adj[(0, 0)], 1.0);
}

#[test]
fn adjoint_of_two_by_two_swaps_and_negates() {
    let m = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let adj = adjoint(&m);
    assert_eq!(adj.as_slice(), &[4.0, -2.0, -3.0, 1.0]);
}

#[test]
fn adjoint_satisfies_a_times_adj_equals_det_times_identity() {
    let mut m = Matrix::<f64>::zeros(3, 3);
    m.set(&[2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0]);
    let det = determinant(&m);
    let product: Matrix<f64> = (&m * &adjoint(&m)).eval();
    for r in 0..3 {
        for c in 0..3 {
            let expected = if r == c { det } else { 0.0 };
            assert!((product[(r, c)] - expected).abs() < 1e-9);
        }
    }
}

// ---------------------------------------------------------------------------
// Inverse
// ---------------------------------------------------------------------------

#[test]
fn inverse_of_scaled_identity() {
    let m = Matrix::from_shape_vec((2, 2), vec![2.0, 0.0, 0.0, 2.0]).unwrap();
    let inv = inverse(&m).unwrap();
    assert_eq!(inv.as_slice(), &[0.5, 0.0, 0.0, 0.5]);
}

#[test]
fn inverse_times_original_approximates_identity() {
    let m = Matrix::from_shape_vec(
        (3, 3),
        vec![4.0, 7.0, 2.0, 3.0, 6.0, 1.0, 2.0, 5.0, 3.0],
    )
    .unwrap();
    let inv = inverse(&m).unwrap();
    let product: Matrix<f64> = (&inv * &m).eval();
    for r in 0..3 {
        for c in 0..3 {
            let expected = if r == c { 1.0 } else { 0.0 };
            assert!(
                (product[(r, c)] - expected).abs() < 1e-9,
                "({}, {}) = {}",
                r,
                c,
                product[(r, c)]
            );
        }
    }
}

#[test]
fn inverse_of_singular_matrix_is_a_recoverable_error() {
    // Zero row makes the determinant exactly zero.
    let m = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 0.0, 0.0]).unwrap();
    let err = inverse(&m).unwrap_err();
    assert!(err.to_string().contains("singular"));

    // The caller can branch and retry with a different matrix.
    let fixed = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 0.0, 1.0]).unwrap();
    assert!(inverse(&fixed).is_ok());
}

#[test]
fn round_trip_assignment_matches_direct_formula() {
    let mut a = Matrix::<f64>::zeros(3, 3);
    a.set_random_with(&mut StdRng::seed_from_u64(60), 1, 9);
    let halved_plus: Matrix<f64> = (&a / 2.0 + 1.0).eval();
    for i in 0..a.len() {
        assert_eq!(halved_plus[i], a[i] / 2.0 + 1.0);
    }
}
