//! Integration tests for the Matrix container.

use cellmat::Matrix;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn zeros_shape_and_contents() {
    let m = Matrix::<f64>::zeros(3, 4);
    assert_eq!(m.shape(), (3, 4));
    assert_eq!(m.len(), 12);
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn from_shape_vec_checks_length() {
    let ok = Matrix::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]);
    assert!(ok.is_ok());

    let err = Matrix::from_shape_vec((2, 3), vec![1, 2, 3]);
    let msg = err.unwrap_err().to_string();
    assert!(msg.contains("invalid shape"), "unexpected message: {}", msg);
}

#[test]
fn from_elem_broadcasts() {
    let m = Matrix::from_elem((2, 2), 7i32);
    assert!(m.as_slice().iter().all(|&v| v == 7));
}

#[test]
fn identity_has_ones_on_diagonal() {
    let id = Matrix::<f64>::identity(3);
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(id[(r, c)], if r == c { 1.0 } else { 0.0 });
        }
    }
}

// ---------------------------------------------------------------------------
// Indexing
// ---------------------------------------------------------------------------

#[test]
fn flat_and_structured_indexing_agree() {
    let m = Matrix::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(m[(0, 0)], m[0]);
    assert_eq!(m[(0, 2)], m[2]);
    assert_eq!(m[(1, 0)], m[3]);
    assert_eq!(m[(1, 2)], m[5]);
}

#[test]
fn reverse_lookup_maps_flat_to_row_col() {
    let m = Matrix::<f64>::zeros(4, 5);
    assert_eq!(m.row_of(0), 0);
    assert_eq!(m.col_of(0), 0);
    assert_eq!(m.row_of(7), 1);
    assert_eq!(m.col_of(7), 2);
    assert_eq!(m.row_of(19), 3);
    assert_eq!(m.col_of(19), 4);
}

#[test]
fn row_slice_is_contiguous() {
    let m = Matrix::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(m.row_slice(0), &[1, 2, 3]);
    assert_eq!(m.row_slice(1), &[4, 5, 6]);
}

#[test]
fn write_through_indexing() {
    let mut m = Matrix::<i64>::zeros(2, 2);
    m[(0, 1)] = 9;
    m[3] = 4;
    assert_eq!(m.as_slice(), &[0, 9, 0, 4]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn structured_index_out_of_range_panics() {
    let m = Matrix::<f64>::zeros(2, 2);
    let _ = m[(2, 0)];
}

// ---------------------------------------------------------------------------
// Bulk assignment helpers
// ---------------------------------------------------------------------------

#[test]
fn fill_overwrites_every_cell() {
    let mut m = Matrix::<f64>::zeros(3, 3);
    m.fill(2.5);
    assert!(m.as_slice().iter().all(|&v| v == 2.5));
}

#[test]
fn set_ignores_surplus_and_zeroes_missing() {
    let mut m = Matrix::from_elem((2, 2), 9i32);
    m.set(&[1, 2, 3, 4, 5, 6]);
    assert_eq!(m.as_slice(), &[1, 2, 3, 4]);

    m.set(&[8, 7]);
    assert_eq!(m.as_slice(), &[8, 7, 0, 0]);
}

#[test]
fn set_random_respects_bounds() {
    let mut m = Matrix::<i32>::zeros(6, 10);
    m.set_random(0, 9);
    assert!(m.as_slice().iter().all(|&v| (0..=9).contains(&v)));
}

#[test]
fn set_random_with_seeded_rng_is_deterministic() {
    let mut a = Matrix::<f64>::zeros(4, 4);
    let mut b = Matrix::<f64>::zeros(4, 4);
    a.set_random_with(&mut StdRng::seed_from_u64(42), 0, 9);
    b.set_random_with(&mut StdRng::seed_from_u64(42), 0, 9);
    assert_eq!(a, b);
    // Values are integer-valued even for float elements.
    assert!(a.as_slice().iter().all(|&v| v == v.trunc()));
}

// ---------------------------------------------------------------------------
// Reductions and comparisons
// ---------------------------------------------------------------------------

#[test]
fn min_max_scan_the_whole_buffer() {
    let m = Matrix::from_shape_vec((2, 3), vec![4.0, -1.0, 7.5, 0.0, 3.0, 2.0]).unwrap();
    assert_eq!(m.min(), -1.0);
    assert_eq!(m.max(), 7.5);
}

#[test]
fn equality_compares_shape_and_data() {
    let a = Matrix::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    let b = Matrix::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    let c = Matrix::from_shape_vec((2, 2), vec![1, 2, 3, 5]).unwrap();
    let d = Matrix::from_shape_vec((4, 1), vec![1, 2, 3, 4]).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, d); // same data, different shape
}

#[test]
fn extrema_ordering_uses_global_min_and_max() {
    // a spans [0, 10], b spans [1, 2]: a is "less" by min and "greater" by
    // max at the same time. These are extrema comparisons, not an order.
    let a = Matrix::from_shape_vec((1, 2), vec![0.0, 10.0]).unwrap();
    let b = Matrix::from_shape_vec((1, 2), vec![1.0, 2.0]).unwrap();

    assert!(a.min_lt(&b));
    assert!(a.max_gt(&b));
    assert!(!b.min_lt(&a));
    assert!(!b.max_gt(&a));
}

#[test]
fn display_renders_rows() {
    let m = Matrix::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    assert_eq!(format!("{}", m), "[1, 2]\n[3, 4]\n");
}
