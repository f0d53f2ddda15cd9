//! Matrix algebra: transpose, cofactor expansion, determinant, adjoint,
//! inverse.
//!
//! These routines work by direct indexing rather than through the
//! expression graph (the one exception is `inverse`, which divides the
//! adjoint by the determinant with an expression node). Determinants use
//! recursive cofactor expansion along row 0, which is exact but exponential;
//! intended for the small matrices these containers are built around.

use crate::element::Element;
use crate::error::SingularMatrixError;
use crate::expr::{Broadcast, Divide, MatrixBinary};
use crate::matrix::Matrix;

fn square_dim<T>(a: &Matrix<T>) -> usize {
    let (rows, cols) = a.shape();
    assert_eq!(
        rows, cols,
        "expected a square matrix, got shape ({}, {})",
        rows, cols
    );
    rows
}

/// New matrix of swapped shape with `t[(c, r)] = m[(r, c)]`.
pub fn transpose<T: Element>(m: &Matrix<T>) -> Matrix<T> {
    let mut t = Matrix::zeros(m.ncols(), m.nrows());
    for r in 0..m.nrows() {
        for c in 0..m.ncols() {
            t[(c, r)] = m[(r, c)];
        }
    }
    t
}

/// The (n-1)x(n-1) matrix formed by deleting row `p` and column `q` of an
/// n-by-n matrix, preserving the relative order of the remaining rows and
/// columns. Undefined for 1x1 input (panics).
pub fn cofactor<T: Element>(a: &Matrix<T>, p: usize, q: usize) -> Matrix<T> {
    let n = square_dim(a);
    assert!(n >= 2, "cofactor of a 1x1 matrix is undefined");
    assert!(
        p < n && q < n,
        "cofactor indices ({}, {}) out of bounds for a {}x{} matrix",
        p,
        q,
        n,
        n
    );
    let mut out = Matrix::zeros(n - 1, n - 1);
    let mut i = 0;
    let mut j = 0;
    for row in 0..n {
        for col in 0..n {
            if row != p && col != q {
                out[(i, j)] = a[(row, col)];
                j += 1;
                if j == n - 1 {
                    j = 0;
                    i += 1;
                }
            }
        }
    }
    out
}

/// Determinant by cofactor expansion along row 0.
pub fn determinant<T: Element>(a: &Matrix<T>) -> T {
    let n = square_dim(a);
    assert!(n > 0, "determinant of an empty matrix");
    // The recursion must terminate here: cofactors of a 1x1 matrix do not
    // exist.
    if n == 1 {
        return a[(0, 0)];
    }
    let mut det = T::zero();
    let mut positive = true;
    for c in 0..n {
        let term = a[(0, c)] * determinant(&cofactor(a, 0, c));
        det = if positive { det + term } else { det - term };
        positive = !positive;
    }
    det
}

/// Transpose of the cofactor matrix:
/// `adj[(j, i)] = sign(i + j) * det(cofactor(a, i, j))`.
pub fn adjoint<T: Element>(a: &Matrix<T>) -> Matrix<T> {
    let n = square_dim(a);
    assert!(n > 0, "adjoint of an empty matrix");
    // 1x1 bypasses the sign/determinant formula entirely.
    if n == 1 {
        return Matrix::from_elem((1, 1), T::one());
    }
    let mut adj = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let minor = determinant(&cofactor(a, i, j));
            adj[(j, i)] = if (i + j) % 2 == 0 {
                minor
            } else {
                T::zero() - minor
            };
        }
    }
    adj
}

/// Inverse via the adjoint formula.
///
/// A determinant of exactly zero is a recoverable failure: the caller gets
/// [`SingularMatrixError`] and may branch around the inversion.
pub fn inverse<T: Element>(a: &Matrix<T>) -> Result<Matrix<T>, SingularMatrixError> {
    let det = determinant(a);
    if det == T::zero() {
        log::warn!(
            "singular {}x{} matrix, inverse does not exist",
            a.nrows(),
            a.ncols()
        );
        return Err(SingularMatrixError);
    }
    let adj = adjoint(a);
    let scaled = MatrixBinary::<_, Divide, _>::new(&adj, Broadcast(det));
    Ok(scaled.eval())
}
