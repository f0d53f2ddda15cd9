//! The arithmetic-symbol dispatch tables.
//!
//! Every mathematically valid left-kind × right-kind pair gets a
//! `std::ops` impl building the matching expression node; invalid pairs
//! (a plain array with a plain matrix, for instance) are rejected by
//! omission — no impl exists, so the combination does not compile.
//!
//! `*` builds a true product node between matrix-shaped operands and an
//! elementwise scaling node everywhere else. Scalars are supported on either
//! side for `f32`, `f64`, `i32`, and `i64`; generic code can wrap any
//! element in [`Broadcast`] instead.

use std::ops::{Add, Div, Mul, Sub};

use crate::cell::CellArray;
use crate::matrix::Matrix;

#[cfg(feature = "composite")]
use crate::field::MatrixField;

use super::node::{ArrayBinary, MatrixBinary, MatrixProduct};
#[cfg(feature = "composite")]
use super::node::{FieldBinary, FieldProduct};
use super::ops::{Divide, Minus, Plus, Times};
use super::Broadcast;

/// All four symbols build the same elementwise node kind: these are the
/// pairs where `*` scales value-by-value.
macro_rules! elementwise {
    ([$($g:tt)*], $L:ty, $R:ty, $node:ident) => {
        impl<$($g)*> Add<$R> for $L {
            type Output = $node<$L, Plus, $R>;
            #[inline]
            fn add(self, rhs: $R) -> Self::Output {
                $node::new(self, rhs)
            }
        }

        impl<$($g)*> Sub<$R> for $L {
            type Output = $node<$L, Minus, $R>;
            #[inline]
            fn sub(self, rhs: $R) -> Self::Output {
                $node::new(self, rhs)
            }
        }

        impl<$($g)*> Mul<$R> for $L {
            type Output = $node<$L, Times, $R>;
            #[inline]
            fn mul(self, rhs: $R) -> Self::Output {
                $node::new(self, rhs)
            }
        }

        impl<$($g)*> Div<$R> for $L {
            type Output = $node<$L, Divide, $R>;
            #[inline]
            fn div(self, rhs: $R) -> Self::Output {
                $node::new(self, rhs)
            }
        }
    };
}

/// `+ - /` build the elementwise node; `*` builds the product node.
macro_rules! with_product {
    ([$($g:tt)*], $L:ty, $R:ty, $node:ident, $prod:ident) => {
        impl<$($g)*> Add<$R> for $L {
            type Output = $node<$L, Plus, $R>;
            #[inline]
            fn add(self, rhs: $R) -> Self::Output {
                $node::new(self, rhs)
            }
        }

        impl<$($g)*> Sub<$R> for $L {
            type Output = $node<$L, Minus, $R>;
            #[inline]
            fn sub(self, rhs: $R) -> Self::Output {
                $node::new(self, rhs)
            }
        }

        impl<$($g)*> Mul<$R> for $L {
            type Output = $prod<$L, $R>;
            #[inline]
            fn mul(self, rhs: $R) -> Self::Output {
                $prod::new(self, rhs)
            }
        }

        impl<$($g)*> Div<$R> for $L {
            type Output = $node<$L, Divide, $R>;
            #[inline]
            fn div(self, rhs: $R) -> Self::Output {
                $node::new(self, rhs)
            }
        }
    };
}

/// Scalar on the left; the scalar rides in the node as a [`Broadcast`].
macro_rules! scalar_left {
    ([$($g:tt)*], $s:ty, $R:ty, $node:ident) => {
        impl<$($g)*> Add<$R> for $s {
            type Output = $node<Broadcast<$s>, Plus, $R>;
            #[inline]
            fn add(self, rhs: $R) -> Self::Output {
                $node::new(Broadcast(self), rhs)
            }
        }

        impl<$($g)*> Sub<$R> for $s {
            type Output = $node<Broadcast<$s>, Minus, $R>;
            #[inline]
            fn sub(self, rhs: $R) -> Self::Output {
                $node::new(Broadcast(self), rhs)
            }
        }

        impl<$($g)*> Mul<$R> for $s {
            type Output = $node<Broadcast<$s>, Times, $R>;
            #[inline]
            fn mul(self, rhs: $R) -> Self::Output {
                $node::new(Broadcast(self), rhs)
            }
        }

        impl<$($g)*> Div<$R> for $s {
            type Output = $node<Broadcast<$s>, Divide, $R>;
            #[inline]
            fn div(self, rhs: $R) -> Self::Output {
                $node::new(Broadcast(self), rhs)
            }
        }
    };
}

/// Scalar on the right.
macro_rules! scalar_right {
    ([$($g:tt)*], $L:ty, $s:ty, $node:ident) => {
        impl<$($g)*> Add<$s> for $L {
            type Output = $node<$L, Plus, Broadcast<$s>>;
            #[inline]
            fn add(self, rhs: $s) -> Self::Output {
                $node::new(self, Broadcast(rhs))
            }
        }

        impl<$($g)*> Sub<$s> for $L {
            type Output = $node<$L, Minus, Broadcast<$s>>;
            #[inline]
            fn sub(self, rhs: $s) -> Self::Output {
                $node::new(self, Broadcast(rhs))
            }
        }

        impl<$($g)*> Mul<$s> for $L {
            type Output = $node<$L, Times, Broadcast<$s>>;
            #[inline]
            fn mul(self, rhs: $s) -> Self::Output {
                $node::new(self, Broadcast(rhs))
            }
        }

        impl<$($g)*> Div<$s> for $L {
            type Output = $node<$L, Divide, Broadcast<$s>>;
            #[inline]
            fn div(self, rhs: $s) -> Self::Output {
                $node::new(self, Broadcast(rhs))
            }
        }
    };
}

// ---------------------------------------------------------------------------
// matrix ⊕ matrix
// ---------------------------------------------------------------------------

with_product!([T], Matrix<T>, Matrix<T>, MatrixBinary, MatrixProduct);
with_product!(['b, T], Matrix<T>, &'b Matrix<T>, MatrixBinary, MatrixProduct);
with_product!([T, L2, O2, R2], Matrix<T>, MatrixBinary<L2, O2, R2>, MatrixBinary, MatrixProduct);
with_product!([T, L2, R2], Matrix<T>, MatrixProduct<L2, R2>, MatrixBinary, MatrixProduct);

with_product!(['a, T], &'a Matrix<T>, Matrix<T>, MatrixBinary, MatrixProduct);
with_product!(['a, 'b, T], &'a Matrix<T>, &'b Matrix<T>, MatrixBinary, MatrixProduct);
with_product!(['a, T, L2, O2, R2], &'a Matrix<T>, MatrixBinary<L2, O2, R2>, MatrixBinary, MatrixProduct);
with_product!(['a, T, L2, R2], &'a Matrix<T>, MatrixProduct<L2, R2>, MatrixBinary, MatrixProduct);

with_product!([L1, O1, R1, T], MatrixBinary<L1, O1, R1>, Matrix<T>, MatrixBinary, MatrixProduct);
with_product!(['b, L1, O1, R1, T], MatrixBinary<L1, O1, R1>, &'b Matrix<T>, MatrixBinary, MatrixProduct);
with_product!([L1, O1, R1, L2, O2, R2], MatrixBinary<L1, O1, R1>, MatrixBinary<L2, O2, R2>, MatrixBinary, MatrixProduct);
with_product!([L1, O1, R1, L2, R2], MatrixBinary<L1, O1, R1>, MatrixProduct<L2, R2>, MatrixBinary, MatrixProduct);

with_product!([L1, R1, T], MatrixProduct<L1, R1>, Matrix<T>, MatrixBinary, MatrixProduct);
with_product!(['b, L1, R1, T], MatrixProduct<L1, R1>, &'b Matrix<T>, MatrixBinary, MatrixProduct);
with_product!([L1, R1, L2, O2, R2], MatrixProduct<L1, R1>, MatrixBinary<L2, O2, R2>, MatrixBinary, MatrixProduct);
with_product!([L1, R1, L2, R2], MatrixProduct<L1, R1>, MatrixProduct<L2, R2>, MatrixBinary, MatrixProduct);

// ---------------------------------------------------------------------------
// array ⊕ array (multiplication is cellwise — no products between arrays)
// ---------------------------------------------------------------------------

elementwise!([T], CellArray<T>, CellArray<T>, ArrayBinary);
elementwise!(['b, T], CellArray<T>, &'b CellArray<T>, ArrayBinary);
elementwise!([T, L2, O2, R2], CellArray<T>, ArrayBinary<L2, O2, R2>, ArrayBinary);

elementwise!(['a, T], &'a CellArray<T>, CellArray<T>, ArrayBinary);
elementwise!(['a, 'b, T], &'a CellArray<T>, &'b CellArray<T>, ArrayBinary);
elementwise!(['a, T, L2, O2, R2], &'a CellArray<T>, ArrayBinary<L2, O2, R2>, ArrayBinary);

elementwise!([L1, O1, R1, T], ArrayBinary<L1, O1, R1>, CellArray<T>, ArrayBinary);
elementwise!(['b, L1, O1, R1, T], ArrayBinary<L1, O1, R1>, &'b CellArray<T>, ArrayBinary);
elementwise!([L1, O1, R1, L2, O2, R2], ArrayBinary<L1, O1, R1>, ArrayBinary<L2, O2, R2>, ArrayBinary);

// ---------------------------------------------------------------------------
// scalars on either side, per supported scalar type
// ---------------------------------------------------------------------------

macro_rules! scalar_dispatch {
    ($($s:ty),*) => { $(
        scalar_left!([], $s, Matrix<$s>, MatrixBinary);
        scalar_left!(['a], $s, &'a Matrix<$s>, MatrixBinary);
        scalar_left!([L2, O2, R2], $s, MatrixBinary<L2, O2, R2>, MatrixBinary);
        scalar_left!([L2, R2], $s, MatrixProduct<L2, R2>, MatrixBinary);

        scalar_right!([], Matrix<$s>, $s, MatrixBinary);
        scalar_right!(['a], &'a Matrix<$s>, $s, MatrixBinary);
        scalar_right!([L1, O1, R1], MatrixBinary<L1, O1, R1>, $s, MatrixBinary);
        scalar_right!([L1, R1], MatrixProduct<L1, R1>, $s, MatrixBinary);

        scalar_left!([], $s, CellArray<$s>, ArrayBinary);
        scalar_left!(['a], $s, &'a CellArray<$s>, ArrayBinary);
        scalar_left!([L2, O2, R2], $s, ArrayBinary<L2, O2, R2>, ArrayBinary);

        scalar_right!([], CellArray<$s>, $s, ArrayBinary);
        scalar_right!(['a], &'a CellArray<$s>, $s, ArrayBinary);
        scalar_right!([L1, O1, R1], ArrayBinary<L1, O1, R1>, $s, ArrayBinary);
    )* };
}

scalar_dispatch!(f32, f64, i32, i64);

// ---------------------------------------------------------------------------
// field combinations
// ---------------------------------------------------------------------------

#[cfg(feature = "composite")]
mod field_dispatch {
    use super::*;

    // field ⊕ field: cellwise, with `*` a per-cell matrix product
    with_product!([T], MatrixField<T>, MatrixField<T>, FieldBinary, FieldProduct);
    with_product!(['b, T], MatrixField<T>, &'b MatrixField<T>, FieldBinary, FieldProduct);
    with_product!([T, L2, O2, R2], MatrixField<T>, FieldBinary<L2, O2, R2>, FieldBinary, FieldProduct);
    with_product!([T, L2, R2], MatrixField<T>, FieldProduct<L2, R2>, FieldBinary, FieldProduct);

    with_product!(['a, T], &'a MatrixField<T>, MatrixField<T>, FieldBinary, FieldProduct);
    with_product!(['a, 'b, T], &'a MatrixField<T>, &'b MatrixField<T>, FieldBinary, FieldProduct);
    with_product!(['a, T, L2, O2, R2], &'a MatrixField<T>, FieldBinary<L2, O2, R2>, FieldBinary, FieldProduct);
    with_product!(['a, T, L2, R2], &'a MatrixField<T>, FieldProduct<L2, R2>, FieldBinary, FieldProduct);

    with_product!([L1, O1, R1, T], FieldBinary<L1, O1, R1>, MatrixField<T>, FieldBinary, FieldProduct);
    with_product!(['b, L1, O1, R1, T], FieldBinary<L1, O1, R1>, &'b MatrixField<T>, FieldBinary, FieldProduct);
    with_product!([L1, O1, R1, L2, O2, R2], FieldBinary<L1, O1, R1>, FieldBinary<L2, O2, R2>, FieldBinary, FieldProduct);
    with_product!([L1, O1, R1, L2, R2], FieldBinary<L1, O1, R1>, FieldProduct<L2, R2>, FieldBinary, FieldProduct);

    with_product!([L1, R1, T], FieldProduct<L1, R1>, MatrixField<T>, FieldBinary, FieldProduct);
    with_product!(['b, L1, R1, T], FieldProduct<L1, R1>, &'b MatrixField<T>, FieldBinary, FieldProduct);
    with_product!([L1, R1, L2, O2, R2], FieldProduct<L1, R1>, FieldBinary<L2, O2, R2>, FieldBinary, FieldProduct);
    with_product!([L1, R1, L2, R2], FieldProduct<L1, R1>, FieldProduct<L2, R2>, FieldBinary, FieldProduct);

    // field ⊕ matrix: the matrix is broadcast to every cell; `*` multiplies
    // each cell matrix by it
    with_product!([T], MatrixField<T>, Matrix<T>, FieldBinary, FieldProduct);
    with_product!(['b, T], MatrixField<T>, &'b Matrix<T>, FieldBinary, FieldProduct);
    with_product!([T, L2, O2, R2], MatrixField<T>, MatrixBinary<L2, O2, R2>, FieldBinary, FieldProduct);
    with_product!([T, L2, R2], MatrixField<T>, MatrixProduct<L2, R2>, FieldBinary, FieldProduct);

    with_product!(['a, T], &'a MatrixField<T>, Matrix<T>, FieldBinary, FieldProduct);
    with_product!(['a, 'b, T], &'a MatrixField<T>, &'b Matrix<T>, FieldBinary, FieldProduct);
    with_product!(['a, T, L2, O2, R2], &'a MatrixField<T>, MatrixBinary<L2, O2, R2>, FieldBinary, FieldProduct);
    with_product!(['a, T, L2, R2], &'a MatrixField<T>, MatrixProduct<L2, R2>, FieldBinary, FieldProduct);

    with_product!([L1, O1, R1, T], FieldBinary<L1, O1, R1>, Matrix<T>, FieldBinary, FieldProduct);
    with_product!(['b, L1, O1, R1, T], FieldBinary<L1, O1, R1>, &'b Matrix<T>, FieldBinary, FieldProduct);
    with_product!([L1, O1, R1, L2, O2, R2], FieldBinary<L1, O1, R1>, MatrixBinary<L2, O2, R2>, FieldBinary, FieldProduct);
    with_product!([L1, O1, R1, L2, R2], FieldBinary<L1, O1, R1>, MatrixProduct<L2, R2>, FieldBinary, FieldProduct);
    with_product!([L1, R1, T], FieldProduct<L1, R1>, Matrix<T>, FieldBinary, FieldProduct);
    with_product!(['b, L1, R1, T], FieldProduct<L1, R1>, &'b Matrix<T>, FieldBinary, FieldProduct);
    with_product!([L1, R1, L2, O2, R2], FieldProduct<L1, R1>, MatrixBinary<L2, O2, R2>, FieldBinary, FieldProduct);
    with_product!([L1, R1, L2, R2], FieldProduct<L1, R1>, MatrixProduct<L2, R2>, FieldBinary, FieldProduct);

    // matrix ⊕ field
    with_product!([T], Matrix<T>, MatrixField<T>, FieldBinary, FieldProduct);
    with_product!(['b, T], Matrix<T>, &'b MatrixField<T>, FieldBinary, FieldProduct);
    with_product!([T, L2, O2, R2], Matrix<T>, FieldBinary<L2, O2, R2>, FieldBinary, FieldProduct);
    with_product!([T, L2, R2], Matrix<T>, FieldProduct<L2, R2>, FieldBinary, FieldProduct);

    with_product!(['a, T], &'a Matrix<T>, MatrixField<T>, FieldBinary, FieldProduct);
    with_product!(['a, 'b, T], &'a Matrix<T>, &'b MatrixField<T>, FieldBinary, FieldProduct);
    with_product!(['a, T, L2, O2, R2], &'a Matrix<T>, FieldBinary<L2, O2, R2>, FieldBinary, FieldProduct);
    with_product!(['a, T, L2, R2], &'a Matrix<T>, FieldProduct<L2, R2>, FieldBinary, FieldProduct);

    with_product!([L1, O1, R1, T], MatrixBinary<L1, O1, R1>, MatrixField<T>, FieldBinary, FieldProduct);
    with_product!(['b, L1, O1, R1, T], MatrixBinary<L1, O1, R1>, &'b MatrixField<T>, FieldBinary, FieldProduct);
    with_product!([L1, O1, R1, L2, O2, R2], MatrixBinary<L1, O1, R1>, FieldBinary<L2, O2, R2>, FieldBinary, FieldProduct);
    with_product!([L1, O1, R1, L2, R2], MatrixBinary<L1, O1, R1>, FieldProduct<L2, R2>, FieldBinary, FieldProduct);

    with_product!([L1, R1, T], MatrixProduct<L1, R1>, MatrixField<T>, FieldBinary, FieldProduct);
    with_product!(['b, L1, R1, T], MatrixProduct<L1, R1>, &'b MatrixField<T>, FieldBinary, FieldProduct);
    with_product!([L1, R1, L2, O2, R2], MatrixProduct<L1, R1>, FieldBinary<L2, O2, R2>, FieldBinary, FieldProduct);
    with_product!([L1, R1, L2, R2], MatrixProduct<L1, R1>, FieldProduct<L2, R2>, FieldBinary, FieldProduct);

    // field ⊕ array: each cell's scalar scales/offsets that cell's matrix
    // elementwise — multiplication included
    elementwise!([T], MatrixField<T>, CellArray<T>, FieldBinary);
    elementwise!(['b, T], MatrixField<T>, &'b CellArray<T>, FieldBinary);
    elementwise!([T, L2, O2, R2], MatrixField<T>, ArrayBinary<L2, O2, R2>, FieldBinary);

    elementwise!(['a, T], &'a MatrixField<T>, CellArray<T>, FieldBinary);
    elementwise!(['a, 'b, T], &'a MatrixField<T>, &'b CellArray<T>, FieldBinary);
    elementwise!(['a, T, L2, O2, R2], &'a MatrixField<T>, ArrayBinary<L2, O2, R2>, FieldBinary);

    elementwise!([L1, O1, R1, T], FieldBinary<L1, O1, R1>, CellArray<T>, FieldBinary);
    elementwise!(['b, L1, O1, R1, T], FieldBinary<L1, O1, R1>, &'b CellArray<T>, FieldBinary);
    elementwise!([L1, O1, R1, L2, O2, R2], FieldBinary<L1, O1, R1>, ArrayBinary<L2, O2, R2>, FieldBinary);
    elementwise!([L1, R1, T], FieldProduct<L1, R1>, CellArray<T>, FieldBinary);
    elementwise!(['b, L1, R1, T], FieldProduct<L1, R1>, &'b CellArray<T>, FieldBinary);
    elementwise!([L1, R1, L2, O2, R2], FieldProduct<L1, R1>, ArrayBinary<L2, O2, R2>, FieldBinary);

    // array ⊕ field
    elementwise!([T], CellArray<T>, MatrixField<T>, FieldBinary);
    elementwise!(['b, T], CellArray<T>, &'b MatrixField<T>, FieldBinary);
    elementwise!([T, L2, O2, R2], CellArray<T>, FieldBinary<L2, O2, R2>, FieldBinary);
    elementwise!([T, L2, R2], CellArray<T>, FieldProduct<L2, R2>, FieldBinary);

    elementwise!(['a, T], &'a CellArray<T>, MatrixField<T>, FieldBinary);
    elementwise!(['a, 'b, T], &'a CellArray<T>, &'b MatrixField<T>, FieldBinary);
    elementwise!(['a, T, L2, O2, R2], &'a CellArray<T>, FieldBinary<L2, O2, R2>, FieldBinary);
    elementwise!(['a, T, L2, R2], &'a CellArray<T>, FieldProduct<L2, R2>, FieldBinary);

    elementwise!([L1, O1, R1, T], ArrayBinary<L1, O1, R1>, MatrixField<T>, FieldBinary);
    elementwise!(['b, L1, O1, R1, T], ArrayBinary<L1, O1, R1>, &'b MatrixField<T>, FieldBinary);
    elementwise!([L1, O1, R1, L2, O2, R2], ArrayBinary<L1, O1, R1>, FieldBinary<L2, O2, R2>, FieldBinary);
    elementwise!([L1, O1, R1, L2, R2], ArrayBinary<L1, O1, R1>, FieldProduct<L2, R2>, FieldBinary);

    // scalars against field kinds
    macro_rules! scalar_field_dispatch {
        ($($s:ty),*) => { $(
            scalar_left!([], $s, MatrixField<$s>, FieldBinary);
            scalar_left!(['a], $s, &'a MatrixField<$s>, FieldBinary);
            scalar_left!([L2, O2, R2], $s, FieldBinary<L2, O2, R2>, FieldBinary);
            scalar_left!([L2, R2], $s, FieldProduct<L2, R2>, FieldBinary);

            scalar_right!([], MatrixField<$s>, $s, FieldBinary);
            scalar_right!(['a], &'a MatrixField<$s>, $s, FieldBinary);
            scalar_right!([L1, O1, R1], FieldBinary<L1, O1, R1>, $s, FieldBinary);
            scalar_right!([L1, R1], FieldProduct<L1, R1>, $s, FieldBinary);
        )* };
    }

    scalar_field_dispatch!(f32, f64, i32, i64);
}
