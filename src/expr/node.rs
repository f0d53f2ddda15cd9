use std::marker::PhantomData;

use num_traits::Zero;

use crate::cell::{CellArray, CellGeometry};
use crate::element::Element;
use crate::matrix::Matrix;

use super::ops::BinOp;
use super::{ArrayOperand, ArrayShaped, MatrixOperand, MatrixShaped};

#[cfg(feature = "composite")]
use crate::field::MatrixField;
#[cfg(feature = "composite")]
use super::{FieldOperand, FieldShaped};

// ---------------------------------------------------------------------------
// Matrix-shaped nodes
// ---------------------------------------------------------------------------

/// Elementwise binary node between two matrix-shaped operands (either of
/// which may be a broadcast scalar). Carries the declared output shape.
#[derive(Copy, Clone, Debug)]
pub struct MatrixBinary<L, O, R> {
    left: L,
    right: R,
    rows: usize,
    cols: usize,
    op: PhantomData<O>,
}

impl<L: MatrixShaped, O, R: MatrixShaped> MatrixBinary<L, O, R> {
    /// Combine two operands elementwise. Panics on a shape mismatch —
    /// rejected here, before any element is evaluated.
    pub fn new(left: L, right: R) -> Self {
        let (rows, cols) = match (left.mat_shape(), right.mat_shape()) {
            (Some(a), Some(b)) => {
                assert_eq!(
                    a, b,
                    "shape mismatch: elementwise expression over {:?} and {:?} matrices",
                    a, b
                );
                a
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => {
                panic!("elementwise matrix expression needs at least one shaped operand")
            }
        };
        Self {
            left,
            right,
            rows,
            cols,
            op: PhantomData,
        }
    }
}

impl<L, O, R> MatrixShaped for MatrixBinary<L, O, R> {
    fn mat_shape(&self) -> Option<(usize, usize)> {
        Some((self.rows, self.cols))
    }
}

impl<T, L, O, R> MatrixOperand<T> for MatrixBinary<L, O, R>
where
    T: Element,
    L: MatrixOperand<T>,
    O: BinOp,
    R: MatrixOperand<T>,
{
    fn at(&self, i: usize) -> T {
        O::apply(self.left.at(i), self.right.at(i))
    }

    fn at_rc(&self, row: usize, col: usize) -> T {
        MatrixOperand::at(self, row * self.cols + col)
    }
}

impl<L, O, R> MatrixBinary<L, O, R> {
    /// Materialize the expression into a fresh matrix.
    pub fn eval<T>(&self) -> Matrix<T>
    where
        T: Element,
        Self: MatrixOperand<T> + Sync,
    {
        let mut out = Matrix::zeros(self.rows, self.cols);
        out.assign(self);
        out
    }
}

/// Matrix-product node: the one expression whose evaluation must know the
/// operand shapes, not just a flat index.
#[derive(Copy, Clone, Debug)]
pub struct MatrixProduct<L, R> {
    left: L,
    right: R,
    rows: usize,
    inner: usize,
    cols: usize,
}

impl<L: MatrixShaped, R: MatrixShaped> MatrixProduct<L, R> {
    /// Multiply two matrix-shaped operands. Panics unless the left operand's
    /// column count equals the right operand's row count.
    pub fn new(left: L, right: R) -> Self {
        let (lr, lc) = left
            .mat_shape()
            .expect("matrix product requires a shaped left operand");
        let (rr, rc) = right
            .mat_shape()
            .expect("matrix product requires a shaped right operand");
        assert_eq!(
            lc, rr,
            "shape mismatch: cannot multiply a ({}, {}) matrix by a ({}, {}) matrix",
            lr, lc, rr, rc
        );
        Self {
            left,
            right,
            rows: lr,
            inner: lc,
            cols: rc,
        }
    }
}

impl<L, R> MatrixShaped for MatrixProduct<L, R> {
    fn mat_shape(&self) -> Option<(usize, usize)> {
        Some((self.rows, self.cols))
    }
}

impl<T, L, R> MatrixOperand<T> for MatrixProduct<L, R>
where
    T: Element,
    L: MatrixOperand<T>,
    R: MatrixOperand<T>,
{
    fn at(&self, i: usize) -> T {
        // Recover the target cell from the flat output index.
        MatrixOperand::at_rc(self, i / self.cols, i % self.cols)
    }

    fn at_rc(&self, row: usize, col: usize) -> T {
        let mut acc = T::zero();
        for c in 0..self.inner {
            acc = acc + self.left.at_rc(row, c) * self.right.at_rc(c, col);
        }
        acc
    }
}

impl<L, R> MatrixProduct<L, R> {
    /// Materialize the product into a fresh matrix.
    pub fn eval<T>(&self) -> Matrix<T>
    where
        T: Element,
        Self: MatrixOperand<T> + Sync,
    {
        let mut out = Matrix::zeros(self.rows, self.cols);
        out.assign(self);
        out
    }
}

// ---------------------------------------------------------------------------
// Array-shaped node
// ---------------------------------------------------------------------------

/// Elementwise binary node between two array-shaped operands. Carries the
/// output dims and the geometry of the first spatial operand.
#[derive(Copy, Clone, Debug)]
pub struct ArrayBinary<L, O, R> {
    left: L,
    right: R,
    dims: (usize, usize, usize),
    geom: CellGeometry,
    op: PhantomData<O>,
}

impl<L: ArrayShaped, O, R: ArrayShaped> ArrayBinary<L, O, R> {
    /// Combine two operands cellwise. Panics on a dims mismatch.
    pub fn new(left: L, right: R) -> Self {
        let dims = match (left.array_dims(), right.array_dims()) {
            (Some(a), Some(b)) => {
                assert_eq!(
                    a, b,
                    "shape mismatch: elementwise expression over {:?} and {:?} arrays",
                    a, b
                );
                a
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => {
                panic!("elementwise array expression needs at least one shaped operand")
            }
        };
        let geom = left
            .array_geometry()
            .or_else(|| right.array_geometry())
            .unwrap_or_default();
        Self {
            left,
            right,
            dims,
            geom,
            op: PhantomData,
        }
    }
}

impl<L, O, R> ArrayShaped for ArrayBinary<L, O, R> {
    fn array_dims(&self) -> Option<(usize, usize, usize)> {
        Some(self.dims)
    }

    fn array_geometry(&self) -> Option<CellGeometry> {
        Some(self.geom)
    }
}

impl<T, L, O, R> ArrayOperand<T> for ArrayBinary<L, O, R>
where
    T: Element,
    L: ArrayOperand<T>,
    O: BinOp,
    R: ArrayOperand<T>,
{
    fn at(&self, i: usize) -> T {
        O::apply(self.left.at(i), self.right.at(i))
    }
}

impl<L, O, R> ArrayBinary<L, O, R> {
    /// Materialize the expression into a fresh array, inheriting the
    /// operands' geometry.
    pub fn eval<T>(&self) -> CellArray<T>
    where
        T: Element,
        Self: ArrayOperand<T> + Sync,
    {
        let mut out = CellArray::zeros(self.dims).with_geometry(self.geom);
        out.assign(self);
        out
    }
}

// ---------------------------------------------------------------------------
// Field-shaped nodes
// ---------------------------------------------------------------------------

/// Elementwise binary node between field-shaped operands: the cell dimension
/// is applied cellwise, and within each cell the operands combine
/// elementwise.
#[cfg(feature = "composite")]
#[derive(Copy, Clone, Debug)]
pub struct FieldBinary<L, O, R> {
    left: L,
    right: R,
    dims: (usize, usize, usize),
    geom: CellGeometry,
    rows: usize,
    cols: usize,
    op: PhantomData<O>,
}

#[cfg(feature = "composite")]
impl<L: FieldShaped, O, R: FieldShaped> FieldBinary<L, O, R> {
    /// Combine two operands cellwise and, within cells, elementwise.
    /// Panics if cell dims or per-cell matrix shapes disagree.
    pub fn new(left: L, right: R) -> Self {
        let dims = match (left.field_dims(), right.field_dims()) {
            (Some(a), Some(b)) => {
                assert_eq!(
                    a, b,
                    "shape mismatch: field expression over {:?} and {:?} cell dims",
                    a, b
                );
                a
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => panic!("field expression needs at least one cell-shaped operand"),
        };
        let (rows, cols) = match (left.cell_shape(), right.cell_shape()) {
            (Some(a), Some(b)) => {
                assert_eq!(
                    a, b,
                    "shape mismatch: field expression over {:?} and {:?} cell matrices",
                    a, b
                );
                a
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => panic!("field expression needs at least one matrix-shaped operand"),
        };
        let geom = left
            .field_geometry()
            .or_else(|| right.field_geometry())
            .unwrap_or_default();
        Self {
            left,
            right,
            dims,
            geom,
            rows,
            cols,
            op: PhantomData,
        }
    }
}

#[cfg(feature = "composite")]
impl<L, O, R> FieldShaped for FieldBinary<L, O, R> {
    fn field_dims(&self) -> Option<(usize, usize, usize)> {
        Some(self.dims)
    }

    fn field_geometry(&self) -> Option<CellGeometry> {
        Some(self.geom)
    }

    fn cell_shape(&self) -> Option<(usize, usize)> {
        Some((self.rows, self.cols))
    }
}

#[cfg(feature = "composite")]
impl<T, L, O, R> FieldOperand<T> for FieldBinary<L, O, R>
where
    T: Element,
    L: FieldOperand<T>,
    O: BinOp,
    R: FieldOperand<T>,
{
    fn at(&self, cell: usize, i: usize) -> T {
        O::apply(self.left.at(cell, i), self.right.at(cell, i))
    }

    fn at_rc(&self, cell: usize, row: usize, col: usize) -> T {
        FieldOperand::at(self, cell, row * self.cols + col)
    }
}

#[cfg(feature = "composite")]
impl<L, O, R> FieldBinary<L, O, R> {
    /// Materialize the expression into a fresh matrix field.
    pub fn eval<T>(&self) -> MatrixField<T>
    where
        T: Element,
        Self: FieldOperand<T> + Sync,
    {
        let mut out =
            MatrixField::zeros(self.dims, (self.rows, self.cols)).with_geometry(self.geom);
        out.assign(self);
        out
    }
}

/// Per-cell matrix product between field-shaped operands: each cell gets an
/// independent product of its two cell matrices.
#[cfg(feature = "composite")]
#[derive(Copy, Clone, Debug)]
pub struct FieldProduct<L, R> {
    left: L,
    right: R,
    dims: (usize, usize, usize),
    geom: CellGeometry,
    rows: usize,
    inner: usize,
    cols: usize,
}

#[cfg(feature = "composite")]
impl<L: FieldShaped, R: FieldShaped> FieldProduct<L, R> {
    pub fn new(left: L, right: R) -> Self {
        let (lr, lc) = left
            .cell_shape()
            .expect("field product requires a matrix-shaped left operand");
        let (rr, rc) = right
            .cell_shape()
            .expect("field product requires a matrix-shaped right operand");
        assert_eq!(
            lc, rr,
            "shape mismatch: cannot multiply ({}, {}) cell matrices by ({}, {}) cell matrices",
            lr, lc, rr, rc
        );
        let dims = match (left.field_dims(), right.field_dims()) {
            (Some(a), Some(b)) => {
                assert_eq!(
                    a, b,
                    "shape mismatch: field product over {:?} and {:?} cell dims",
                    a, b
                );
                a
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => panic!("field product needs at least one cell-shaped operand"),
        };
        let geom = left
            .field_geometry()
            .or_else(|| right.field_geometry())
            .unwrap_or_default();
        Self {
            left,
            right,
            dims,
            geom,
            rows: lr,
            inner: lc,
            cols: rc,
        }
    }
}

#[cfg(feature = "composite")]
impl<L, R> FieldShaped for FieldProduct<L, R> {
    fn field_dims(&self) -> Option<(usize, usize, usize)> {
        Some(self.dims)
    }

    fn field_geometry(&self) -> Option<CellGeometry> {
        Some(self.geom)
    }

    fn cell_shape(&self) -> Option<(usize, usize)> {
        Some((self.rows, self.cols))
    }
}

#[cfg(feature = "composite")]
impl<T, L, R> FieldOperand<T> for FieldProduct<L, R>
where
    T: Element,
    L: FieldOperand<T>,
    R: FieldOperand<T>,
{
    fn at(&self, cell: usize, i: usize) -> T {
        FieldOperand::at_rc(self, cell, i / self.cols, i % self.cols)
    }

    fn at_rc(&self, cell: usize, row: usize, col: usize) -> T {
        let mut acc = T::zero();
        for c in 0..self.inner {
            acc = acc + self.left.at_rc(cell, row, c) * self.right.at_rc(cell, c, col);
        }
        acc
    }
}

#[cfg(feature = "composite")]
impl<L, R> FieldProduct<L, R> {
    /// Materialize the per-cell products into a fresh matrix field.
    pub fn eval<T>(&self) -> MatrixField<T>
    where
        T: Element,
        Self: FieldOperand<T> + Sync,
    {
        let mut out =
            MatrixField::zeros(self.dims, (self.rows, self.cols)).with_geometry(self.geom);
        out.assign(self);
        out
    }
}

// ---------------------------------------------------------------------------
// Matrix- and array-shaped nodes as field operands
// ---------------------------------------------------------------------------

#[cfg(feature = "composite")]
impl<L, O, R> FieldShaped for MatrixBinary<L, O, R> {
    fn field_dims(&self) -> Option<(usize, usize, usize)> {
        None
    }

    fn field_geometry(&self) -> Option<CellGeometry> {
        None
    }

    fn cell_shape(&self) -> Option<(usize, usize)> {
        Some((self.rows, self.cols))
    }
}

#[cfg(feature = "composite")]
impl<T, L, O, R> FieldOperand<T> for MatrixBinary<L, O, R>
where
    T: Element,
    L: MatrixOperand<T>,
    O: BinOp,
    R: MatrixOperand<T>,
{
    fn at(&self, _cell: usize, i: usize) -> T {
        MatrixOperand::at(self, i)
    }

    fn at_rc(&self, _cell: usize, row: usize, col: usize) -> T {
        MatrixOperand::at_rc(self, row, col)
    }
}

#[cfg(feature = "composite")]
impl<L, R> FieldShaped for MatrixProduct<L, R> {
    fn field_dims(&self) -> Option<(usize, usize, usize)> {
        None
    }

    fn field_geometry(&self) -> Option<CellGeometry> {
        None
    }

    fn cell_shape(&self) -> Option<(usize, usize)> {
        Some((self.rows, self.cols))
    }
}

#[cfg(feature = "composite")]
impl<T, L, R> FieldOperand<T> for MatrixProduct<L, R>
where
    T: Element,
    L: MatrixOperand<T>,
    R: MatrixOperand<T>,
{
    fn at(&self, _cell: usize, i: usize) -> T {
        MatrixOperand::at(self, i)
    }

    fn at_rc(&self, _cell: usize, row: usize, col: usize) -> T {
        MatrixOperand::at_rc(self, row, col)
    }
}

#[cfg(feature = "composite")]
impl<L, O, R> FieldShaped for ArrayBinary<L, O, R> {
    fn field_dims(&self) -> Option<(usize, usize, usize)> {
        Some(self.dims)
    }

    fn field_geometry(&self) -> Option<CellGeometry> {
        Some(self.geom)
    }

    fn cell_shape(&self) -> Option<(usize, usize)> {
        None
    }
}

#[cfg(feature = "composite")]
impl<T, L, O, R> FieldOperand<T> for ArrayBinary<L, O, R>
where
    T: Element,
    L: ArrayOperand<T>,
    O: BinOp,
    R: ArrayOperand<T>,
{
    fn at(&self, cell: usize, _i: usize) -> T {
        ArrayOperand::at(self, cell)
    }

    fn at_rc(&self, cell: usize, _row: usize, _col: usize) -> T {
        ArrayOperand::at(self, cell)
    }
}
