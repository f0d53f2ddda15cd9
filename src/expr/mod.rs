//! Lazy expression graph over matrices, cell arrays, and matrix fields.
//!
//! Arithmetic between containers builds an immutable tree of binary nodes
//! instead of computing anything; the tree is walked element-by-element when
//! it is materialized via `eval()` or a container's `assign()`. There is no
//! memoization: evaluating the same node twice recomputes from scratch, so
//! nodes carry no hidden state and shared read-only use is safe.
//!
//! Operands fall into shape categories — scalar ([`Broadcast`]),
//! matrix-shaped, array-shaped, field-shaped — expressed as capability
//! traits. A node owns its operands by value; since an operand may itself be
//! a `&Container` borrow, the choice between copying and referencing is made
//! per expression by the caller, and the borrow checker rejects any operand
//! that would dangle.

mod node;
mod operators;
mod ops;

pub use node::{ArrayBinary, MatrixBinary, MatrixProduct};
#[cfg(feature = "composite")]
pub use node::{FieldBinary, FieldProduct};
pub use ops::{BinOp, Divide, Minus, Plus, Times};

use crate::cell::{CellArray, CellGeometry};
use crate::element::Element;
use crate::matrix::Matrix;

#[cfg(feature = "composite")]
use crate::field::MatrixField;

/// A scalar carried as an expression operand, broadcast across every
/// element position of the surrounding expression.
///
/// The operator layer wraps bare scalars automatically; generic code uses it
/// directly when the element type is a type parameter (see `algebra::inverse`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Broadcast<T>(pub T);

// ---------------------------------------------------------------------------
// Shape capabilities
// ---------------------------------------------------------------------------

/// Shape introspection for matrix-shaped operands; `None` means the operand
/// is a broadcast scalar with no shape of its own.
pub trait MatrixShaped {
    fn mat_shape(&self) -> Option<(usize, usize)>;
}

/// Shape introspection for array-shaped operands.
pub trait ArrayShaped {
    fn array_dims(&self) -> Option<(usize, usize, usize)>;
    fn array_geometry(&self) -> Option<CellGeometry>;
}

/// Shape introspection for field-shaped (array-of-matrix) operands.
///
/// An operand may carry cell dims (arrays, fields), a per-cell matrix shape
/// (matrices, fields), both, or neither (scalars).
#[cfg(feature = "composite")]
pub trait FieldShaped {
    fn field_dims(&self) -> Option<(usize, usize, usize)>;
    fn field_geometry(&self) -> Option<CellGeometry>;
    fn cell_shape(&self) -> Option<(usize, usize)>;
}

// ---------------------------------------------------------------------------
// Evaluation capabilities
// ---------------------------------------------------------------------------

/// A matrix-shaped value that can be evaluated at a flat index or at
/// `(row, col)`. Evaluation recurses through nested operands and never
/// caches.
pub trait MatrixOperand<T: Element>: MatrixShaped {
    fn at(&self, i: usize) -> T;
    fn at_rc(&self, row: usize, col: usize) -> T;
}

/// An array-shaped value that can be evaluated at a flat cell index.
pub trait ArrayOperand<T: Element>: ArrayShaped {
    fn at(&self, i: usize) -> T;
}

/// A field-shaped value evaluated per cell and per matrix element within
/// that cell.
#[cfg(feature = "composite")]
pub trait FieldOperand<T: Element>: FieldShaped {
    fn at(&self, cell: usize, i: usize) -> T;
    fn at_rc(&self, cell: usize, row: usize, col: usize) -> T;
}

// ---------------------------------------------------------------------------
// Broadcast scalars
// ---------------------------------------------------------------------------

impl<T> MatrixShaped for Broadcast<T> {
    fn mat_shape(&self) -> Option<(usize, usize)> {
        None
    }
}

impl<T: Element> MatrixOperand<T> for Broadcast<T> {
    fn at(&self, _i: usize) -> T {
        self.0
    }

    fn at_rc(&self, _row: usize, _col: usize) -> T {
        self.0
    }
}

impl<T> ArrayShaped for Broadcast<T> {
    fn array_dims(&self) -> Option<(usize, usize, usize)> {
        None
    }

    fn array_geometry(&self) -> Option<CellGeometry> {
        None
    }
}

impl<T: Element> ArrayOperand<T> for Broadcast<T> {
    fn at(&self, _i: usize) -> T {
        self.0
    }
}

#[cfg(feature = "composite")]
impl<T> FieldShaped for Broadcast<T> {
    fn field_dims(&self) -> Option<(usize, usize, usize)> {
        None
    }

    fn field_geometry(&self) -> Option<CellGeometry> {
        None
    }

    fn cell_shape(&self) -> Option<(usize, usize)> {
        None
    }
}

#[cfg(feature = "composite")]
impl<T: Element> FieldOperand<T> for Broadcast<T> {
    fn at(&self, _cell: usize, _i: usize) -> T {
        self.0
    }

    fn at_rc(&self, _cell: usize, _row: usize, _col: usize) -> T {
        self.0
    }
}

// ---------------------------------------------------------------------------
// References delegate to their referent
// ---------------------------------------------------------------------------

impl<'a, S: MatrixShaped> MatrixShaped for &'a S {
    fn mat_shape(&self) -> Option<(usize, usize)> {
        (**self).mat_shape()
    }
}

impl<'a, T: Element, S: MatrixOperand<T>> MatrixOperand<T> for &'a S {
    fn at(&self, i: usize) -> T {
        (**self).at(i)
    }

    fn at_rc(&self, row: usize, col: usize) -> T {
        (**self).at_rc(row, col)
    }
}

impl<'a, S: ArrayShaped> ArrayShaped for &'a S {
    fn array_dims(&self) -> Option<(usize, usize, usize)> {
        (**self).array_dims()
    }

    fn array_geometry(&self) -> Option<CellGeometry> {
        (**self).array_geometry()
    }
}

impl<'a, T: Element, S: ArrayOperand<T>> ArrayOperand<T> for &'a S {
    fn at(&self, i: usize) -> T {
        (**self).at(i)
    }
}

#[cfg(feature = "composite")]
impl<'a, S: FieldShaped> FieldShaped for &'a S {
    fn field_dims(&self) -> Option<(usize, usize, usize)> {
        (**self).field_dims()
    }

    fn field_geometry(&self) -> Option<CellGeometry> {
        (**self).field_geometry()
    }

    fn cell_shape(&self) -> Option<(usize, usize)> {
        (**self).cell_shape()
    }
}

#[cfg(feature = "composite")]
impl<'a, T: Element, S: FieldOperand<T>> FieldOperand<T> for &'a S {
    fn at(&self, cell: usize, i: usize) -> T {
        (**self).at(cell, i)
    }

    fn at_rc(&self, cell: usize, row: usize, col: usize) -> T {
        (**self).at_rc(cell, row, col)
    }
}

// ---------------------------------------------------------------------------
// Containers as operands
// ---------------------------------------------------------------------------

impl<T> MatrixShaped for Matrix<T> {
    fn mat_shape(&self) -> Option<(usize, usize)> {
        Some(self.shape())
    }
}

impl<T: Element> MatrixOperand<T> for Matrix<T> {
    fn at(&self, i: usize) -> T {
        self[i]
    }

    fn at_rc(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}

impl<T> ArrayShaped for CellArray<T> {
    fn array_dims(&self) -> Option<(usize, usize, usize)> {
        Some(self.dims())
    }

    fn array_geometry(&self) -> Option<CellGeometry> {
        Some(self.geometry())
    }
}

impl<T: Element> ArrayOperand<T> for CellArray<T> {
    fn at(&self, i: usize) -> T {
        self[i]
    }
}

// A matrix in a field expression is the same matrix in every cell.
#[cfg(feature = "composite")]
impl<T> FieldShaped for Matrix<T> {
    fn field_dims(&self) -> Option<(usize, usize, usize)> {
        None
    }

    fn field_geometry(&self) -> Option<CellGeometry> {
        None
    }

    fn cell_shape(&self) -> Option<(usize, usize)> {
        Some(self.shape())
    }
}

#[cfg(feature = "composite")]
impl<T: Element> FieldOperand<T> for Matrix<T> {
    fn at(&self, _cell: usize, i: usize) -> T {
        self[i]
    }

    fn at_rc(&self, _cell: usize, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}

// A plain array in a field expression contributes one scalar per cell,
// broadcast across that cell's matrix.
#[cfg(feature = "composite")]
impl<T> FieldShaped for CellArray<T> {
    fn field_dims(&self) -> Option<(usize, usize, usize)> {
        Some(self.dims())
    }

    fn field_geometry(&self) -> Option<CellGeometry> {
        Some(self.geometry())
    }

    fn cell_shape(&self) -> Option<(usize, usize)> {
        None
    }
}

#[cfg(feature = "composite")]
impl<T: Element> FieldOperand<T> for CellArray<T> {
    fn at(&self, cell: usize, _i: usize) -> T {
        self[cell]
    }

    fn at_rc(&self, cell: usize, _row: usize, _col: usize) -> T {
        self[cell]
    }
}

#[cfg(feature = "composite")]
impl<T> FieldShaped for MatrixField<T> {
    fn field_dims(&self) -> Option<(usize, usize, usize)> {
        Some(self.dims())
    }

    fn field_geometry(&self) -> Option<CellGeometry> {
        Some(self.geometry())
    }

    fn cell_shape(&self) -> Option<(usize, usize)> {
        Some(self.cell_shape())
    }
}

#[cfg(feature = "composite")]
impl<T: Element> FieldOperand<T> for MatrixField<T> {
    fn at(&self, cell: usize, i: usize) -> T {
        self[cell][i]
    }

    fn at_rc(&self, cell: usize, row: usize, col: usize) -> T {
        self[cell][(row, col)]
    }
}
