use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Zero;
use rand::Rng;

use crate::cell::{CellArray, CellGeometry};
use crate::element::Element;
use crate::exec;
use crate::expr::FieldOperand;
use crate::matrix::Matrix;

/// A cell array whose cells are matrices: a per-cell tensor field over a 3D
/// grid, as used to carry a physical property per cell in finite-difference
/// computations.
///
/// Storage and indexing delegate to [`CellArray`]; the only extra state is
/// the shared per-cell matrix shape, fixed at construction so every cell is
/// guaranteed compatible with the same expressions.
#[derive(Clone, Debug)]
pub struct MatrixField<T> {
    cells: CellArray<Matrix<T>>,
    rows: usize,
    cols: usize,
}

impl<T> MatrixField<T> {
    pub fn nx(&self) -> usize {
        self.cells.nx()
    }

    pub fn ny(&self) -> usize {
        self.cells.ny()
    }

    pub fn nz(&self) -> usize {
        self.cells.nz()
    }

    pub fn dims(&self) -> (usize, usize, usize) {
        self.cells.dims()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Shape of every cell's matrix.
    pub fn cell_shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn geometry(&self) -> CellGeometry {
        self.cells.geometry()
    }

    pub fn set_geometry(&mut self, geom: CellGeometry) {
        self.cells.set_geometry(geom);
    }

    pub fn cells(&self) -> &[Matrix<T>] {
        self.cells.as_slice()
    }
}

impl<T: Clone> MatrixField<T> {
    /// Field of the given dims with every cell a clone of `cell`.
    pub fn from_elem(dims: (usize, usize, usize), cell: Matrix<T>) -> Self {
        let (rows, cols) = cell.shape();
        Self {
            cells: CellArray::from_elem(dims, cell),
            rows,
            cols,
        }
    }

    pub fn with_geometry(mut self, geom: CellGeometry) -> Self {
        self.cells.set_geometry(geom);
        self
    }

    /// Reinitialize dims, cell shape, geometry, and storage. Old data lost.
    pub fn resize(&mut self, dims: (usize, usize, usize), cell: Matrix<T>, geom: CellGeometry) {
        let (rows, cols) = cell.shape();
        self.rows = rows;
        self.cols = cols;
        self.cells.resize(dims, cell, geom);
    }

    /// Broadcast one matrix into every cell. The shape must match the
    /// field's cell shape.
    pub fn fill(&mut self, cell: &Matrix<T>)
    where
        T: Send + Sync,
    {
        assert_eq!(
            cell.shape(),
            (self.rows, self.cols),
            "shape mismatch: cannot fill {:?} cells with a {:?} matrix",
            (self.rows, self.cols),
            cell.shape()
        );
        exec::update_indexed(self.cells.as_mut_slice(), |_i, slot| *slot = cell.clone());
    }
}

impl<T: Clone + Zero> MatrixField<T> {
    /// Field of zero matrices with the given cell shape.
    pub fn zeros(dims: (usize, usize, usize), cell_shape: (usize, usize)) -> Self {
        Self::from_elem(dims, Matrix::zeros(cell_shape.0, cell_shape.1))
    }
}

impl<T: Element> MatrixField<T> {
    /// Evaluate a field-shaped expression into this field, rewriting each
    /// cell's buffer in place.
    pub fn assign<E>(&mut self, expr: E)
    where
        E: FieldOperand<T> + Sync,
    {
        let dims = expr
            .field_dims()
            .expect("cannot assign a cell-free expression to a matrix field");
        assert_eq!(
            dims,
            self.dims(),
            "shape mismatch: cannot assign a {:?} expression to a {:?} field",
            dims,
            self.dims()
        );
        let shape = expr
            .cell_shape()
            .expect("cannot assign a matrix-free expression to a matrix field");
        assert_eq!(
            shape,
            (self.rows, self.cols),
            "shape mismatch: cannot assign {:?} cell matrices to {:?} cells",
            shape,
            (self.rows, self.cols)
        );
        exec::update_indexed(self.cells.as_mut_slice(), |cell, m| {
            for i in 0..m.len() {
                m[i] = expr.at(cell, i);
            }
        });
    }

    /// Randomize every cell matrix with uniform integer values in `[lo, hi]`.
    pub fn set_random(&mut self, lo: i64, hi: i64) {
        self.set_random_with(&mut rand::thread_rng(), lo, hi);
    }

    pub fn set_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R, lo: i64, hi: i64) {
        for m in self.cells.as_mut_slice() {
            m.set_random_with(rng, lo, hi);
        }
    }

    /// The cell whose smallest element is smallest across the field.
    ///
    /// Cells are compared by their extrema, the same semantics as
    /// [`Matrix::min_lt`].
    pub fn min_cell(&self) -> &Matrix<T> {
        assert!(!self.is_empty(), "min_cell of an empty field");
        let mut best = &self.cells[0];
        for m in &self.cells.as_slice()[1..] {
            if m.min_lt(best) {
                best = m;
            }
        }
        best
    }

    /// The cell whose largest element is largest across the field.
    pub fn max_cell(&self) -> &Matrix<T> {
        assert!(!self.is_empty(), "max_cell of an empty field");
        let mut best = &self.cells[0];
        for m in &self.cells.as_slice()[1..] {
            if m.max_gt(best) {
                best = m;
            }
        }
        best
    }
}

impl<T> Index<usize> for MatrixField<T> {
    type Output = Matrix<T>;

    fn index(&self, i: usize) -> &Matrix<T> {
        &self.cells[i]
    }
}

impl<T> IndexMut<usize> for MatrixField<T> {
    fn index_mut(&mut self, i: usize) -> &mut Matrix<T> {
        &mut self.cells[i]
    }
}

impl<T> Index<(usize, usize, usize)> for MatrixField<T> {
    type Output = Matrix<T>;

    fn index(&self, index: (usize, usize, usize)) -> &Matrix<T> {
        &self.cells[index]
    }
}

impl<T> IndexMut<(usize, usize, usize)> for MatrixField<T> {
    fn index_mut(&mut self, index: (usize, usize, usize)) -> &mut Matrix<T> {
        &mut self.cells[index]
    }
}

/// Compares dims, cell shape, and cell data; geometry is excluded as for
/// [`CellArray`].
impl<T: PartialEq> PartialEq for MatrixField<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl<T: fmt::Display> fmt::Display for MatrixField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (nx, ny, nz) = self.dims();
        for i in 0..nx {
            for j in 0..ny {
                for k in 0..nz {
                    writeln!(f, "cell ({}, {}, {}):", i, j, k)?;
                    write!(f, "{}", self.cells[(i, j, k)])?;
                }
            }
        }
        Ok(())
    }
}
