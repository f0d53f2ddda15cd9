use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{NumCast, One, Zero};
use rand::Rng;

use crate::element::Element;
use crate::error::ShapeError;
use crate::exec;
use crate::expr::MatrixOperand;

/// Dense row-major matrix whose shape is fixed at construction.
///
/// The buffer length always equals `rows * cols`. Elements are addressed by
/// flat index (`m[i]`) or by `(row, col)` (`m[(r, c)]`); both panic on
/// out-of-range indices.
#[derive(Clone, Debug)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Build a matrix from a flat row-major buffer.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError::new(
                format!("({}, {})", rows, cols),
                rows * cols,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells (`rows * cols`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Row index addressed by flat index `i`.
    pub fn row_of(&self, i: usize) -> usize {
        i / self.cols
    }

    /// Column index addressed by flat index `i`.
    pub fn col_of(&self, i: usize) -> usize {
        i % self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({}, {}) out of bounds for shape ({}, {})",
            row,
            col,
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// One row as a contiguous slice, for shape-aware consumers.
    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }
}

impl<T: Clone> Matrix<T> {
    /// Matrix with every cell set to `value`.
    pub fn from_elem(shape: (usize, usize), value: T) -> Self {
        let (rows, cols) = shape;
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T: Clone + Zero> Matrix<T> {
    /// Zero-filled matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem((rows, cols), T::zero())
    }
}

impl<T: Clone + Zero + One> Matrix<T> {
    /// The n-by-n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }
}

impl<T: Element> Matrix<T> {
    /// Broadcast `value` into every cell.
    pub fn fill(&mut self, value: T) {
        exec::fill_indexed(&mut self.data, move |_| value);
    }

    /// Evaluate a matrix-shaped expression into this matrix.
    ///
    /// This is the point where a lazy expression is actually computed: every
    /// flat index is written exactly once, in no particular order. The
    /// expression's declared shape must match the destination.
    pub fn assign<E>(&mut self, expr: E)
    where
        E: MatrixOperand<T> + Sync,
    {
        let shape = expr
            .mat_shape()
            .expect("cannot assign a bare scalar expression; use fill");
        assert_eq!(
            shape,
            (self.rows, self.cols),
            "shape mismatch: cannot assign a {:?} expression to a {:?} matrix",
            shape,
            (self.rows, self.cols)
        );
        exec::fill_indexed(&mut self.data, |i| expr.at(i));
    }

    /// Positional bulk set. Surplus values are ignored; missing positions
    /// are zeroed.
    pub fn set(&mut self, values: &[T]) {
        for (i, slot) in self.data.iter_mut().enumerate() {
            *slot = values.get(i).copied().unwrap_or_else(T::zero);
        }
    }

    /// Fill with uniform integer values drawn from `[lo, hi]`, cast into
    /// the element type. Uses the thread-local RNG; pass a seeded generator
    /// to [`Matrix::set_random_with`] for reproducible fills.
    pub fn set_random(&mut self, lo: i64, hi: i64) {
        self.set_random_with(&mut rand::thread_rng(), lo, hi);
    }

    pub fn set_random_with<R: Rng + ?Sized>(&mut self, rng: &mut R, lo: i64, hi: i64) {
        assert!(lo <= hi, "empty random range [{}, {}]", lo, hi);
        for slot in self.data.iter_mut() {
            *slot = NumCast::from(rng.gen_range(lo..=hi))
                .expect("random value not representable in the element type");
        }
    }

    /// Smallest element. Panics on an empty matrix.
    pub fn min(&self) -> T {
        assert!(!self.data.is_empty(), "min of an empty matrix");
        let mut minimum = self.data[0];
        for &v in &self.data[1..] {
            if v < minimum {
                minimum = v;
            }
        }
        minimum
    }

    /// Largest element. Panics on an empty matrix.
    pub fn max(&self) -> T {
        assert!(!self.data.is_empty(), "max of an empty matrix");
        let mut maximum = self.data[0];
        for &v in &self.data[1..] {
            if v > maximum {
                maximum = v;
            }
        }
        maximum
    }

    /// Whether this matrix's smallest element is below `other`'s.
    ///
    /// Compares whole-matrix extrema, not elementwise or lexicographic
    /// order; `a.min_lt(b)` and `b.min_lt(a)` can both be false for unequal
    /// matrices, so this is not a sort key.
    pub fn min_lt(&self, other: &Self) -> bool {
        self.min() < other.min()
    }

    /// Whether this matrix's largest element exceeds `other`'s.
    ///
    /// Same extrema semantics as [`Matrix::min_lt`].
    pub fn max_gt(&self, other: &Self) -> bool {
        self.max() > other.max()
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "[")?;
            for col in 0..self.cols {
                write!(f, "{}", self.data[row * self.cols + col])?;
                if col + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
