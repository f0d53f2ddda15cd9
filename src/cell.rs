use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{NumCast, Zero};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::exec;
use crate::expr::ArrayOperand;

/// Spatial metadata of a cell array: cell dimensions and the coordinates of
/// the array origin. Purely descriptive; it never affects indexing or
/// arithmetic and is excluded from equality comparisons.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellGeometry {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
    pub ox: f64,
    pub oy: f64,
    pub oz: f64,
}

impl CellGeometry {
    pub fn new(cell: (f64, f64, f64), origin: (f64, f64, f64)) -> Self {
        Self {
            dx: cell.0,
            dy: cell.1,
            dz: cell.2,
            ox: origin.0,
            oy: origin.1,
            oz: origin.2,
        }
    }
}

impl Default for CellGeometry {
    /// Unit cells anchored at the origin.
    fn default() -> Self {
        Self::new((1.0, 1.0, 1.0), (0.0, 0.0, 0.0))
    }
}

/// Dense 3D cell array with shape `(nx, ny, nz)` fixed at construction or
/// [`CellArray::resize`].
///
/// Storage is row-major with z fastest: `index(i, j, k) = i*ny*nz + j*nz + k`.
/// The buffer length always equals `nx * ny * nz`.
#[derive(Clone, Debug)]
pub struct CellArray<T> {
    data: Vec<T>,
    nx: usize,
    ny: usize,
    nz: usize,
    geom: CellGeometry,
}

impl<T> CellArray<T> {
    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn nz(&self) -> usize {
        self.nz
    }

    pub fn dims(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    /// Total number of cells (`nx * ny * nz`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn geometry(&self) -> CellGeometry {
        self.geom
    }

    pub fn set_geometry(&mut self, geom: CellGeometry) {
        self.geom = geom;
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        assert!(
            i < self.nx && j < self.ny && k < self.nz,
            "cell index ({}, {}, {}) out of bounds for dims ({}, {}, {})",
            i,
            j,
            k,
            self.nx,
            self.ny,
            self.nz
        );
        i * (self.ny * self.nz) + j * self.nz + k
    }
}

impl<T: Clone> CellArray<T> {
    /// Array of the given dims with every cell set to `value` and default
    /// geometry.
    pub fn from_elem(dims: (usize, usize, usize), value: T) -> Self {
        let (nx, ny, nz) = dims;
        Self {
            data: vec![value; nx * ny * nz],
            nx,
            ny,
            nz,
            geom: CellGeometry::default(),
        }
    }

    pub fn with_geometry(mut self, geom: CellGeometry) -> Self {
        self.geom = geom;
        self
    }

    /// Reinitialize dims, geometry, and storage. Old cell data is lost.
    pub fn resize(&mut self, dims: (usize, usize, usize), value: T, geom: CellGeometry) {
        log::debug!(
            "resizing cell array {:?} -> {:?}",
            (self.nx, self.ny, self.nz),
            dims
        );
        let (nx, ny, nz) = dims;
        self.nx = nx;
        self.ny = ny;
        self.nz = nz;
        self.geom = geom;
        self.data = vec![value; nx * ny * nz];
    }
}

impl<T: Clone + Zero> CellArray<T> {
    /// Zero-filled array with default geometry.
    pub fn zeros(dims: (usize, usize, usize)) -> Self {
        Self::from_elem(dims, T::zero())
    }
}

impl<T: Element> CellArray<T> {
    /// Broadcast `value` into every cell.
    pub fn fill(&mut self, value: T) {
        exec::fill_indexed(&mut self.data, move |_| value);
    }

    /// Evaluate an array-shaped expression into this array.
    ///
    /// Every flat index is written exactly once, in no particular order.
    /// The expression's dims must match the destination's.
    pub fn assign<E>(&mut self, expr: E)
    where
        E: ArrayOperand<T> + Sync,
    {
        let dims = expr
            .array_dims()
            .expect("cannot assign a bare scalar expression; use fill");
        assert_eq!(
            dims,
            self.dims(),
            "shape mismatch: cannot assign a {:?} expression to a {:?} array",
            dims,
            self.dims()
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
    /// the element type.
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

    /// Smallest cell value. Panics on an empty array.
    pub fn min(&self) -> T {
        assert!(!self.data.is_empty(), "min of an empty cell array");
        let mut minimum = self.data[0];
        for &v in &self.data[1..] {
            if v < minimum {
                minimum = v;
            }
        }
        minimum
    }

    /// Largest cell value. Panics on an empty array.
    pub fn max(&self) -> T {
        assert!(!self.data.is_empty(), "max of an empty cell array");
        let mut maximum = self.data[0];
        for &v in &self.data[1..] {
            if v > maximum {
                maximum = v;
            }
        }
        maximum
    }
}

impl<T> Index<usize> for CellArray<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for CellArray<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T> Index<(usize, usize, usize)> for CellArray<T> {
    type Output = T;

    fn index(&self, index: (usize, usize, usize)) -> &T {
        let offset = self.offset(index.0, index.1, index.2);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize, usize)> for CellArray<T> {
    fn index_mut(&mut self, index: (usize, usize, usize)) -> &mut T {
        let offset = self.offset(index.0, index.1, index.2);
        &mut self.data[offset]
    }
}

/// Compares dims and cell data; geometry is descriptive metadata and two
/// arrays over different grids can still hold equal values.
impl<T: PartialEq> PartialEq for CellArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims() && self.data == other.data
    }
}

impl<T: fmt::Display> fmt::Display for CellArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nx {
            for j in 0..self.ny {
                write!(f, "[")?;
                for k in 0..self.nz {
                    write!(f, "{}", self.data[i * self.ny * self.nz + j * self.nz + k])?;
                    if k + 1 != self.nz {
                        write!(f, ", ")?;
                    }
                }
                writeln!(f, "]")?;
            }
            if i + 1 != self.nx {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
