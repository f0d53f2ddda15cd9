//! cellmat: dense matrices, 3D cell arrays, and per-cell matrix fields with
//! lazy expression evaluation.
//!
//! Arithmetic between containers (`+ - * /`, mixed with scalars) builds an
//! expression tree instead of computing anything; the tree is evaluated
//! element-by-element only when it is materialized with `eval()` or a
//! container's `assign()`, with no intermediate containers allocated along
//! the way. Matrix multiplication follows matrix-product rules while every
//! other combination is elementwise, and shape mismatches are rejected when
//! an expression is built, before any element is computed.
//!
//! The design favors small, testable modules behind feature flags:
//! `composite` (default) compiles the array-of-matrix field support, and
//! `parallel` runs whole-container assignment sweeps on the rayon thread
//! pool.
//!
//! ```
//! use cellmat::Matrix;
//!
//! let mut a = Matrix::<f64>::zeros(2, 2);
//! let mut b = Matrix::<f64>::zeros(2, 2);
//! a.set(&[1.0, 2.0, 3.0, 4.0]);
//! b.set(&[5.0, 6.0, 7.0, 8.0]);
//! let c: Matrix<f64> = (&a * &b).eval();
//! assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
//! ```

pub mod algebra;
pub mod cell;
pub mod element;
pub mod error;
mod exec;
pub mod expr;
#[cfg(feature = "composite")]
pub mod field;
pub mod matrix;

pub use cell::{CellArray, CellGeometry};
pub use element::Element;
pub use error::{ShapeError, SingularMatrixError};
pub use expr::{ArrayOperand, Broadcast, MatrixOperand};
#[cfg(feature = "composite")]
pub use expr::FieldOperand;
#[cfg(feature = "composite")]
pub use field::MatrixField;
pub use matrix::Matrix;
