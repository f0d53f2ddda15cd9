use std::error::Error;
use std::fmt;

/// Requested shape does not match the supplied buffer length.
#[derive(Debug, Clone)]
pub struct ShapeError {
    pub(crate) expected: usize,
    pub(crate) len: usize,
    pub(crate) shape: String,
}

impl ShapeError {
    pub(crate) fn new(shape: String, expected: usize, len: usize) -> Self {
        Self {
            expected,
            len,
            shape,
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape {} for buffer of length {} (expected {})",
            self.shape, self.len, self.expected
        )
    }
}

impl Error for ShapeError {}

/// The matrix handed to `inverse` has a determinant of exactly zero.
///
/// Recoverable: the caller may retry with a different matrix or branch
/// around the inversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingularMatrixError;

impl fmt::Display for SingularMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "singular matrix, inverse does not exist")
    }
}

impl Error for SingularMatrixError {}
