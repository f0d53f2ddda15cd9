use std::fmt;

use num_traits::{Num, NumCast};

/// Numeric element type stored in the crate's containers.
///
/// Consolidates the arithmetic, comparison, and casting bounds every
/// container and expression node needs. `Send + Sync + 'static` are included
/// so the same evaluation code serves both the serial and the rayon-backed
/// assignment sweep without feature-dependent bounds.
pub trait Element:
    Copy + PartialEq + PartialOrd + Num + NumCast + Send + Sync + fmt::Debug + 'static
{
}

impl<T> Element for T where
    T: Copy + PartialEq + PartialOrd + Num + NumCast + Send + Sync + fmt::Debug + 'static
{
}
