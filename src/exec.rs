//! The whole-container write loop.
//!
//! Every assignment of a scalar or an expression into a container funnels
//! through this module. Each flat index is written independently with no
//! cross-index dependency, so with the `parallel` feature the sweep runs on
//! the rayon thread pool with zero synchronization; otherwise it is a plain
//! loop.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Overwrite every slot of `dest` with `f(index)`.
#[cfg(feature = "parallel")]
pub(crate) fn fill_indexed<T, F>(dest: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    dest.par_iter_mut()
        .enumerate()
        .for_each(|(i, slot)| *slot = f(i));
}

/// Overwrite every slot of `dest` with `f(index)`.
#[cfg(not(feature = "parallel"))]
pub(crate) fn fill_indexed<T, F>(dest: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    for (i, slot) in dest.iter_mut().enumerate() {
        *slot = f(i);
    }
}

/// Update every slot of `dest` in place via `f(index, &mut slot)`.
///
/// Used for cell-of-matrix destinations where the per-cell buffers should be
/// rewritten rather than reallocated.
#[cfg(feature = "parallel")]
pub(crate) fn update_indexed<T, F>(dest: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync,
{
    dest.par_iter_mut()
        .enumerate()
        .for_each(|(i, slot)| f(i, slot));
}

/// Update every slot of `dest` in place via `f(index, &mut slot)`.
#[cfg(not(feature = "parallel"))]
pub(crate) fn update_indexed<T, F>(dest: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync,
{
    for (i, slot) in dest.iter_mut().enumerate() {
        f(i, slot);
    }
}
