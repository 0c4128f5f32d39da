#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use rayon::prelude::*;

/// Performs mutable foreach in parallel.
pub fn parallel_foreach_mut<T, F>(source: &mut [T], action: F)
where
    T: Send + Sync,
    F: Fn(&mut T) + Send + Sync,
{
    source.par_iter_mut().for_each(action)
}
