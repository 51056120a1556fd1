//! Single-threaded sorter.

use crate::{Batch, SortedBatch};

use super::sorted_copy;

/// Sort every sequence of `batch` in order on the calling thread.
///
/// Infallible; empty and single-element sequences come back as fresh copies.
pub fn sort_sequential(batch: &Batch) -> SortedBatch {
    batch
        .sequences()
        .iter()
        .map(|sequence| sorted_copy(sequence))
        .collect()
}
