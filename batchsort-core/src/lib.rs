//! # batchsort-core
//!
//! Batch model and sorting strategies for the batchsort service.
//!
//! A [`Batch`] is an ordered list of integer sequences. Both strategies return
//! a [`SortedBatch`] that is index-aligned with the input, where every entry is
//! a freshly allocated, ascending copy of the matching input sequence:
//!
//! - [`Strategy::Sequential`] sorts one sequence after another on the calling
//!   thread.
//! - [`Strategy::Concurrent`] spawns one unit of work per sequence, lets each
//!   unit write into its own pre-sized slot and blocks at a single join
//!   barrier until every unit has finished.
//!
//! [`Strategy::run`] wraps either sorter with wall-clock timing and yields a
//! [`SortReport`].

/// Input and output collections.
pub mod batch;
/// Sorter failures.
pub mod error;
pub mod sorter;

pub use batch::{Batch, Sequence, SortedBatch};
pub use error::{Result, SortError};
pub use sorter::{
    SortReport, Strategy, concurrent::sort_concurrent,
    sequential::sort_sequential,
};
