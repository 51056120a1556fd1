//! Sorting strategies and the timed entry point shared by the transport.

pub mod concurrent;
pub mod sequential;

use std::{fmt, time::Duration, time::Instant};

use tracing::debug;

use crate::{Batch, Result, Sequence, SortedBatch};

/// Execution strategy for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// One sequence after another on the calling thread.
    Sequential,
    /// One unit of work per sequence, joined before returning.
    Concurrent,
}

impl Strategy {
    /// Lower-case name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Concurrent => "concurrent",
        }
    }

    /// Sort `batch` with this strategy, timing only the sorter itself.
    pub fn run(self, batch: &Batch) -> Result<SortReport> {
        let started = Instant::now();
        let sorted = match self {
            Strategy::Sequential => sequential::sort_sequential(batch),
            Strategy::Concurrent => concurrent::sort_concurrent(batch)?,
        };
        let elapsed = started.elapsed();

        debug!(
            strategy = self.as_str(),
            sequences = batch.len(),
            elements = batch.element_count(),
            elapsed_ns = %elapsed.as_nanos(),
            "batch sorted"
        );

        Ok(SortReport { sorted, elapsed })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sorted batch plus the wall-clock time spent producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortReport {
    /// Sorted output, index-aligned with the input batch.
    pub sorted: SortedBatch,
    /// Time spent inside the sorter.
    pub elapsed: Duration,
}

impl SortReport {
    /// Elapsed time in nanoseconds, saturating at `i64::MAX`.
    pub fn elapsed_nanos(&self) -> i64 {
        i64::try_from(self.elapsed.as_nanos()).unwrap_or(i64::MAX)
    }
}

/// Private ascending copy of one sequence. The input is never touched.
pub(crate) fn sorted_copy(sequence: &[i64]) -> Sequence {
    let mut copy = sequence.to_vec();
    copy.sort_unstable();
    copy
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{SortReport, Strategy, sorted_copy};
    use crate::{Batch, SortedBatch};

    #[test]
    fn sorted_copy_leaves_source_untouched() {
        let source = vec![4, -2, 9, 0];

        let copy = sorted_copy(&source);

        assert_eq!(copy, vec![-2, 0, 4, 9]);
        assert_eq!(source, vec![4, -2, 9, 0]);
    }

    #[test]
    fn both_strategies_report_the_same_sequences() {
        let batch = Batch::new(vec![vec![3, 1, 2], vec![], vec![7, 7, -7]]);

        let sequential = Strategy::Sequential.run(&batch).expect("sequential");
        let concurrent = Strategy::Concurrent.run(&batch).expect("concurrent");

        assert_eq!(sequential.sorted, concurrent.sorted);
        assert_eq!(
            sequential.sorted.sequences(),
            &[vec![1, 2, 3], vec![], vec![-7, 7, 7]]
        );
    }

    #[test]
    fn elapsed_nanos_saturates() {
        let report = SortReport {
            sorted: SortedBatch::default(),
            elapsed: Duration::MAX,
        };

        assert_eq!(report.elapsed_nanos(), i64::MAX);

        let report = SortReport {
            sorted: SortedBatch::default(),
            elapsed: Duration::from_nanos(1_500),
        };
        assert_eq!(report.elapsed_nanos(), 1_500);
    }

    #[test]
    fn strategy_names() {
        assert_eq!(Strategy::Sequential.to_string(), "sequential");
        assert_eq!(Strategy::Concurrent.as_str(), "concurrent");
    }
}
