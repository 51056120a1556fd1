use thiserror::Error;

/// Failures surfaced by the sorting strategies.
///
/// Malformed input never reaches this layer; the transport rejects it before
/// a [`crate::Batch`] is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A concurrent unit of work failed, aborting the whole batch.
    #[error("sort unit for sequence {index} failed: {reason}")]
    UnitFailed {
        /// Position of the failed sequence in the batch.
        index: usize,
        /// Panic message, or a placeholder when it was not a string.
        reason: String,
    },
}

/// Result alias for the sorters.
pub type Result<T> = std::result::Result<T, SortError>;
