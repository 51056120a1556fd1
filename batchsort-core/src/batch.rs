use serde::{Deserialize, Serialize};

/// One ordered list of integers to be sorted.
pub type Sequence = Vec<i64>;

/// The full set of input sequences in one request.
///
/// Read-only to the sorters. Decoding treats a `null` entry as an empty
/// sequence and a `null` element as zero, so `[null, [2, null]]` is accepted
/// as `[[], [2, 0]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireBatch")]
#[serde(into = "Vec<Sequence>")]
pub struct Batch(Vec<Sequence>);

impl Batch {
    /// Wrap already decoded sequences.
    pub fn new(sequences: Vec<Sequence>) -> Self {
        Self(sequences)
    }

    /// Number of sequences.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the batch holds no sequences.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the sequences in request order.
    pub fn sequences(&self) -> &[Sequence] {
        &self.0
    }

    /// Total number of integers across every sequence.
    pub fn element_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Unwrap into the plain nested vector.
    pub fn into_inner(self) -> Vec<Sequence> {
        self.0
    }
}

impl From<Vec<Sequence>> for Batch {
    fn from(sequences: Vec<Sequence>) -> Self {
        Self(sequences)
    }
}

impl From<Batch> for Vec<Sequence> {
    fn from(batch: Batch) -> Self {
        batch.0
    }
}

#[derive(Deserialize)]
#[serde(transparent)]
struct WireBatch(Vec<Option<Vec<Option<i64>>>>);

impl From<WireBatch> for Batch {
    fn from(wire: WireBatch) -> Self {
        Self(
            wire.0
                .into_iter()
                .map(|sequence| {
                    sequence
                        .unwrap_or_default()
                        .into_iter()
                        .map(Option::unwrap_or_default)
                        .collect()
                })
                .collect(),
        )
    }
}

/// Sorter output, index-aligned with the [`Batch`] it was produced from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortedBatch(Vec<Sequence>);

impl SortedBatch {
    /// Number of sorted sequences.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no sequences were sorted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the sorted sequences, index-aligned with the input.
    pub fn sequences(&self) -> &[Sequence] {
        &self.0
    }

    /// Unwrap into the plain nested vector.
    pub fn into_inner(self) -> Vec<Sequence> {
        self.0
    }
}

impl From<Vec<Sequence>> for SortedBatch {
    fn from(sequences: Vec<Sequence>) -> Self {
        Self(sequences)
    }
}

impl FromIterator<Sequence> for SortedBatch {
    fn from_iter<I: IntoIterator<Item = Sequence>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{Batch, SortedBatch};

    #[test]
    fn null_entries_decode_as_empty_sequences() {
        let batch: Batch =
            serde_json::from_str("[null, [2, 1], []]").expect("decode");

        assert_eq!(batch, Batch::new(vec![vec![], vec![2, 1], vec![]]));
    }

    #[test]
    fn null_elements_decode_as_zero() {
        let batch: Batch =
            serde_json::from_str("[[1, null], [null]]").expect("decode");

        assert_eq!(batch, Batch::new(vec![vec![1, 0], vec![0]]));
    }

    #[test]
    fn batch_encodes_as_plain_nested_array() {
        let batch = Batch::new(vec![vec![3, -1], vec![]]);

        let json = serde_json::to_string(&batch).expect("encode");

        assert_eq!(json, "[[3,-1],[]]");
    }

    #[test]
    fn element_count_spans_all_sequences() {
        let batch = Batch::new(vec![vec![1, 2, 3], vec![], vec![9]]);

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.element_count(), 4);
    }

    #[test]
    fn sorted_batch_collects_in_iteration_order() {
        let sorted: SortedBatch =
            vec![vec![1], vec![2, 3]].into_iter().collect();

        assert_eq!(sorted.sequences(), &[vec![1], vec![2, 3]]);
    }
}
