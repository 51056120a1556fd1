//! Fan-out/fan-in sorter.
//!
//! Every sequence gets its own unit of work on the rayon pool. The result
//! container is sized before the first unit is spawned and each unit receives
//! an exclusive `&mut` to its own slot, so units never contend and no lock
//! guards the writes. The end of [`rayon::scope`] is the join barrier: the
//! caller resumes only once every unit has written its slot.
//!
//! A panicking unit is caught at the unit boundary so the remaining units run
//! to completion. After the barrier the first failed slot (lowest index)
//! aborts the whole batch; no partial result is ever returned.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use tracing::trace;

use crate::{Batch, Result, Sequence, SortError, SortedBatch};

use super::sorted_copy;

type UnitOutcome = std::result::Result<Sequence, String>;

/// Sort every sequence of `batch` in its own unit of work and join them.
///
/// Blocks the calling thread until all units have finished. Call it from a
/// blocking context (e.g. `tokio::task::spawn_blocking`) when inside an async
/// runtime.
pub fn sort_concurrent(batch: &Batch) -> Result<SortedBatch> {
    fan_out(batch.sequences(), sorted_copy)
}

pub(crate) fn fan_out<F>(sequences: &[Sequence], sort: F) -> Result<SortedBatch>
where
    F: Fn(&[i64]) -> Sequence + Sync,
{
    let mut slots: Vec<Option<UnitOutcome>> = Vec::with_capacity(sequences.len());
    slots.resize_with(sequences.len(), || None);

    trace!(units = sequences.len(), "fanning out sort units");

    let sort = &sort;
    rayon::scope(|scope| {
        for (slot, sequence) in slots.iter_mut().zip(sequences) {
            scope.spawn(move |_| {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                    sort(sequence.as_slice())
                }));
                *slot = Some(outcome.map_err(panic_reason));
            });
        }
    });

    join_slots(slots)
}

fn join_slots(slots: Vec<Option<UnitOutcome>>) -> Result<SortedBatch> {
    slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| match slot {
            Some(Ok(sorted)) => Ok(sorted),
            Some(Err(reason)) => Err(SortError::UnitFailed { index, reason }),
            None => Err(SortError::UnitFailed {
                index,
                reason: "unit finished without writing its slot".to_string(),
            }),
        })
        .collect()
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unit panicked".to_string()
    }
}
