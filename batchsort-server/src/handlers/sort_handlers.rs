use axum::{body::Bytes, response::Json};
use batchsort_core::Strategy;
use tracing::info;

use crate::{
    api::{SortResponse, decode_sort_request},
    errors::AppResult,
};

/// Sort every sequence one after another on the request task.
pub async fn process_single_handler(
    body: Bytes,
) -> AppResult<Json<SortResponse>> {
    let batch = decode_sort_request(&body)?.into_batch();

    let report = Strategy::Sequential.run(&batch)?;

    info!(
        strategy = %Strategy::Sequential,
        sequences = batch.len(),
        time_ns = report.elapsed_nanos(),
        "sort request served"
    );
    Ok(Json(report.into()))
}

/// Fan out one unit of work per sequence and join before answering.
///
/// The join barrier blocks, so the whole strategy runs on the blocking pool.
pub async fn process_concurrent_handler(
    body: Bytes,
) -> AppResult<Json<SortResponse>> {
    let batch = decode_sort_request(&body)?.into_batch();
    let sequences = batch.len();

    let report = tokio::task::spawn_blocking(move || {
        Strategy::Concurrent.run(&batch)
    })
    .await??;

    info!(
        strategy = %Strategy::Concurrent,
        sequences,
        time_ns = report.elapsed_nanos(),
        "sort request served"
    );
    Ok(Json(report.into()))
}
