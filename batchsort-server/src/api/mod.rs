//! Wire types for the sort endpoints.

use batchsort_core::{Batch, SortReport, SortedBatch};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Object key carrying the batch.
pub const TO_SORT_KEY: &str = "to_sort";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SortRequest {
    /// Missing and `null` both mean an empty batch.
    #[serde(default)]
    pub to_sort: Option<Batch>,
}

impl SortRequest {
    pub fn into_batch(self) -> Batch {
        self.to_sort.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortResponse {
    pub sorted_arrays: SortedBatch,
    pub time_ns: i64,
}

impl From<SortReport> for SortResponse {
    fn from(report: SortReport) -> Self {
        let time_ns = report.elapsed_nanos();
        Self {
            sorted_arrays: report.sorted,
            time_ns,
        }
    }
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("request body is empty")]
    Empty,
    #[error("request body is not a JSON object")]
    NotAnObject,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Decode the first JSON value in `body` as a [`SortRequest`].
///
/// Bytes after the first value are ignored and a bare `null` reads as an
/// empty request. The `to_sort` key matches without regard to ASCII case; an
/// exact spelling wins over other casings.
pub fn decode_sort_request(body: &[u8]) -> Result<SortRequest, PayloadError> {
    let value = serde_json::Deserializer::from_slice(body)
        .into_iter::<Value>()
        .next()
        .ok_or(PayloadError::Empty)??;

    match value {
        Value::Null => Ok(SortRequest::default()),
        Value::Object(mut object) => {
            let key = if object.contains_key(TO_SORT_KEY) {
                Some(TO_SORT_KEY.to_owned())
            } else {
                object
                    .keys()
                    .find(|key| key.eq_ignore_ascii_case(TO_SORT_KEY))
                    .cloned()
            };
            let to_sort = match key.and_then(|key| object.remove(&key)) {
                Some(value) => serde_json::from_value(value)?,
                None => None,
            };
            Ok(SortRequest { to_sort })
        }
        _ => Err(PayloadError::NotAnObject),
    }
}
