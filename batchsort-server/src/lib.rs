//! # batchsort server
//!
//! Thin HTTP adapter over [`batchsort_core`]. Two endpoints accept the same
//! `{"to_sort": [[...], ...]}` payload and differ only in the sorting
//! strategy they run:
//!
//! - `POST /process-single` sorts sequences one after another.
//! - `POST /process-concurrent` fans out one unit of work per sequence and
//!   joins them before answering.
//!
//! Both answer with `{"sorted_arrays": [...], "time_ns": n}` where `time_ns`
//! covers the sort alone, not decoding or encoding.

pub mod api;
pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app::create_app;
