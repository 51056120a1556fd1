use axum::{Router, routing::post};

use crate::handlers::sort_handlers::{
    process_concurrent_handler, process_single_handler,
};

pub mod paths {
    pub const PROCESS_SINGLE: &str = "/process-single";
    pub const PROCESS_CONCURRENT: &str = "/process-concurrent";
}

/// Route table for the sort endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route(paths::PROCESS_SINGLE, post(process_single_handler))
        .route(paths::PROCESS_CONCURRENT, post(process_concurrent_handler))
}
