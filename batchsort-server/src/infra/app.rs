use axum::{Router, extract::DefaultBodyLimit};
use batchsort_config::Config;
use tower_http::trace::TraceLayer;

use crate::routes;

/// Build the application router with its middleware stack.
pub fn create_app(config: &Config) -> Router {
    routes::create_router()
        // Applies to the `Bytes` extractor used by both handlers
        .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
