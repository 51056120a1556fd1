pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Matches axum's built-in request body limit.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub const CONFIG_PATH_ENV: &str = "BATCHSORT_CONFIG";
