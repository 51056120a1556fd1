//! Shared configuration library for batchsort.
//!
//! Configuration is layered: explicit overrides applied by the caller, then
//! environment variables (optionally seeded from a `.env` file), then a TOML
//! file, then built-in defaults. [`ConfigLoader`] performs the layering and
//! returns the composed [`Config`] together with any non-fatal
//! [`ConfigWarnings`].

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::{
    Config, ConfigMetadata, LimitsConfig, ServerConfig,
    sources::{EnvConfig, FileConfig},
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
