use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{
    constants::CONFIG_PATH_ENV,
    util::{non_empty_var, parse_var, path_var},
};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub limits: FileLimitsConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileLimitsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_body_bytes: Option<usize>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub max_body_bytes: Option<usize>,
    pub config_path: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self {
            server_host: non_empty_var("SERVER_HOST"),
            server_port: parse_var("SERVER_PORT"),
            max_body_bytes: parse_var("MAX_BODY_BYTES"),
            config_path: path_var(CONFIG_PATH_ENV),
        }
    }
}
