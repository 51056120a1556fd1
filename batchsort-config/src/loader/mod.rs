pub mod error;

use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    models::{
        Config, ConfigMetadata, LimitsConfig, ServerConfig,
        sources::{EnvConfig, FileConfig},
    },
    validation::{self, ConfigWarnings},
};

use error::ConfigLoadError;

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("batchsort.toml"),
        PathBuf::from("config/batchsort.toml"),
    ]
});

/// Result of a successful load: the composed config plus soft warnings.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env`, read the process environment and compose the config.
    ///
    /// A missing `.env` file is not an error. Variables already present in
    /// the process environment win over values from the file.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Compose the config from an explicit environment snapshot. Neither the
    /// process environment nor any `.env` file is consulted.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;

        let mut warnings = ConfigWarnings::default();
        if config_path.is_none() {
            warnings.push_with_hint(
                "No batchsort.toml detected; using environment variables and defaults",
                "Set BATCHSORT_CONFIG or pass --config to load a configuration file",
            );
        }

        let config = compose_config(file_config.unwrap_or_default(), env, config_path);
        warnings.extend(validation::apply_guard_rails(&config)?);

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(path) => path.clone(),
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        debug!(path = %path.display(), "loaded configuration file");
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
    toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Config {
    let FileConfig {
        server: file_server,
        limits: file_limits,
    } = file;

    let defaults = Config::default();

    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or(defaults.server.host),
        port: env
            .server_port
            .or(file_server.port)
            .unwrap_or(defaults.server.port),
    };

    let limits = LimitsConfig {
        max_body_bytes: env
            .max_body_bytes
            .or(file_limits.max_body_bytes)
            .unwrap_or(defaults.limits.max_body_bytes),
    };

    Config {
        server,
        limits,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded: false,
        },
    }
}
