use thiserror::Error;

use super::models::Config;

/// Hard configuration errors that stop startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("server host must not be empty")]
    EmptyHost,
    #[error("max_body_bytes must be greater than zero")]
    ZeroBodyLimit,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

/// Body limits above this are accepted but flagged; every sequence becomes
/// its own unit of work, so huge bodies translate into huge fan-outs.
const LARGE_BODY_LIMIT: usize = 64 * 1024 * 1024;

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.server.host.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyHost);
    }

    if config.limits.max_body_bytes == 0 {
        return Err(ConfigGuardRailError::ZeroBodyLimit);
    }

    if config.limits.max_body_bytes > LARGE_BODY_LIMIT {
        warnings.push_with_hint(
            format!(
                "max_body_bytes is {} bytes; large batches spawn one sort unit per sequence",
                config.limits.max_body_bytes
            ),
            "Lower MAX_BODY_BYTES unless the service only sees trusted callers",
        );
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::{ConfigGuardRailError, apply_guard_rails};
    use crate::Config;

    #[test]
    fn default_config_passes_without_warnings() {
        let warnings = apply_guard_rails(&Config::default()).expect("valid");

        assert!(warnings.is_empty());
    }

    #[test]
    fn blank_host_is_rejected() {
        let mut config = Config::default();
        config.server.host = "  ".into();

        assert_eq!(
            apply_guard_rails(&config).unwrap_err(),
            ConfigGuardRailError::EmptyHost
        );
    }

    #[test]
    fn zero_body_limit_is_rejected() {
        let mut config = Config::default();
        config.limits.max_body_bytes = 0;

        assert_eq!(
            apply_guard_rails(&config).unwrap_err(),
            ConfigGuardRailError::ZeroBodyLimit
        );
    }

    #[test]
    fn very_large_body_limit_warns() {
        let mut config = Config::default();
        config.limits.max_body_bytes = 512 * 1024 * 1024;

        let warnings = apply_guard_rails(&config).expect("valid");

        assert_eq!(warnings.len(), 1);
        assert!(warnings.items[0].hint.is_some());
    }
}
