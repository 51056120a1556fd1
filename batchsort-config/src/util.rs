use std::{path::PathBuf, str::FromStr};

/// Read `name` from the environment, treating blank values as unset.
pub fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read and parse `name`; unparsable values are treated as unset.
pub fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    non_empty_var(name).and_then(|raw| raw.parse().ok())
}

pub fn path_var(name: &str) -> Option<PathBuf> {
    non_empty_var(name).map(PathBuf::from)
}
