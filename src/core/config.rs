use std::env;

use crate::errors::AdapterError;

pub const DEFAULT_PATH_PREFIX: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Literal prefix stripped from the start of every inbound path.
    pub path_prefix: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
        }
    }
}

impl AdapterConfig {
    /// # Errors
    ///
    /// Returns `AdapterError::Config` when the prefix does not start with `/`.
    pub fn new(path_prefix: impl Into<String>) -> Result<Self, AdapterError> {
        let path_prefix = path_prefix.into();
        if !path_prefix.starts_with('/') {
            return Err(AdapterError::Config(format!(
                "PATH_PREFIX must start with '/': {path_prefix:?}"
            )));
        }
        Ok(Self { path_prefix })
    }

    /// Reads `PATH_PREFIX`, falling back to `/` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::Config` when the variable is not valid unicode
    /// or does not start with `/`.
    pub fn from_env() -> Result<Self, AdapterError> {
        match env::var("PATH_PREFIX") {
            Ok(prefix) => Self::new(prefix),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(AdapterError::Config(format!("PATH_PREFIX: {e}"))),
        }
    }
}
