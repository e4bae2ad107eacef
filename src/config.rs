//! Tool configuration.
//!
//! Values resolve in this order, later sources winning:
//! built-in defaults, the TOML file passed with `--config`, then the
//! `CAESAR_DEFAULT_SHIFT` environment variable. An explicit `--shift` on the
//! command line overrides all of them and is handled by the binary.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::constants::{DEFAULT_SHIFT, SHIFT_ENV_VAR};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Shift used when the caller does not give one.
    pub default_shift: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_shift: DEFAULT_SHIFT,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Applies environment overrides read through `lookup`.
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SHIFT_ENV_VAR) {
            let shift = raw.trim().parse::<i64>().map_err(|_| {
                Error::Config(format!("{SHIFT_ENV_VAR} must be an integer, got {raw:?}"))
            })?;
            debug!("{} overrides default shift: {}", SHIFT_ENV_VAR, shift);
            self.default_shift = shift;
        }

        Ok(())
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Loads the optional file and then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.merge_env_vars()?;
        Ok(config)
    }
}
