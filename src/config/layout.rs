//! Where the configuration lives on disk.
//!
//! `$HOME/.fleek.yml` is a symlink to `<flake dir>/.fleek.yml`.  Reads go
//! through the link; writes go to [`Layout::location`], which is the same
//! file whether the flake directory was bootstrapped locally or cloned.
use std::path::PathBuf;

use super::Config;
use crate::error::{FleekError, Result};

/// Name of the configuration file, both in `$HOME` and in the flake directory.
pub const CONFIG_FILE_NAME: &str = ".fleek.yml";

/// Environment variable that overrides the home directory.
pub const HOME_OVERRIDE_VAR: &str = "FLEEK_HOME";

/// Resolves every configuration path from a single home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    home: PathBuf,
}

impl Layout {
    /// A layout rooted at `home`.
    #[must_use]
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Resolve the home directory from `FLEEK_HOME`, falling back to the
    /// current user's home.
    ///
    /// # Errors
    ///
    /// Returns [`FleekError::HomeDir`] if neither is available.
    pub fn from_env() -> Result<Self> {
        std::env::var_os(HOME_OVERRIDE_VAR)
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .map(Self::new)
            .ok_or(FleekError::HomeDir)
    }

    /// `$HOME/.fleek.yml`, the link every read goes through.
    #[must_use]
    pub fn link(&self) -> PathBuf {
        self.home.join(CONFIG_FILE_NAME)
    }

    /// Absolute flake directory for a `flakedir` value.
    #[must_use]
    pub fn user_flake_dir(&self, flake_dir: &str) -> PathBuf {
        self.home.join(flake_dir)
    }

    /// The authoritative configuration file for `config`.
    #[must_use]
    pub fn location(&self, config: &Config) -> PathBuf {
        self.user_flake_dir(&config.flake_dir).join(CONFIG_FILE_NAME)
    }
}
