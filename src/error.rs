//! Domain-specific error types for the fleek configuration core.
//!
//! Library code returns [`FleekError`]; command handlers at the CLI boundary
//! convert it to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! FleekError
//! ├── Invalid(ConfigError)   — a validation rule was violated
//! ├── PackageNotFound        — removal of an absent package
//! ├── ProgramNotFound        — removal of an absent program
//! ├── Io                     — file read/write, directory or symlink creation
//! ├── Yaml                   — encoding or decoding .fleek.yml
//! ├── Clone                  — the external `git clone` failed
//! ├── RefuseOverwrite        — bootstrap without force on an existing file
//! ├── InvalidResource        — e.g. a symlink whose source is missing
//! ├── Identity               — username or hostname could not be determined
//! └── HomeDir                — no home directory for the current user
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for configuration operations.
#[derive(Error, Debug)]
pub enum FleekError {
    /// The configuration violates a validation rule.
    #[error(transparent)]
    Invalid(#[from] ConfigError),

    /// The package to remove is not in the configuration.
    #[error("package not found in configuration file: {0}")]
    PackageNotFound(String),

    /// The program to remove is not in the configuration.
    #[error("program not found in configuration file: {0}")]
    ProgramNotFound(String),

    /// A file system operation failed.
    #[error("{action} {}", path.display())]
    Io {
        /// What was being attempted (e.g. `"writing"`).
        action: &'static str,
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration could not be encoded or decoded as YAML.
    #[error("fleek.yml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Cloning the configuration repository failed.
    #[error("cloning {repo}: {reason}")]
    Clone {
        /// Repository URL passed to git.
        repo: String,
        /// Human-readable reason reported by the executor.
        reason: String,
    },

    /// Bootstrap found an existing configuration, or a regular file where the
    /// home link belongs, and `force` was not set.
    #[error("cowardly refusing to overwrite config file {} without --force flag", path.display())]
    RefuseOverwrite {
        /// The file that already exists.
        path: PathBuf,
    },

    /// A resource cannot be brought into the desired state.
    #[error("cannot apply {resource}: {reason}")]
    InvalidResource {
        /// Description of the resource.
        resource: String,
        /// Why it cannot be applied.
        reason: String,
    },

    /// The current user's identity could not be resolved.
    #[error("resolving system identity: {0}")]
    Identity(String),

    /// The current user's home directory could not be determined.
    #[error("could not determine home directory")]
    HomeDir,
}

impl FleekError {
    /// Build an [`FleekError::Io`] for `path`.
    #[must_use]
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// A violated validation rule, reported in the order rules are checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `flakedir` is empty.
    #[error("fleek.yml: missing `flakedir`")]
    MissingFlakeDir,

    /// `shell` is not one of the supported shells.
    #[error("fleek.yml: invalid shell, valid shells are: {valid}")]
    InvalidShell {
        /// The rejected value.
        value: String,
        /// Comma-separated list of accepted values.
        valid: String,
    },

    /// `bling` is not one of the supported levels.
    #[error("fleek.yml: invalid bling level, valid levels are: {valid}")]
    InvalidBling {
        /// The rejected value.
        value: String,
        /// Comma-separated list of accepted values.
        valid: String,
    },

    /// A system's `arch` is not supported.
    #[error("fleek.yml: invalid architecture, valid architectures are: {valid}")]
    InvalidArch {
        /// Hostname of the offending system.
        hostname: String,
        /// The rejected value.
        value: String,
        /// Comma-separated list of accepted values.
        valid: String,
    },

    /// A system's `os` is not supported.
    #[error("fleek.yml: invalid OS, valid operating systems are: {valid}")]
    InvalidOs {
        /// Hostname of the offending system.
        hostname: String,
        /// The rejected value.
        value: String,
        /// Comma-separated list of accepted values.
        valid: String,
    },
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, FleekError>;
