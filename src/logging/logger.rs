//! Console-facing logger used by command handlers.
use std::path::PathBuf;

use super::subscriber::STAGE_TARGET;
use super::utils::log_file_path;

/// Thin facade over [`tracing`] for user-facing output.
///
/// Every message also lands in `$XDG_CACHE_HOME/fleek/<command>.log` through
/// the subscriber's file layer, whatever the console verbosity.
#[derive(Debug)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

#[allow(clippy::unused_self)]
impl Logger {
    /// Create a logger for `command`.
    ///
    /// The log file itself is created by
    /// [`init_subscriber`](super::subscriber::init_subscriber); this only
    /// remembers where it is.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            log_file: log_file_path(command),
        }
    }

    /// Path of the log file, if the cache directory is available.
    #[must_use]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Log an error; shown on stderr.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning; shown on stderr.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a section header.
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log a progress message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Suppressed on the console unless verbose; always written to the file.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
}
