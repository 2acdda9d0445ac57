//! Subcommand handlers.
//!
//! Each handler takes its collaborators (the [`Layout`], an [`Executor`] where
//! processes are involved, and the [`Logger`]) so the binary wires in the real
//! ones and tests inject temporary homes and scripted processes.
//!
//! [`Executor`]: crate::exec::Executor
pub mod add;
pub mod eject;
pub mod init;
pub mod join;
pub mod remove;
pub mod show;
pub mod version;

use anyhow::{Context as _, Result};

use crate::config::layout::Layout;
use crate::config::store::ConfigStore;
use crate::logging::Logger;

/// Open the configuration behind `$HOME/.fleek.yml`.
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be parsed.
pub fn open_store(layout: &Layout, log: &Logger) -> Result<ConfigStore> {
    let store = ConfigStore::open(layout).with_context(|| {
        format!(
            "failed to read {} (run `fleek init` or `fleek join` first)",
            layout.link().display()
        )
    })?;
    log.debug(&format!("configuration at {}", store.location().display()));
    if store.config().ejected {
        log.warn("this configuration has been ejected; fleek no longer manages it");
    }
    Ok(store)
}
