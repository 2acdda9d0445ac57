//! Command: mark the configuration as ejected.
use anyhow::{Context as _, Result};

use crate::config::layout::Layout;
use crate::logging::Logger;

/// Set `ejected: true` and write the configuration.
///
/// # Errors
///
/// Returns an error if the configuration cannot be opened or written.
pub fn run(layout: &Layout, log: &Logger) -> Result<()> {
    let mut store = super::open_store(layout, log)?;
    store.eject().context("failed to eject configuration")?;
    log.info(&format!(
        "ejected; {} is now yours to manage",
        store.user_flake_dir().display()
    ));
    Ok(())
}
