//! Command: remove packages or programs.
use anyhow::{Context as _, Result};

use crate::cli::ChangeOpts;
use crate::config::layout::Layout;
use crate::logging::Logger;

/// Remove every name in `opts` from the configuration, stopping at the first
/// failure.
///
/// # Errors
///
/// Returns an error if the configuration cannot be opened, a name is not
/// listed, or a change fails validation or cannot be written.
pub fn run(opts: &ChangeOpts, layout: &Layout, log: &Logger) -> Result<()> {
    let mut store = super::open_store(layout, log)?;
    let kind = if opts.program { "program" } else { "package" };

    for name in &opts.names {
        let result = if opts.program {
            store.remove_program(name)
        } else {
            store.remove_package(name)
        };
        result.with_context(|| format!("failed to remove {kind} {name}"))?;
        log.info(&format!("removed {kind} {name}"));
    }
    Ok(())
}
