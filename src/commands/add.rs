//! Command: add packages or programs.
use anyhow::{Context as _, Result};

use crate::cli::ChangeOpts;
use crate::config::layout::Layout;
use crate::logging::Logger;

/// Add every name in `opts` to the configuration, stopping at the first
/// failure.
///
/// # Errors
///
/// Returns an error if the configuration cannot be opened, or if a change
/// fails validation or cannot be written.
pub fn run(opts: &ChangeOpts, layout: &Layout, log: &Logger) -> Result<()> {
    let mut store = super::open_store(layout, log)?;
    let kind = if opts.program { "program" } else { "package" };

    for name in &opts.names {
        let result = if opts.program {
            store.add_program(name)
        } else {
            store.add_package(name)
        };
        result.with_context(|| format!("failed to add {kind} {name}"))?;
        log.info(&format!("added {kind} {name}"));
    }
    Ok(())
}
