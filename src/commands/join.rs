//! Command: clone an existing configuration repository.
use anyhow::{Context as _, Result};

use crate::cli::JoinOpts;
use crate::config::bootstrap;
use crate::config::layout::Layout;
use crate::exec::Executor;
use crate::logging::Logger;

/// Clone `opts.repo` into the flake directory and adopt its `.fleek.yml`.
///
/// # Errors
///
/// Returns an error if the clone fails or the repository holds no readable
/// configuration.
pub fn run(opts: &JoinOpts, layout: &Layout, executor: &dyn Executor, log: &Logger) -> Result<()> {
    log.stage(&format!("Cloning {}", opts.repo));
    let store = bootstrap::join(layout, &opts.location, &opts.repo, executor)
        .with_context(|| format!("failed to join {}", opts.repo))?;
    log.info(&format!(
        "using {} ({} packages, {} programs)",
        store.location().display(),
        store.config().packages.len(),
        store.config().programs.len()
    ));
    Ok(())
}
