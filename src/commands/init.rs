//! Command: write a starter configuration for this machine.
use anyhow::{Context as _, Result};

use crate::cli::InitOpts;
use crate::config::bootstrap;
use crate::config::identity::Resolver;
use crate::config::layout::Layout;
use crate::exec::Executor;
use crate::logging::Logger;

/// Read a git setting, returning an empty string when it is unset.
fn git_config(key: &str, executor: &dyn Executor, log: &Logger) -> String {
    executor.run("git", &["config", "--get", key]).map_or_else(
        |e| {
            log.debug(&format!("git config {key} unavailable: {e:#}"));
            String::new()
        },
        |result| result.stdout.trim().to_string(),
    )
}

/// Resolve this machine's identity and write the sample configuration.
///
/// # Errors
///
/// Returns an error if the identity cannot be resolved, a configuration
/// already exists and `--force` was not given, or a file cannot be written.
pub fn run(opts: &InitOpts, layout: &Layout, executor: &dyn Executor, log: &Logger) -> Result<()> {
    run_with(opts, layout, &Resolver::new(executor), executor, log)
}

/// [`run`] with an explicit identity [`Resolver`].
///
/// # Errors
///
/// See [`run`].
pub fn run_with(
    opts: &InitOpts,
    layout: &Layout,
    resolver: &Resolver<'_>,
    executor: &dyn Executor,
    log: &Logger,
) -> Result<()> {
    log.stage("Identifying this machine");
    let name = opts
        .name
        .clone()
        .unwrap_or_else(|| git_config("user.name", executor, log));
    let email = opts
        .email
        .clone()
        .unwrap_or_else(|| git_config("user.email", executor, log));
    let system = resolver
        .resolve(&name, &email)
        .context("failed to identify this machine")?;
    log.info(&format!(
        "{}@{} ({} {})",
        system.username, system.hostname, system.os, system.arch
    ));

    log.stage("Writing configuration");
    let store = bootstrap::write_sample_config(layout, &opts.location, system, opts.force)?;
    if let Err(e) = store.validate() {
        log.warn(&format!("{e}; edit {} before continuing", store.location().display()));
    }
    log.info(&format!("wrote {}", store.location().display()));
    log.info(&format!("linked {}", layout.link().display()));
    Ok(())
}
