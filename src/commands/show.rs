//! Command: print the current configuration.
use std::fmt::Write as _;

use anyhow::Result;

use crate::config::bling::Bling;
use crate::config::canonical;
use crate::config::layout::Layout;
use crate::logging::Logger;

/// Render the configuration and the bundle its bling level pulls in.
///
/// # Errors
///
/// Returns an error if the configuration cannot be opened or rendered.
pub fn render(layout: &Layout, log: &Logger) -> Result<String> {
    let store = super::open_store(layout, log)?;
    let config = store.config();
    let mut out = canonical::to_string(config)?;

    match config.bling.parse::<Bling>() {
        Ok(bling) => {
            let _ = writeln!(out, "# bling {bling} packages: {}", bling.packages().join(", "));
            let _ = writeln!(out, "# bling {bling} programs: {}", bling.programs().join(", "));
        }
        Err(e) => log.warn(&e),
    }
    Ok(out)
}

/// Print the configuration to stdout.
///
/// # Errors
///
/// Returns an error if the configuration cannot be opened or rendered.
#[allow(clippy::print_stdout)]
pub fn run(layout: &Layout, log: &Logger) -> Result<()> {
    print!("{}", render(layout, log)?);
    Ok(())
}
