//! Command: print version information.

/// Version string, overridable at build time through `FLEEK_VERSION`.
#[must_use]
pub fn version() -> &'static str {
    option_env!("FLEEK_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the fleek version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("fleek {}", version());
}
