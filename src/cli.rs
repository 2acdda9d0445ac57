//! Command-line interface definition.
use clap::{Parser, Subcommand};

use crate::config::bootstrap::DEFAULT_FLAKE_DIR;

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "fleek",
    about = "Manage a home-manager configuration from a single .fleek.yml",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter configuration for this machine
    Init(InitOpts),
    /// Add packages or programs
    Add(ChangeOpts),
    /// Remove packages or programs
    Remove(ChangeOpts),
    /// Stop managing the configuration with fleek
    Eject,
    /// Clone an existing configuration repository
    Join(JoinOpts),
    /// Print the current configuration
    Show,
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the per-command log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
            Self::Eject => "eject",
            Self::Join(_) => "join",
            Self::Show => "show",
            Self::Version => "version",
        }
    }
}

/// Options for the `init` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct InitOpts {
    /// Overwrite an existing configuration file or a regular file at ~/.fleek.yml
    #[arg(short, long)]
    pub force: bool,

    /// Flake directory, relative to $HOME
    #[arg(short, long, default_value = DEFAULT_FLAKE_DIR)]
    pub location: String,

    /// Git author name (defaults to `git config user.name`)
    #[arg(long)]
    pub name: Option<String>,

    /// Git author email (defaults to `git config user.email`)
    #[arg(long)]
    pub email: Option<String>,
}

/// Options for the `add` and `remove` subcommands.
#[derive(Parser, Debug, Clone)]
pub struct ChangeOpts {
    /// Package or program names
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Treat names as programs rather than packages
    #[arg(short, long)]
    pub program: bool,
}

/// Options for the `join` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct JoinOpts {
    /// Repository URL to clone
    pub repo: String,

    /// Flake directory to clone into, relative to $HOME
    #[arg(short, long, default_value = DEFAULT_FLAKE_DIR)]
    pub location: String,
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_defaults() {
        let cli = Cli::parse_from(["fleek", "init"]);
        let Command::Init(opts) = cli.command else {
            panic!("expected init");
        };
        assert!(!opts.force);
        assert_eq!(opts.location, ".config/home-manager");
        assert_eq!(opts.name, None);
    }

    #[test]
    fn parse_init_force_and_identity() {
        let cli = Cli::parse_from([
            "fleek",
            "init",
            "-f",
            "--location",
            "flake",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
        ]);
        let Command::Init(opts) = cli.command else {
            panic!("expected init");
        };
        assert!(opts.force);
        assert_eq!(opts.location, "flake");
        assert_eq!(opts.name.as_deref(), Some("Jane Doe"));
        assert_eq!(opts.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn parse_add_packages() {
        let cli = Cli::parse_from(["fleek", "add", "jq", "ripgrep"]);
        let Command::Add(opts) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(opts.names, vec!["jq", "ripgrep"]);
        assert!(!opts.program);
    }

    #[test]
    fn parse_remove_program() {
        let cli = Cli::parse_from(["fleek", "remove", "--program", "starship"]);
        let Command::Remove(opts) = cli.command else {
            panic!("expected remove");
        };
        assert_eq!(opts.names, vec!["starship"]);
        assert!(opts.program);
    }

    #[test]
    fn add_requires_a_name() {
        assert!(Cli::try_parse_from(["fleek", "add"]).is_err());
    }

    #[test]
    fn parse_join() {
        let cli = Cli::parse_from(["fleek", "join", "https://example.com/me/flake.git"]);
        let Command::Join(opts) = cli.command else {
            panic!("expected join");
        };
        assert_eq!(opts.repo, "https://example.com/me/flake.git");
        assert_eq!(opts.location, ".config/home-manager");
    }

    #[test]
    fn parse_verbose_after_subcommand() {
        let cli = Cli::parse_from(["fleek", "eject", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Eject));
    }

    #[test]
    fn command_names_match_subcommands() {
        for (arg, name) in [("show", "show"), ("version", "version"), ("eject", "eject")] {
            assert_eq!(Cli::parse_from(["fleek", arg]).command.name(), name);
        }
    }

    #[test]
    fn unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["fleek", "install"]).is_err());
    }
}
