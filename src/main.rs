use anyhow::Result;
use clap::Parser;

use fleek_cli::cli::{Cli, Command};
use fleek_cli::commands;
use fleek_cli::config::layout::Layout;
use fleek_cli::exec::SystemExecutor;
use fleek_cli::logging::{self, Logger};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();

    if matches!(args.command, Command::Version) {
        commands::version::run();
        return Ok(());
    }

    logging::init_subscriber(args.verbose, args.command.name());
    let log = Logger::new(args.command.name());
    let layout = Layout::from_env()?;
    let executor = SystemExecutor;

    let result = match &args.command {
        Command::Init(opts) => commands::init::run(opts, &layout, &executor, &log),
        Command::Add(opts) => commands::add::run(opts, &layout, &log),
        Command::Remove(opts) => commands::remove::run(opts, &layout, &log),
        Command::Eject => commands::eject::run(&layout, &log),
        Command::Join(opts) => commands::join::run(opts, &layout, &executor, &log),
        Command::Show => commands::show::run(&layout, &log),
        Command::Version => Ok(()),
    };

    if let Err(e) = &result {
        log.error(&format!("{e:#}"));
        if let Some(path) = log.log_path() {
            log.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
        std::process::exit(1);
    }
    Ok(())
}
