//! `todocolor` entry point.
//!
//! # Responsibility
//! - Parse arguments, probe the terminal and initialize stderr logging.
//! - Render the todo file and print it to stdout.
//! - Map failures to a non-zero exit status with a message on stderr.

mod cli;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use log::{debug, error};
use std::io::Write;
use std::process::ExitCode;
use terminal::TerminalInfo;
use todocolor_core::{init_logging, render, LogSettings};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let terminal = TerminalInfo::probe();
    let options = cli.into_options(dirs::home_dir().as_deref())?;

    init_logging(LogSettings::new(
        options.log_level(),
        terminal.cols,
        terminal.capability,
    ))
    .map_err(anyhow::Error::msg)
    .context("failed to initialize logging")?;

    debug!(
        "event=terminal_probe module=cli status=ok cols={} rows={} dumb_terminal={}",
        terminal.cols, terminal.rows, terminal.capability.dumb_terminal
    );
    debug!("event=options_resolved module=cli status=ok options={options:?}");

    let out = render(&options, terminal.capability)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{out}").context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
