//! bitview: print one set of bit patterns under four notations and five types.
//!
//! Successful runs write only to stdout. An invalid notation writes the
//! error line and the usage text to stderr and exits with status 1.

mod config;
mod logging;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use bitview_core::report::{write_demonstration, write_usage};
use bitview_core::{Error, Result};
use tracing::{debug, error};

use crate::config::{Command, Config};

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("warning: logging disabled: {e}");
    }

    let args: Vec<String> = std::env::args_os()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let program_name = config::program_name(&args);

    match run(&args, &program_name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::InvalidNotation(_)) => {
            if let Err(e) = report_invalid(&program_name, &err) {
                error!(error = %e, "failed to write usage");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "demonstration failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String], program_name: &str) -> Result<()> {
    let command = Config::from_args(args)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match command {
        Command::Help => write_usage(&mut out, program_name)?,
        Command::Run(config) => {
            debug!(config = %config.describe(), "resolved configuration");
            write_demonstration(&mut out, config.notation)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Error line, blank line, then the usage text, all on stderr.
fn report_invalid(program_name: &str, err: &Error) -> Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    writeln!(out, "ERROR: {err}")?;
    writeln!(out)?;
    write_usage(&mut out, program_name)?;
    out.flush()?;
    Ok(())
}
