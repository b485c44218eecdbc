//! Configuration for the bitview application.
//!
//! Resolves the command line into what to do. The tool takes at most one
//! meaningful argument, the notation token, and works with zero arguments.
//!
//! # Resolution
//!
//! | First argument            | Result                         |
//! |---------------------------|--------------------------------|
//! | (none)                    | run with binary notation       |
//! | `bin`, `oct`, `dec`, `hex`| run with that notation         |
//! | `help`, `--help`, `-h`    | show usage                     |
//! | anything else             | `Error::InvalidNotation`       |
//!
//! Arguments after the first are ignored.

use bitview_core::{Notation, Result};
use tracing::debug;

/// Display name used when the process was started without an argv[0].
const DEFAULT_PROGRAM_NAME: &str = "bitview";

/// What the process should do after reading its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the usage text and exit successfully
    Help,
    /// Run the demonstration
    Run(Config),
}

/// Resolved configuration for a demonstration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Notation whose literals get assigned to the container
    pub notation: Notation,
}

impl Config {
    /// Resolve the full argument vector, program name first.
    ///
    /// # Errors
    /// Returns `Error::InvalidNotation` when the first argument is neither a
    /// help flag nor a notation token. Matching is case-sensitive.
    pub fn from_args(args: &[String]) -> Result<Command> {
        if args.len() > 2 {
            debug!(ignored = ?&args[2..], "ignoring extra arguments");
        }

        let notation = match args.get(1).map(String::as_str) {
            None => Notation::default(),
            Some("help" | "--help" | "-h") => return Ok(Command::Help),
            Some(token) => token.parse()?,
        };

        Ok(Command::Run(Config { notation }))
    }

    /// One-line summary of the resolved configuration.
    pub fn describe(&self) -> String {
        format!("notation={} ({})", self.notation, self.notation.token())
    }
}

/// The name to show in usage text: argv[0] as given, or a fixed fallback.
///
/// Resolved apart from [`Config`] because the invalid-argument path needs it
/// even when no configuration can be built.
pub fn program_name(args: &[String]) -> String {
    args.first()
        .filter(|name| !name.is_empty())
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}
