//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only the demonstration. The default
//! filter is `warn`, which keeps normal runs silent; `RUST_LOG=debug` shows
//! which literal each notation assigned. Colour codes are only emitted when
//! stderr is a terminal, so captured logs stay plain text.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Call once, before any logging.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
