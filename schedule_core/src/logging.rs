//! Tracing setup for the `schedule-maker` binary.
//!
//! `plan` and `config` print their results on stdout, which may be piped
//! into other tools (`plan --json`), so every log line goes to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Report each pipeline stage at `info`: chunks found, sessions dated, bytes written.
pub fn init() {
    init_with_level("info")
}

/// Set up logging with `default_level` unless RUST_LOG says otherwise.
///
/// `--verbose` passes `debug`, which adds per-date decisions of the
/// calendar walk and comment-stripping counts.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

// Unit tests call this from several modules; only the first call installs.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("schedule_core=debug"))
        .try_init();
}
