//! Structured logging initialization for the emucam CLI.
//!
//! All log output goes to stderr so stdout stays reserved for the
//! negotiated parameters.

use std::io::{self, IsTerminal};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Initialize the tracing subscriber based on CLI flags and environment.
///
/// # Arguments
///
/// * `robot_mode` - If true, emit JSON lines for machine consumption
/// * `verbose` - Verbosity level: 0 = info, 1 = debug, 2+ = trace
/// * `quiet` - If true, only errors are logged
///
/// # Environment Variables
///
/// * `RUST_LOG` - Override default filter (e.g., "emucam::camera=trace,emucam=info")
///
/// | Mode | TTY | Output |
/// |------|-----|--------|
/// | Robot | any | JSON lines with targets |
/// | Human | yes | Colored full format |
/// | Human | no | Compact plain format |
///
/// Does nothing if a global subscriber is already installed.
pub fn init_logging(robot_mode: bool, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let registry = tracing_subscriber::registry().with(filter);
    let base = fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr);

    let result = if robot_mode {
        registry.with(base.json().with_target(true)).try_init()
    } else if io::stderr().is_terminal() {
        registry.with(base.with_target(false)).try_init()
    } else {
        registry
            .with(base.with_ansi(false).with_target(false).compact())
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}

/// Filter directive for a verbosity level.
fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "emucam=error";
    }
    match verbose {
        0 => "emucam=info",
        1 => "emucam=debug",
        _ => "emucam=trace",
    }
}
