//! Subscriber installation
//!
//! Console lines go to stderr so the prompts on stdout stay readable. The
//! optional log file gets its own, more detailed format and is written from
//! a background thread.

use anyhow::{Context, Result};
use patchsheet_core::logging::LogConfig;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, IsTerminal};
use tracing::{debug, warn, Subscriber};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
    Layer,
};

/// Handle to keep the log file writer alive
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` overrides the configured level. Returns a guard when file
/// output is enabled; dropping it flushes the file.
pub fn init(config: &LogConfig) -> Result<Option<LogGuard>> {
    let filter = EnvFilter::builder()
        .with_default_directive(config.parse_level().into())
        .from_env_lossy();

    let console = config
        .console_output
        .then(|| console_layer(filter.clone()));

    let (file, guard) = if config.file_output {
        let (writer, guard) = open_log_file(config)?;
        (
            Some(file_layer(writer, filter)),
            Some(LogGuard { _guard: guard }),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .init();

    debug!("Logging initialized at level: {}", config.level);
    if config.file_output {
        debug!("Log file path: {:?}", config.current_log_path());
        // After init so failures end up in the log
        match config.cleanup_old_logs() {
            Ok(0) => {}
            Ok(removed) => debug!("Removed {} old log files", removed),
            Err(e) => warn!("Failed to clean up old log files: {}", e),
        }
    }

    Ok(guard)
}

fn console_layer<S>(filter: EnvFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    let ansi = ansi_enabled(
        io::stderr().is_terminal(),
        std::env::var_os("NO_COLOR").as_deref(),
    );

    fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .with_filter(filter)
}

fn file_layer<S>(writer: NonBlocking, filter: EnvFilter) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter)
}

/// Create the log directory and this run's log file
fn open_log_file(config: &LogConfig) -> Result<(NonBlocking, WorkerGuard)> {
    config
        .ensure_log_directory()
        .context("Failed to create log directory")?;

    let log_path = config.current_log_path();
    let file = File::create(&log_path)
        .with_context(|| format!("Failed to create log file: {:?}", log_path))?;

    Ok(tracing_appender::non_blocking(file))
}

/// Colors only on a terminal, and never when `NO_COLOR` is set to a value
fn ansi_enabled(is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    is_terminal && no_color.map_or(true, OsStr::is_empty)
}
