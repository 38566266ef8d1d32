//! Tracing initialization and subscriber setup.
//!
//! Configures the global tracing subscriber to write env-filtered, plain-text
//! log lines to a file under the application data directory. Logging to a
//! file matters here: stdout belongs to the rendered UI, and a log line on it
//! would corrupt the frame.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::paths;
use crate::Config;

/// Initializes the tracing subscriber with file output.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set
/// 2. `config.log_level`, if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Lines are appended to `logs/vitrine.log` under the data directory
/// (`$XDG_DATA_HOME/vitrine` or `~/.local/share/vitrine`).
///
/// # Returns
///
/// The appender's worker guard, which the caller must keep alive for the
/// process lifetime so buffered lines are flushed on exit. Returns `None`
/// when the log directory or file cannot be prepared, or when a subscriber is
/// already installed; observability is optional and never blocks startup.
pub fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let level = config.log_level.clone().unwrap_or_else(|| "info".to_string());

    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir).ok()?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(logs_dir.join("vitrine.log"))
        .ok()?;

    let (writer, guard) = tracing_appender::non_blocking(log_file);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .is_ok();

    initialized.then_some(guard)
}
