//! Logging and tracing initialization.
//!
//! Human-readable diagnostics go to stderr; when a log target is
//! configured (via config `log_dir`, `PASSGAUGE_LOG_DIR`, or
//! `PASSGAUGE_LOG_PATH`), structured JSONL records are appended to a file
//! through a non-blocking writer. The returned guard must be held for the
//! lifetime of the process so buffered records are flushed on exit.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// File name used when only a log directory is configured.
const LOG_FILE_NAME: &str = "passgauge.jsonl";

/// Where log output should go.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`PASSGAUGE_LOG_PATH`). Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for the log file (`PASSGAUGE_LOG_DIR` or config `log_dir`).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's `log_dir`
    /// as the fallback for the directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os("PASSGAUGE_LOG_PATH").map(PathBuf::from);
        let log_dir = std::env::var_os("PASSGAUGE_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir);
        Self { log_path, log_dir }
    }

    /// The log file to write, if any target is configured.
    fn resolve_log_path(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.log_path {
            return Some(path.clone());
        }
        self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME))
    }
}

/// Build the level filter for stderr output.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` drops to errors only and
/// each `-v` steps the level up from the configured default.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global tracing subscriber.
///
/// Returns the appender guard when a log file was configured; hold it until
/// process exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(path) = config.resolve_log_path() {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let file_layer = fmt::layer().json().with_writer(writer);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        Ok(None)
    }
}
