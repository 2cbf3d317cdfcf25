use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::model::config::LogConfig;

const DEFAULT_FILTER: &str = "todo=info,todolist=info";

/// Error type for log setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not install log subscriber: {0}")]
    InitError(#[from] tracing_subscriber::util::TryInitError),
}

/// Pick the filter directive: `RUST_LOG`, then config, then the default
pub fn filter_directive(config: &LogConfig, env: Option<String>) -> String {
    env.filter(|s| !s.trim().is_empty())
        .or_else(|| config.filter.clone())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install a file-backed tracing subscriber.
///
/// The terminal belongs to the UI, so nothing is installed when no log file
/// is configured. Returns whether a subscriber was installed.
pub fn init_logging(config: &LogConfig) -> Result<bool, LogError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::OpenError {
            path: path.clone(),
            source: e,
        })?;

    let directive = filter_directive(config, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;
    Ok(true)
}
