//! Log file setup
//
// The terminal belongs to the UI, so events only go to a file:
// `~/.birthday-tui/logs/<timestamp>.log`. `RUST_LOG` overrides the default
// `info` filter. Keep the returned guard alive until exit so buffered lines
// are flushed.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// File name for a session started now
pub fn log_file_name() -> String {
    format!("{}.log", Local::now().format("%Y-%m-%d_%H-%M-%S"))
}

/// Install the global subscriber writing to a new file under `logs_dir`
pub fn init(logs_dir: &Path) -> Result<(WorkerGuard, PathBuf)> {
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("failed to create log directory {}", logs_dir.display()))?;
    let log_path = logs_dir.join(log_file_name());

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok((guard, log_path))
}
