//! Logging setup for duyguctl
//!
//! The TUI owns the terminal, so it logs to a file resolved by
//! `DuyguConfig::log_path`. One-shot commands log to stderr.
//! DUYGU_LOG takes precedence over `[logging] level`.

use anyhow::{Context, Result};
use duygu_common::DuyguConfig;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Env var holding an EnvFilter directive
pub const LOG_ENV: &str = "DUYGU_LOG";

/// Default directive for stderr logging, keeps one-shot output clean
const STDERR_DEFAULT_LEVEL: &str = "warn";

fn filter_from(directive: Option<String>, fallback: &str) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_new(fallback).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Log to file for the TUI. Returns the log path, None when no path resolves.
pub fn init_file_logging(config: &DuyguConfig) -> Result<Option<PathBuf>> {
    let Some(path) = config.log_path() else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_from(std::env::var(LOG_ENV).ok(), &config.logging.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(Some(path))
}

/// File logging for the TUI that never stops the form.
/// On failure the warning goes to `err` and the TUI runs without a subscriber.
pub fn init_tui_logging<E: Write>(config: &DuyguConfig, err: &mut E) -> Option<PathBuf> {
    match init_file_logging(config) {
        Ok(path) => path,
        Err(e) => {
            let _ = writeln!(err, "Warning: logging disabled: {:#}", e);
            None
        }
    }
}

/// Log to stderr for one-shot commands
pub fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter_from(std::env::var(LOG_ENV).ok(), STDERR_DEFAULT_LEVEL))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
