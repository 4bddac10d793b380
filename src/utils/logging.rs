//! Tracing subscriber setup
//!
//! Logs go to two places: a plain-text file in the log directory that records
//! everything from debug up, and the console at info and up.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::LoggingConfig;

/// Build a filter that applies `level` to this crate and keeps dependencies
/// at warn
pub fn crate_filter(level: &str) -> Result<EnvFilter> {
    let directive = format!("{}={level},warn", env!("CARGO_CRATE_NAME"));
    EnvFilter::try_new(&directive).with_context(|| format!("Invalid log level: {level}"))
}

/// Install the global subscriber; returns the log file path
///
/// `verbose` lowers the console level to debug.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<PathBuf> {
    fs::create_dir_all(&config.log_dir).with_context(|| {
        format!("Failed to create log directory: {}", config.log_dir.display())
    })?;

    let path = config.log_dir.join(&config.file_name);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let console_level = if verbose {
        "debug"
    } else {
        config.console_level.as_str()
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(crate_filter(console_level)?);

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_filter(crate_filter(&config.file_level)?);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(path)
}
