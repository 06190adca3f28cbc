//! Tracing setup.
//!
//! The terminal is owned by the UI, so events are written to a file instead
//! of stdout.

use std::{fs::OpenOptions, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

pub fn init(config: &AppConfig) -> Result<()> {
    if config.log_file.trim().is_empty() {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "cashbook_tui={level},engine={level}",
            level = config.log_level
        )))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
