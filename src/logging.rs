//! File logging for the terminal runner.
//!
//! Stdout is the display surface, so log output only goes to a file, and only
//! when one is configured:
//!
//! - `MAZE_LOG_PATH`: file to append to (unset or empty disables logging)
//! - `MAZE_LOG`: `EnvFilter` directives (default: `info`)

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub path: Option<String>,
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: None,
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = lookup("MAZE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });
        let filter = lookup("MAZE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        Self { path, filter }
    }
}

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init(config: &LogConfig) -> Result<bool> {
    let Some(path) = config.path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(true)
}
