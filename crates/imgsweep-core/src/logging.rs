//! Tracing setup: append to a log file in the XDG state dir, or fall back to stderr.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,imgsweep=debug,imgsweep_core=debug";
const LOG_FILE: &str = "imgsweep.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log file location inside the prefixed state home (`$XDG_STATE_HOME/imgsweep/`).
fn log_path_in(dirs: &xdg::BaseDirectories) -> PathBuf {
    dirs.get_state_home().join(LOG_FILE)
}

/// Path of the run log, `~/.local/state/imgsweep/imgsweep.log` by default.
pub fn log_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("imgsweep")?;
    Ok(log_path_in(&dirs))
}

/// Installs the global subscriber writing to [`log_path`].
///
/// Returns `Err` when the state dir or file cannot be opened, or a subscriber
/// is already set, so the caller can use [`init_logging_stderr`] instead.
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log dir {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber: {}", e))?;

    tracing::info!("imgsweep logging to {}", path.display());
    Ok(())
}

/// Installs a stderr-only subscriber; a no-op if one is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
