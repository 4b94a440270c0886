//! Logging init for the host process: file under the XDG state dir, or
//! stderr when no file can be opened.

use anyhow::Result;
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,ppx=debug"))
}

/// Initialize structured logging to `~/.local/state/ppx/ppx.log`.
///
/// Returns Err when the state dir is unusable so the host can fall back to
/// [`init_stderr`] without crashing.
pub fn init_file() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ppx")?;
    let log_dir = xdg_dirs.get_state_home();

    fs::create_dir_all(&log_dir)?;
    let log_file_path = log_dir.join("ppx.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("logging initialized at {}", log_file_path.display());
    Ok(())
}

/// Stderr-only logging, for hosts without a writable state dir.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
