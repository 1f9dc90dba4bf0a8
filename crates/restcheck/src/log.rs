//! File logging for verbose runs.
use anyhow::Context;
use restcheck_core::get_log_file;
use std::fs::OpenOptions;
use std::io::{ErrorKind, LineWriter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::OffsetTime;

const MAX_LOG_BYTES: u64 = 100 * 1024;
const DEFAULT_FILTER: &str = "restcheck=debug,restcheck_core=debug";
/// Replaces the default filter, e.g. `RESTCHECK_LOG=restcheck_core=trace`.
const FILTER_ENV: &str = "RESTCHECK_LOG";

/// Sends scenario and HTTP logs to `<data_dir>/restcheck.log` and returns
/// that path.
///
/// A log above 100KB is moved to `restcheck.log.old` first.
pub fn setup_logging() -> anyhow::Result<PathBuf> {
    let log_path = get_log_file().context("Failed to get data directory")?;
    rotate_if_large(&log_path, MAX_LOG_BYTES).context("Failed to rotate log file")?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open {}", log_path.display()))?;

    // Flush after every line
    let writer = Mutex::new(LineWriter::new(log_file));

    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(writer)
        .with_ansi(false)
        .with_timer(OffsetTime::local_rfc_3339()?)
        .init();
    Ok(log_path)
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Moves `path` to `<path>.old` once it is larger than `limit` bytes,
/// replacing an earlier backup. Returns whether the file was moved.
fn rotate_if_large(path: &Path, limit: u64) -> std::io::Result<bool> {
    let len = match std::fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= limit {
        return Ok(false);
    }

    let mut backup = path.as_os_str().to_owned();
    backup.push(".old");
    let backup = PathBuf::from(backup);
    if backup.exists() {
        std::fs::remove_file(&backup)?;
    }
    std::fs::rename(path, &backup)?;
    Ok(true)
}
