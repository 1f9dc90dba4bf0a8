//! Where restcheck keeps its files, and the assets compiled into it.
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "restcheck";
const CONFIG_FILE: &str = "restcheck.yml";
const LOG_FILE: &str = "restcheck.log";

static DEFAULT_DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    dirs::data_local_dir()
        .map(|p| p.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("~/.local/share/restcheck"))
});

static DEFAULT_CONFIG_DIR: Lazy<PathBuf> = Lazy::new(|| {
    dirs::config_dir()
        .map(|p| p.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("~/.config/restcheck"))
});

/// `$<xdg_var>/restcheck` when the variable is set, else `fallback`.
fn xdg_dir(xdg_var: &str, fallback: &Path) -> PathBuf {
    match std::env::var(xdg_var) {
        Ok(base) if !base.is_empty() => PathBuf::from(base).join(APP_DIR),
        _ => fallback.to_path_buf(),
    }
}

pub fn get_config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", &DEFAULT_CONFIG_DIR)
}

/// Config file used when none is given on the command line.
pub fn default_config_path() -> PathBuf {
    get_config_dir().join(CONFIG_FILE)
}

/// Data directory, created on first use.
pub fn get_data_dir() -> std::io::Result<PathBuf> {
    let path = xdg_dir("XDG_DATA_HOME", &DEFAULT_DATA_DIR);
    std::fs::create_dir_all(&path)?;
    Ok(path)
}

/// Log file inside the data directory.
pub fn get_log_file() -> std::io::Result<PathBuf> {
    Ok(get_data_dir()?.join(LOG_FILE))
}

pub fn get_default_config() -> String {
    include_str!("../data/config.yml").to_string()
}

/// JSON schema published for the `GET /books` listing.
pub fn get_books_schema() -> &'static str {
    include_str!("../data/books-schema.json")
}
