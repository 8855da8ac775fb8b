use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::io::layout_io::LoadError;
use crate::model::config::Config;

pub const CONFIG_FILE: &str = "rack.toml";

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<Config, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Walk up from `start` looking for `rack.toml`.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Resolve the effective config: an explicit path must exist, otherwise the
/// nearest `rack.toml` above `cwd` is used, otherwise defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config, LoadError> {
    let path = match explicit {
        Some(p) if !p.is_file() => return Err(LoadError::ConfigNotFound(p.to_path_buf())),
        Some(p) => Some(p.to_path_buf()),
        None => discover_config(cwd),
    };
    match path {
        Some(p) => {
            debug!(path = %p.display(), "loading config");
            read_config(&p)
        }
        None => Ok(Config::default()),
    }
}
