use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::layout::Layout;

/// Error type for loading and saving files
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse layout: {0}")]
    LayoutParseError(#[from] serde_json::Error),
    #[error("could not parse rack.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
    #[error("config file not found: {0}")]
    ConfigNotFound(PathBuf),
    #[error("io error: {0}")]
    IoError(#[from] io::Error),
}

/// Read a JSON layout file.
pub fn read_layout(path: &Path) -> Result<Layout, LoadError> {
    let text = fs::read_to_string(path).map_err(|e| LoadError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_layout(&text)
}

pub fn parse_layout(text: &str) -> Result<Layout, LoadError> {
    Ok(serde_json::from_str(text)?)
}

/// Pretty-printed JSON with a trailing newline
pub fn layout_to_json(layout: &Layout) -> Result<String, LoadError> {
    let mut json = serde_json::to_string_pretty(layout)?;
    json.push('\n');
    Ok(json)
}

/// Write a layout as JSON, replacing `path` atomically.
pub fn write_layout(path: &Path, layout: &Layout) -> Result<(), LoadError> {
    let json = layout_to_json(layout)?;
    atomic_write(path, json.as_bytes())?;
    Ok(())
}

/// Write to a temp file in the same directory, then rename over `path`.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
