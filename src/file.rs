// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::consts::JSON_INDENT;
use crate::error::{Result, ScrapeError};

/// Serialize `value` as UTF-8 JSON with 4-space indentation and write it to
/// `path`, creating parent directories. Returns the number of bytes written.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<u64> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value
        .serialize(&mut ser)
        .map_err(|source| ScrapeError::Json { path: path.to_path_buf(), source })?;

    fs::write(path, &buf).map_err(|e| ScrapeError::io(path, e))?;
    file_size(path)
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| ScrapeError::Json { path: path.to_path_buf(), source })
}

pub fn file_size(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| ScrapeError::io(path, e))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::io(
            dir,
            std::io::Error::other("path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ScrapeError::io(dir, e))?;
    }
    Ok(())
}

/// `-o some/dir/` means "default file name inside that directory".
pub fn resolve_out_path(user_o: &str, default_filename: &str) -> PathBuf {
    if user_o.is_empty() {
        return PathBuf::from(default_filename);
    }
    let p = PathBuf::from(user_o);
    if looks_like_dir_hint(&p) || p.is_dir() {
        p.join(default_filename)
    } else {
        p
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
