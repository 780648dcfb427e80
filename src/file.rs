// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::error::ConfigError;

/// Final destination for `export`: a directory hint gets the default file name.
/// Parent directories are created; nothing is opened yet.
pub fn resolve_out_path(export: &ExportOptions) -> Result<PathBuf, ConfigError> {
    let raw = export.out_path.to_string_lossy();
    if raw.is_empty() {
        return Ok(PathBuf::from(export.default_file_name()));
    }
    let p = PathBuf::from(normalize_separators(&raw));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        return Ok(p.join(export.default_file_name()));
    }
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(p)
}

/// `/` becomes `\` on Windows. Elsewhere a backslash is a legal file name
/// character and the path is left alone.
pub fn normalize_separators(p: &str) -> String {
    if cfg!(windows) {
        p.replace('/', "\\")
    } else {
        s!(p)
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), ConfigError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ConfigError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || (cfg!(windows) && s.ends_with('\\'))
}
