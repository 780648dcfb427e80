// src/source.rs
use std::{fs, path::{Path, PathBuf}};

use log::warn;
use walkdir::WalkDir;

use crate::config::options::SourceOptions;
use crate::error::{ConfigError, DocumentError};

/// Saved pages under `src.dir` with the configured extension, sorted by path.
/// Non-recursive unless `src.recursive`. Entries that vanish mid-walk are skipped.
pub fn enumerate(src: &SourceOptions) -> Result<Vec<PathBuf>, ConfigError> {
    if !src.dir.exists() {
        return Err(ConfigError::MissingSource(src.dir.clone()));
    }
    if !src.dir.is_dir() {
        return Err(ConfigError::SourceNotDir(src.dir.clone()));
    }

    let mut walk = WalkDir::new(&src.dir).min_depth(1).sort_by_file_name();
    if !src.recursive {
        walk = walk.max_depth(1);
    }

    let mut out = Vec::new();
    for entry in walk {
        let entry = match entry {
            Ok(e) => e,
            // The root itself failing means nothing can be listed.
            Err(e) if e.depth() == 0 => {
                return Err(ConfigError::Enumerate { path: src.dir.clone(), source: e });
            }
            Err(e) => {
                warn!("skipping unlistable entry: {e}");
                continue;
            }
        };
        if entry.file_type().is_file() && src.matches(entry.path()) {
            out.push(entry.into_path());
        }
    }
    out.sort();
    Ok(out)
}

/// Read a page as text. Invalid UTF-8 is replaced rather than rejected.
pub fn read_document(path: &Path) -> Result<String, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode(&bytes))
}

pub fn decode(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
