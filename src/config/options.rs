// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    pub source: SourceOptions,
    pub export: ExportOptions,
    pub workers: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self::new(".", DEFAULT_OUT_FILE)
    }
}

impl BatchOptions {
    pub fn new(source_dir: impl Into<PathBuf>, out_path: impl Into<PathBuf>) -> Self {
        Self {
            source: SourceOptions { dir: source_dir.into(), ..SourceOptions::default() },
            export: ExportOptions { out_path: out_path.into(), ..ExportOptions::default() },
            workers: DEFAULT_WORKERS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub dir: PathBuf,
    /// Matched case-insensitively, without the leading dot.
    pub extension: String,
    pub recursive: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            extension: s!(DEFAULT_EXTENSION),
            recursive: false,
        }
    }
}

impl SourceOptions {
    pub fn matches(&self, path: &Path) -> bool {
        let want = self.extension.trim_start_matches('.');
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(want))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// File, or directory hint (existing dir / trailing separator).
    pub out_path: PathBuf,
    /// Only honoured when the destination starts out empty.
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            include_headers: false,
        }
    }
}

impl ExportOptions {
    /// Default file name for directory hints, with the extension following the format.
    pub fn default_file_name(&self) -> String {
        let stem = Path::new(DEFAULT_OUT_FILE)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        join!(stem, ".", self.format.ext())
    }
}
