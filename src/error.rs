// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a single field fell back to its sentinel. Never leaves the assembler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("fragment not found")]
    Missing,
    #[error("malformed fragment: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot read document {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("cannot open destination {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write row to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("cannot flush {}: {source}", path.display())]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Problems that stop a batch before the first document is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("source directory does not exist: {}", .0.display())]
    MissingSource(PathBuf),
    #[error("source path is not a directory: {}", .0.display())]
    SourceNotDir(PathBuf),
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unusable destination: {0}")]
    Destination(#[source] SinkError),
    #[error("worker count must be at least 1")]
    ZeroWorkers,
    #[error("cannot list {}: {source}", path.display())]
    Enumerate {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}
