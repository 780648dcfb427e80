// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod fields;
pub mod specs;

pub mod file;
pub mod progress;
pub mod record;
pub mod runner;
pub mod sink;
pub mod source;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use record::AlbumRecord;
pub use sink::TabularSink;
pub use specs::album::{assemble, assemble_file};
