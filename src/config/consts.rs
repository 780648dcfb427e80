// src/config/consts.rs

// Source
pub const DEFAULT_EXTENSION: &str = "html";

// Export
pub const DEFAULT_OUT_FILE: &str = "Popular All Time Sample.csv";

// Field grammars
pub const LIST_SEP: char = ':';
pub const LINK_CLOSE: &str = "</a";
pub const DURATION_LABEL: &str = "Total length:";
pub const DURATION_TRAILER: &str = "</span";
pub const MAX_RATING: f64 = 5.0;

// Concurrency
pub const DEFAULT_WORKERS: usize = 1;
