// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::{debug, info, warn, LevelFilter};

use crate::config::consts::{DEFAULT_EXTENSION, DEFAULT_OUT_FILE, DEFAULT_WORKERS};
use crate::config::options::{BatchOptions, ExportFormat, ExportOptions, SourceOptions};
use crate::progress::Progress;
use crate::runner::{self, RunSummary};

/// Extract album metadata from saved album pages and append it to a CSV/TSV file.
#[derive(Debug, Parser)]
#[command(name = "rym_scrape", version, about)]
pub struct Args {
    /// Directory holding the saved pages
    #[arg(default_value = ".", env = "RYM_SCRAPE_SOURCE")]
    pub source: PathBuf,

    /// Output file, or a directory to place the default file in
    #[arg(short, long, default_value = DEFAULT_OUT_FILE, env = "RYM_SCRAPE_OUT")]
    pub out: PathBuf,

    /// Extension of the saved pages
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Write a header row when the output starts out empty
    #[arg(long)]
    pub include_headers: bool,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Parser threads; rows are still written by one writer, in input order
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// More logging (debug)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Less logging (warnings and errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match (self.verbose, self.quiet) {
            (true, _) => LevelFilter::Debug,
            (_, true) => LevelFilter::Warn,
            _ => LevelFilter::Info,
        }
    }

    pub fn to_options(&self) -> BatchOptions {
        BatchOptions {
            source: SourceOptions {
                dir: self.source.clone(),
                extension: self.ext.clone(),
                recursive: self.recursive,
            },
            export: ExportOptions {
                format: match self.format {
                    Format::Csv => ExportFormat::Csv,
                    Format::Tsv => ExportFormat::Tsv,
                },
                out_path: self.out.clone(),
                include_headers: self.include_headers,
            },
            workers: self.workers,
        }
    }
}

/// Progress as log lines.
#[derive(Default)]
struct LogProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        if total == 0 {
            warn!("no matching documents found");
        }
    }
    // The runner already logs failures; only count here.
    fn log(&mut self, _msg: &str) {
        self.failed += 1;
    }
    fn item_done(&mut self, path: &Path) {
        self.done += 1;
        debug!("[{}/{}] {}", self.done, self.total, path.display());
    }
    fn finish(&mut self) {
        if self.failed > 0 {
            warn!("{} of {} document(s) had problems", self.failed, self.total);
        }
    }
}

pub fn run(args: &Args) -> crate::Result<RunSummary> {
    let opts = args.to_options();
    let mut progress = LogProgress::default();
    let summary = runner::run(&opts, Some(&mut progress))?;
    info!("wrote {}", summary.out_path.display());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_batch_defaults() {
        // Positional and flag values outrank the env fallbacks.
        let args = Args::parse_from(["rym_scrape", ".", "-o", DEFAULT_OUT_FILE]);
        assert_eq!(args.to_options(), BatchOptions::default());
        assert_eq!(args.log_level(), LevelFilter::Info);
    }

    #[test]
    fn flags_map_to_options() {
        let args = Args::parse_from([
            "rym_scrape", "pages", "-o", "out/", "--ext", "htm", "--format", "tsv",
            "--include-headers", "-r", "-w", "4", "-v",
        ]);
        let opts = args.to_options();
        assert_eq!(opts.source.dir, PathBuf::from("pages"));
        assert_eq!(opts.source.extension, "htm");
        assert!(opts.source.recursive);
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert_eq!(opts.export.out_path, PathBuf::from("out/"));
        assert!(opts.export.include_headers);
        assert_eq!(opts.workers, 4);
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["rym_scrape", "-v", "-q"]).is_err());
    }
}
