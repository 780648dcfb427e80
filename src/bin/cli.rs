// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use rym_scrape::cli::{self, Args};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let summary = cli::run(&args).wrap_err("batch could not start")?;
    println!(
        "{} of {} document(s) written to {} ({} unreadable, {} write failures)",
        summary.written,
        summary.documents,
        summary.out_path.display(),
        summary.unreadable,
        summary.write_failures,
    );
    Ok(())
}
