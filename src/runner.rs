// src/runner.rs
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{atomic::{AtomicUsize, Ordering}, mpsc, Arc},
    thread,
};

use log::{error, info, warn};

use crate::{
    config::options::BatchOptions,
    error::{ConfigError, DocumentError, Result},
    file,
    progress::Progress,
    record::AlbumRecord,
    sink::TabularSink,
    source,
    specs::album,
};

/// What a batch produced. Per-document failures are counted, never raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub out_path: PathBuf,
    pub documents: usize,
    pub written: usize,
    pub unreadable: usize,
    pub write_failures: usize,
}

/// Top-level runner: enumerate, open the destination, then process every page.
/// Only configuration problems abort, and only before the first document.
pub fn run(
    opts: &BatchOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if opts.workers == 0 {
        return Err(ConfigError::ZeroWorkers.into());
    }
    let paths = source::enumerate(&opts.source)?;
    let out = file::resolve_out_path(&opts.export)?;
    let mut sink = TabularSink::open(&out, &opts.export).map_err(ConfigError::Destination)?;

    info!(
        "{} document(s) in {} → {}",
        paths.len(),
        opts.source.dir.display(),
        out.display()
    );
    Ok(run_paths(&paths, &mut sink, opts.workers, progress))
}

/// Parse and write `paths` in order. With `workers > 1` parsing fans out to
/// threads; this thread stays the only writer and keeps input order.
pub fn run_paths(
    paths: &[PathBuf],
    sink: &mut TabularSink,
    workers: usize,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary {
    let mut summary = RunSummary {
        out_path: sink.path().to_path_buf(),
        documents: paths.len(),
        ..RunSummary::default()
    };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(paths.len());
    }

    let workers = workers.clamp(1, paths.len().max(1));
    if workers == 1 {
        for path in paths {
            let outcome = album::assemble_file(path);
            settle(path, outcome, sink, &mut summary, &mut progress);
        }
    } else {
        parse_parallel(paths, workers, |i, outcome| {
            settle(&paths[i], outcome, sink, &mut summary, &mut progress);
        });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    info!(
        "done: {} written, {} unreadable, {} write failures",
        summary.written, summary.unreadable, summary.write_failures
    );
    summary
}

type Parsed = (usize, std::result::Result<AlbumRecord, DocumentError>);

/// Fan parsing out to `workers` threads; hand results to `on_result` in index order.
fn parse_parallel(
    paths: &[PathBuf],
    workers: usize,
    mut on_result: impl FnMut(usize, std::result::Result<AlbumRecord, DocumentError>),
) {
    let paths_arc = Arc::new(paths.to_vec());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Parsed>();

    for _ in 0..workers {
        let paths = Arc::clone(&paths_arc);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= paths.len() {
                    break;
                }
                if tx.send((i, album::assemble_file(&paths[i]))).is_err() {
                    break;
                }
            }
        });
    }
    drop(res_tx); // this thread is the sole receiver now

    let mut pending = BTreeMap::new();
    let mut next = 0usize;
    for (i, outcome) in res_rx {
        pending.insert(i, outcome);
        while let Some(outcome) = pending.remove(&next) {
            on_result(next, outcome);
            next += 1;
        }
    }

    // Only reachable with gaps if a worker died mid-document.
    if next < paths.len() {
        error!("{} document(s) lost to a failed worker", paths.len() - next - pending.len());
    }
    for (i, outcome) in pending {
        on_result(i, outcome);
    }
}

fn settle<P: Progress + ?Sized>(
    path: &Path,
    outcome: std::result::Result<AlbumRecord, DocumentError>,
    sink: &mut TabularSink,
    summary: &mut RunSummary,
    progress: &mut Option<&mut P>,
) {
    let status = match outcome {
        Ok(record) => match sink.append(&record) {
            Ok(()) => {
                summary.written += 1;
                info!("{}: {} - {}", path.display(), record.artist(), record.album());
                None
            }
            Err(e) => {
                summary.write_failures += 1;
                error!("{}: row lost: {e}", path.display());
                Some(format!("{}: row lost: {e}", path.display()))
            }
        },
        Err(e) => {
            summary.unreadable += 1;
            warn!("skipping: {e}");
            Some(format!("skipped: {e}"))
        }
    };

    if let Some(p) = progress.as_deref_mut() {
        if let Some(msg) = status {
            p.log(&msg);
        }
        p.item_done(path);
    }
}
