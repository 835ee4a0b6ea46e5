//! End-to-end run: scan input → resolve destinations → batched downloads.

use crate::config::SweepConfig;
use crate::error::{Result, RunError};
use crate::extract::Extraction;
use crate::fetch::{Fetch, FetchOptions, Fetcher};
use crate::scheduler::{self, emit, DownloadTask, EventSender, RunEvent, RunSummary};
use crate::source;
use crate::url_model::FilenameResolver;

/// Scans the configured input file without downloading anything.
pub async fn scan(cfg: &SweepConfig) -> Result<Extraction> {
    source::scan_file(&cfg.input_path, cfg.delimiter).await
}

/// Runs the whole pipeline with the default HTTP fetcher.
///
/// When `events` is given, its receiver must be drained while this future
/// runs; see [`EventSender`].
pub async fn run(cfg: &SweepConfig, events: Option<&EventSender>) -> Result<RunSummary> {
    let fetcher = Fetcher::new(FetchOptions::from(cfg))?;
    run_with_fetcher(cfg, &fetcher, events).await
}

/// Runs the whole pipeline with a caller-supplied fetcher.
///
/// Fails only when the input cannot be read or the output directory cannot
/// be created; both happen before the first download.
pub async fn run_with_fetcher<F>(
    cfg: &SweepConfig,
    fetcher: &F,
    events: Option<&EventSender>,
) -> Result<RunSummary>
where
    F: Fetch + ?Sized,
{
    let extraction = scan(cfg).await?;
    tracing::info!(
        "found {} unique image URLs in {} lines of {}",
        extraction.candidates.len(),
        extraction.lines,
        cfg.input_path.display()
    );
    emit(
        events,
        RunEvent::Discovered {
            found: extraction.candidates.len(),
            lines: extraction.lines,
        },
    )
    .await;

    let tasks = prepare_tasks(cfg, extraction.candidates).await?;
    let summary = scheduler::run_batches(
        fetcher,
        &tasks,
        cfg.effective_batch_size(),
        extraction.lines,
        events,
    )
    .await;

    tracing::info!(
        found = summary.found,
        succeeded = summary.succeeded,
        failed = summary.failed,
        skipped = summary.skipped,
        "run complete"
    );
    Ok(summary)
}

/// Creates the output directory and assigns every candidate its path, in
/// queue order, before any download starts.
async fn prepare_tasks(
    cfg: &SweepConfig,
    candidates: Vec<crate::extract::Candidate>,
) -> Result<Vec<DownloadTask>> {
    if !cfg.output_dir.exists() {
        tokio::fs::create_dir_all(&cfg.output_dir)
            .await
            .map_err(|source| RunError::OutputDir {
                path: cfg.output_dir.clone(),
                source,
            })?;
        tracing::info!("created output directory {}", cfg.output_dir.display());
    }
    let mut resolver = FilenameResolver::new(&cfg.output_dir);
    Ok(scheduler::plan_tasks(candidates, &mut resolver))
}
