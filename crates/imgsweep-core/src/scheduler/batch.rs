//! Batch execution: fixed-size groups, each fully settled before the next starts.

use futures::future::join_all;

use super::progress::{emit, BatchProgress, EventSender, RunEvent};
use super::summary::RunSummary;
use super::task::DownloadTask;
use crate::fetch::{DownloadOutcome, Fetch};

/// Runs `tasks` through `fetcher` in consecutive groups of `batch_size`.
///
/// All fetches of a group are started together (in queue order) and awaited
/// as a unit; the next group starts only after every one of them settled.
/// Outcomes are folded into the returned summary after each barrier. Nothing
/// is retried and a failing task never stops the run.
pub async fn run_batches<F>(
    fetcher: &F,
    tasks: &[DownloadTask],
    batch_size: usize,
    lines: usize,
    events: Option<&EventSender>,
) -> RunSummary
where
    F: Fetch + ?Sized,
{
    let batch_size = batch_size.max(1);
    let total = tasks.len();
    let mut summary = RunSummary::new(total, lines);

    for (index, batch) in tasks.chunks(batch_size).enumerate() {
        tracing::debug!(batch = index + 1, size = batch.len(), "starting batch");
        let outcomes = join_all(batch.iter().map(|task| run_task(fetcher, task, events))).await;
        for outcome in &outcomes {
            summary.record(outcome);
        }

        let progress = BatchProgress {
            batch: index + 1,
            processed: summary.processed(),
            total,
        };
        tracing::info!(
            "progress: {}/{} URLs processed ({} ok, {} failed, {} skipped)",
            progress.processed,
            progress.total,
            summary.succeeded,
            summary.failed,
            summary.skipped
        );
        emit(events, RunEvent::BatchCompleted(progress)).await;
    }

    emit(events, RunEvent::Finished(summary)).await;
    summary
}

async fn run_task<F>(fetcher: &F, task: &DownloadTask, events: Option<&EventSender>) -> DownloadOutcome
where
    F: Fetch + ?Sized,
{
    let outcome = fetcher.fetch(&task.url, &task.dest).await;
    emit(
        events,
        RunEvent::TaskFinished {
            task: task.clone(),
            outcome: outcome.clone(),
        },
    )
    .await;
    outcome
}
