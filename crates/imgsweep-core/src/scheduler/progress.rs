//! Run events for console reporting.
//!
//! The scheduler and pipeline push these into an optional channel; the CLI
//! renders them. Nothing in the download path depends on a receiver existing.

use super::summary::RunSummary;
use super::task::DownloadTask;
use crate::fetch::DownloadOutcome;

/// Snapshot after a batch settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    /// 1-based index of the batch that just finished.
    pub batch: usize,
    /// Tasks settled so far, this batch included.
    pub processed: usize,
    /// Tasks in the whole run.
    pub total: usize,
}

impl BatchProgress {
    /// Fraction complete in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        (self.processed as f64 / self.total as f64).min(1.0)
    }
}

#[derive(Debug, Clone)]
pub enum RunEvent {
    /// Extraction finished; `found` unique URLs in `lines` input lines.
    Discovered { found: usize, lines: usize },
    /// One download settled (sent as soon as it does, not at the batch barrier).
    TaskFinished {
        task: DownloadTask,
        outcome: DownloadOutcome,
    },
    BatchCompleted(BatchProgress),
    Finished(RunSummary),
}

/// Bounded event channel. Sends wait for free capacity, so the receiver must
/// be drained concurrently with the run (e.g. from a spawned task); a receiver
/// read only after the run returns stalls it once the buffer is full.
pub type EventSender = tokio::sync::mpsc::Sender<RunEvent>;

/// Sends `event` if a receiver is attached, waiting while the channel is
/// full; a closed channel is ignored.
pub(crate) async fn emit(events: Option<&EventSender>, event: RunEvent) {
    if let Some(tx) = events {
        let _ = tx.send(event).await;
    }
}
