//! Run-level counters, folded from outcomes after each batch settles.

use crate::fetch::DownloadOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Unique URLs queued for download.
    pub found: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    /// Input lines read, blank ones included.
    pub lines: usize,
}

impl RunSummary {
    pub fn new(found: usize, lines: usize) -> Self {
        Self {
            found,
            lines,
            ..Self::default()
        }
    }

    /// Counts one outcome into exactly one of the three result counters.
    pub fn record(&mut self, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Success { .. } => self.succeeded += 1,
            DownloadOutcome::Failed { .. } => self.failed += 1,
            DownloadOutcome::Skipped { .. } => self.skipped += 1,
        }
    }

    /// Outcomes recorded so far.
    pub fn processed(&self) -> usize {
        self.succeeded + self.failed + self.skipped
    }
}
