//! Console rendering of run events.

use imgsweep_core::fetch::DownloadOutcome;
use imgsweep_core::scheduler::{DownloadTask, RunEvent, RunSummary};

/// Lines to print for one event (empty when the event is silent).
pub fn render_event(event: &RunEvent) -> Vec<String> {
    match event {
        RunEvent::Discovered { found, lines } => {
            vec![format!("Found {} unique image URLs in {} lines", found, lines)]
        }
        RunEvent::TaskFinished { task, outcome } => render_outcome(task, outcome),
        RunEvent::BatchCompleted(p) => {
            vec![format!("Progress: {}/{} URLs processed", p.processed, p.total)]
        }
        RunEvent::Finished(summary) => render_summary(summary),
    }
}

fn render_outcome(task: &DownloadTask, outcome: &DownloadOutcome) -> Vec<String> {
    match outcome {
        DownloadOutcome::Success { bytes_written } => {
            let name = task
                .dest
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| task.dest.display().to_string());
            vec![format!("✓ Downloaded: {} ({} bytes)", name, bytes_written)]
        }
        DownloadOutcome::Failed { reason, detail } => {
            let mut out = vec![format!(
                "✗ Failed ({}): {} (line {})",
                reason, task.url, task.line
            )];
            if let Some(d) = detail {
                out.push(format!("  {}", d));
            }
            out
        }
        DownloadOutcome::Skipped { reason } => {
            vec![format!("- Skipped ({}): {}", reason, task.url)]
        }
    }
}

pub fn render_summary(summary: &RunSummary) -> Vec<String> {
    vec![
        String::new(),
        "----- DOWNLOAD SUMMARY -----".to_string(),
        format!("Total URLs found: {}", summary.found),
        format!("Successfully downloaded: {}", summary.succeeded),
        format!("Failed: {}", summary.failed),
        format!("Skipped: {}", summary.skipped),
        "----------------------------".to_string(),
    ]
}
