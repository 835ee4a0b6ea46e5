//! `imgsweep run` – extract URLs and download them in batches.

use anyhow::{Context, Result};
use imgsweep_core::config::SweepConfig;
use imgsweep_core::pipeline;
use imgsweep_core::scheduler::RunEvent;
use std::io::Write;

use super::report::render_event;

pub async fn run_pipeline(cfg: &SweepConfig) -> Result<()> {
    run_pipeline_to(cfg, std::io::stdout()).await
}

/// Runs the pipeline and writes the console report to `out`.
///
/// Events are rendered by a spawned printer while the downloads run. A fatal
/// error returns before the completion line, so no summary block is written.
pub async fn run_pipeline_to<W>(cfg: &SweepConfig, mut out: W) -> Result<()>
where
    W: Write + Send + 'static,
{
    writeln!(out, "Processing input file: {}", cfg.input_path.display())?;

    let (events_tx, mut events_rx) = tokio::sync::mpsc::channel::<RunEvent>(64);
    let printer = tokio::spawn(async move {
        while let Some(event) = events_rx.recv().await {
            for line in render_event(&event) {
                let _ = writeln!(out, "{}", line);
            }
        }
        let _ = out.flush();
        out
    });

    let result = pipeline::run(cfg, Some(&events_tx)).await;
    drop(events_tx);
    let mut out = printer.await.context("report printer panicked")?;

    let summary = result.with_context(|| format!("run aborted for {}", cfg.input_path.display()))?;
    tracing::info!(
        "run finished: {} found, {} downloaded, {} failed, {} skipped",
        summary.found,
        summary.succeeded,
        summary.failed,
        summary.skipped
    );
    writeln!(out, "Completed image download process")?;
    out.flush()?;
    Ok(())
}
