//! `imgsweep scan` – list unique image URLs without downloading.

use anyhow::Result;
use imgsweep_core::config::SweepConfig;
use imgsweep_core::pipeline;
use imgsweep_core::url_model;

pub async fn run_scan(cfg: &SweepConfig) -> Result<()> {
    let extraction = pipeline::scan(cfg).await?;
    if !extraction.candidates.is_empty() {
        println!("{:<6} {:<32} {}", "LINE", "FILENAME", "URL");
    }
    for c in &extraction.candidates {
        println!(
            "{:<6} {:<32} {}",
            c.line,
            url_model::derive_filename(&c.url),
            c.url
        );
    }
    println!(
        "Found {} unique image URLs in {} lines",
        extraction.candidates.len(),
        extraction.lines
    );
    Ok(())
}
