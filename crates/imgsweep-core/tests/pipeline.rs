//! End-to-end: input file → extraction → unique destinations → batched downloads.

mod common;

use common::image_server::{self, Route};
use imgsweep_core::config::SweepConfig;
use imgsweep_core::fetch::FailureReason;
use imgsweep_core::pipeline;
use imgsweep_core::scheduler::{RunEvent, RunSummary};
use imgsweep_core::RunError;
use std::path::Path;
use tempfile::tempdir;

fn config(input: &Path, output: &Path) -> SweepConfig {
    SweepConfig {
        input_path: input.to_path_buf(),
        output_dir: output.to_path_buf(),
        request_timeout_secs: 5,
        ..SweepConfig::default()
    }
}

#[tokio::test]
async fn duplicate_url_across_lines_downloads_once() {
    let server = image_server::start(vec![("/a.jpg", Route::ok(b"jpeg-bytes".to_vec()))]);
    let work = tempdir().unwrap();
    let input = work.path().join("objects.tsv");
    let url = server.url("/a.jpg");
    std::fs::write(&input, format!("foo {url}\tbar\nbaz {url}\tqux\n")).unwrap();
    let output = work.path().join("images");

    let summary = pipeline::run(&config(&input, &output), None).await.unwrap();

    assert_eq!(
        summary,
        RunSummary {
            found: 1,
            succeeded: 1,
            failed: 0,
            skipped: 0,
            lines: 2,
        }
    );
    assert_eq!(server.hit_count("/a.jpg"), 1);
    assert_eq!(std::fs::read(output.join("a.jpg")).unwrap(), b"jpeg-bytes");
}

#[tokio::test]
async fn shared_basenames_get_distinct_files() {
    let server = image_server::start(vec![
        ("/x/photo.jpg", Route::ok(b"first".to_vec())),
        ("/y/photo.jpg", Route::ok(b"second".to_vec())),
    ]);
    let work = tempdir().unwrap();
    let input = work.path().join("objects.tsv");
    std::fs::write(
        &input,
        format!(
            "1\t{}\n2\t\"{}\"\n",
            server.url("/x/photo.jpg"),
            server.url("/y/photo.jpg")
        ),
    )
    .unwrap();
    let output = work.path().join("images");
    std::fs::create_dir_all(&output).unwrap();
    std::fs::write(output.join("photo.jpg"), b"from an earlier run").unwrap();

    let summary = pipeline::run(&config(&input, &output), None).await.unwrap();

    assert_eq!(summary.succeeded, 2);
    assert_eq!(
        std::fs::read(output.join("photo.jpg")).unwrap(),
        b"from an earlier run"
    );
    assert_eq!(std::fs::read(output.join("photo_1.jpg")).unwrap(), b"first");
    assert_eq!(std::fs::read(output.join("photo_2.jpg")).unwrap(), b"second");
}

#[tokio::test]
async fn mixed_outcomes_are_counted_and_reported() {
    let mut routes = vec![
        ("/empty.jpg", Route::ok(Vec::new())),
        ("/missing.jpg", Route::status(404)),
        ("/moved.jpg", Route::redirect(301, "/p0.jpg")),
    ];
    let ok_paths: Vec<String> = (0..9).map(|i| format!("/p{}.jpg", i)).collect();
    for p in &ok_paths {
        routes.push((p.as_str(), Route::ok(p.as_bytes().to_vec())));
    }
    let server = image_server::start(routes);

    let work = tempdir().unwrap();
    let input = work.path().join("objects.tsv");
    let mut lines = vec![
        "id\ttitle\timage".to_string(),
        format!("1\tempty\t{}", server.url("/empty.jpg")),
        format!("2\tmissing\t{}", server.url("/missing.jpg")),
        "3\twiki\thttps://commons.wikimedia.org/wiki/File:Boat.jpg".to_string(),
        String::new(),
    ];
    for (i, p) in ok_paths.iter().enumerate().skip(1) {
        lines.push(format!("{}\tok\t{}", i + 3, server.url(p)));
    }
    lines.push(format!("99\tmoved\t{}", server.url("/moved.jpg")));
    std::fs::write(&input, lines.join("\n")).unwrap();
    let output = work.path().join("out");

    let (tx, mut rx) = tokio::sync::mpsc::channel(128);
    let summary = pipeline::run(&config(&input, &output), Some(&tx)).await.unwrap();
    drop(tx);

    // 3 problem URLs + 8 direct images + 1 redirect = 12 tasks → batches 5, 5, 2.
    assert_eq!(summary.found, 12);
    assert_eq!(summary.succeeded, 9);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.lines, lines.len());
    assert_eq!(
        std::fs::read(output.join("moved.jpg")).unwrap(),
        b"/p0.jpg".to_vec()
    );
    assert!(!output.join("empty.jpg").exists());
    assert!(!output.join("missing.jpg").exists());

    let mut discovered = None;
    let mut progress = Vec::new();
    let mut reasons = Vec::new();
    let mut finished = None;
    while let Some(ev) = rx.recv().await {
        match ev {
            RunEvent::Discovered { found, lines } => discovered = Some((found, lines)),
            RunEvent::TaskFinished { outcome, .. } => {
                if let Some(r) = outcome.failure_reason() {
                    reasons.push(r);
                }
            }
            RunEvent::BatchCompleted(p) => progress.push(p.processed),
            RunEvent::Finished(s) => finished = Some(s),
        }
    }
    assert_eq!(discovered, Some((12, lines.len())));
    assert_eq!(progress, vec![5, 10, 12]);
    reasons.sort_by_key(|r| r.to_string());
    assert_eq!(reasons, vec![FailureReason::Http(404), FailureReason::EmptyFile]);
    assert_eq!(finished, Some(summary));
}

#[tokio::test]
async fn missing_input_aborts_before_any_work() {
    let work = tempdir().unwrap();
    let input = work.path().join("absent.tsv");
    let output = work.path().join("images");

    let err = pipeline::run(&config(&input, &output), None)
        .await
        .unwrap_err();

    assert!(matches!(err, RunError::InputMissing(ref p) if p == &input));
    assert!(!output.exists());
}

#[tokio::test]
async fn input_without_urls_reports_zero_found() {
    let work = tempdir().unwrap();
    let input = work.path().join("plain.tsv");
    std::fs::write(&input, "a\tb\n\nc\td\n").unwrap();
    let output = work.path().join("images");

    let summary = pipeline::run(&config(&input, &output), None).await.unwrap();

    assert_eq!(summary, RunSummary::new(0, 3));
    assert!(output.is_dir());
}
