//! CLI parse and override tests.


use super::{apply_overrides, parse_delimiter, Cli, CliCommand, InputArgs};
use clap::Parser;
use imgsweep_core::config::SweepConfig;
use std::path::{Path, PathBuf};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_run_defaults() {
    match parse(&["imgsweep", "run"]).command {
        CliCommand::Run {
            input,
            output,
            batch_size,
            timeout_secs,
        } => {
            assert_eq!(input, InputArgs::default());
            assert!(output.is_none());
            assert!(batch_size.is_none());
            assert!(timeout_secs.is_none());
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_all_flags() {
    let cli = parse(&[
        "imgsweep",
        "run",
        "--input",
        "/data/objects.tsv",
        "--output",
        "/data/images",
        "--delimiter",
        ",",
        "--batch-size",
        "8",
        "--timeout-secs",
        "30",
    ]);
    match cli.command {
        CliCommand::Run {
            input,
            output,
            batch_size,
            timeout_secs,
        } => {
            assert_eq!(input.input.as_deref(), Some(Path::new("/data/objects.tsv")));
            assert_eq!(input.delimiter, Some(','));
            assert_eq!(output.as_deref(), Some(Path::new("/data/images")));
            assert_eq!(batch_size, Some(8));
            assert_eq!(timeout_secs, Some(30));
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_scan_with_global_config() {
    let cli = parse(&["imgsweep", "scan", "--delimiter", "tab", "--config", "/etc/imgsweep.toml"]);
    assert_eq!(cli.config, Some(PathBuf::from("/etc/imgsweep.toml")));
    match cli.command {
        CliCommand::Scan { input } => assert_eq!(input.delimiter, Some('\t')),
        _ => panic!("expected Scan"),
    }
}

#[test]
fn cli_parse_config() {
    assert!(matches!(parse(&["imgsweep", "config"]).command, CliCommand::Config));
}

#[test]
fn cli_rejects_multi_char_delimiter() {
    assert!(Cli::try_parse_from(["imgsweep", "scan", "--delimiter", ";;"]).is_err());
}

#[test]
fn delimiter_parser() {
    assert_eq!(parse_delimiter("tab"), Ok('\t'));
    assert_eq!(parse_delimiter("\\t"), Ok('\t'));
    assert_eq!(parse_delimiter("\t"), Ok('\t'));
    assert_eq!(parse_delimiter("|"), Ok('|'));
    assert!(parse_delimiter("").is_err());
}

#[test]
fn overrides_replace_only_given_fields() {
    let mut cfg = SweepConfig::default();
    let cli = parse(&["imgsweep", "run", "--output", "out", "--batch-size", "2"]);
    apply_overrides(&cli.command, &mut cfg);
    assert_eq!(cfg.output_dir, PathBuf::from("out"));
    assert_eq!(cfg.batch_size, 2);
    assert_eq!(cfg.input_path, SweepConfig::default().input_path);
    assert_eq!(cfg.request_timeout_secs, 60);
    assert_eq!(cfg.delimiter, '\t');

    let mut cfg = SweepConfig::default();
    let cli = parse(&["imgsweep", "scan", "--input", "x.csv", "--delimiter", ","]);
    apply_overrides(&cli.command, &mut cfg);
    assert_eq!(cfg.input_path, PathBuf::from("x.csv"));
    assert_eq!(cfg.delimiter, ',');
}
