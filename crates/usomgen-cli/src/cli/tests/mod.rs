//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_run_defaults() {
    match parse(&["usomgen", "run"]) {
        CliCommand::Run { url, output_dir } => {
            assert!(url.is_none());
            assert!(output_dir.is_none());
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_overrides() {
    match parse(&[
        "usomgen",
        "run",
        "--url",
        "http://127.0.0.1:8080/list.txt",
        "--output-dir",
        "/tmp/lists",
    ]) {
        CliCommand::Run { url, output_dir } => {
            assert_eq!(url.as_deref(), Some("http://127.0.0.1:8080/list.txt"));
            assert_eq!(output_dir.as_deref(), Some(Path::new("/tmp/lists")));
        }
        _ => panic!("expected Run with overrides"),
    }
}

#[test]
fn cli_parse_classify() {
    match parse(&["usomgen", "classify", "url-list.txt"]) {
        CliCommand::Classify { path, output_dir } => {
            assert_eq!(path, Path::new("url-list.txt"));
            assert!(output_dir.is_none());
        }
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_classify_output_dir() {
    match parse(&["usomgen", "classify", "feed.txt", "--output-dir", "out"]) {
        CliCommand::Classify { output_dir, .. } => {
            assert_eq!(output_dir.as_deref(), Some(Path::new("out")));
        }
        _ => panic!("expected Classify with --output-dir"),
    }
}

#[test]
fn cli_parse_config() {
    assert!(matches!(parse(&["usomgen", "config"]), CliCommand::Config));
}

#[test]
fn cli_rejects_missing_classify_path() {
    assert!(Cli::try_parse_from(["usomgen", "classify"]).is_err());
}
