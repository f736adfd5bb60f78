//! Integration tests for the wordprobe CLI
//!
//! These tests run the actual binary against temp-dir workspaces to verify:
//! - The text report matches the fixed block format exactly
//! - JSON output is valid and carries the same data
//! - Unreadable files are skipped without failing the run
//! - The tokens subcommand dumps the normalized token stream
//!
//! Each test uses its own isolated temp directory.

use std::fs;
use std::path::Path;
use std::process::Command;

fn wordprobe_bin() -> &'static str {
    env!("CARGO_BIN_EXE_wordprobe")
}

/// Run wordprobe in `dir` and return (exit_code, stdout, stderr)
fn run_in(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(wordprobe_bin())
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to execute wordprobe binary");

    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn workspace_with(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("failed to write fixture");
    }
    dir
}

#[test]
fn text_report_matches_block_format_exactly() {
    let dir = workspace_with(&[("one.txt", "b a c"), ("two.txt", "the cat, the")]);

    let (code, stdout, stderr) = run_in(dir.path(), &["analyze", "one.txt", "two.txt"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "wordprobe\n\
         one.txt\n\
         Maximum number of probes: 2\n\
         Average number of probes: 1.7\n\
         a 1 (1)\n\
         b 1 (0)\n\
         c 1 (1)\n\
         --------------------\n\
         two.txt\n\
         Maximum number of probes: 2\n\
         Average number of probes: 1.5\n\
         cat 1 (1)\n\
         the 2 (0)\n\
         --------------------\n"
    );
}

#[test]
fn bare_file_args_default_to_analyze() {
    let dir = workspace_with(&[("one.txt", "hello hello world")]);

    let (code, stdout, stderr) = run_in(dir.path(), &["one.txt"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.starts_with("wordprobe\none.txt\n"));
    assert!(stdout.contains("hello 2 (0)\n"));
    assert!(stdout.contains("world 1 (1)\n"));
}

#[test]
fn empty_file_reports_zero_probes() {
    let dir = workspace_with(&[("blank.txt", "")]);

    let (code, stdout, _) = run_in(dir.path(), &["analyze", "blank.txt"]);
    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "wordprobe\n\
         blank.txt\n\
         Maximum number of probes: 0\n\
         Average number of probes: 0.0\n\
         --------------------\n"
    );
}

#[test]
fn list_file_drives_the_run_and_missing_files_are_skipped() {
    let dir = workspace_with(&[
        ("good.txt", "alpha beta alpha"),
        ("input.txt", "good.txt\n\nmissing.txt\n"),
    ]);

    let (code, stdout, stderr) = run_in(dir.path(), &["analyze", "--list", "input.txt"]);
    // A skipped file must not fail the run.
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("good.txt\n"));
    assert!(stdout.contains("alpha 2 (0)\n"));
    assert!(!stdout.contains("missing.txt"));
}

#[test]
fn missing_list_file_is_an_error() {
    let dir = workspace_with(&[]);

    let (code, _, stderr) = run_in(dir.path(), &["analyze", "--list", "nope.txt"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("nope.txt"));
}

#[test]
fn json_report_is_valid_and_complete() {
    let dir = workspace_with(&[("one.txt", "b a c b")]);

    let (code, stdout, stderr) = run_in(
        dir.path(),
        &["analyze", "one.txt", "missing.txt", "--format", "json"],
    );
    assert_eq!(code, 0, "stderr: {stderr}");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["ident"], "wordprobe");
    assert_eq!(parsed["skipped"][0], "missing.txt");

    let file = &parsed["files"][0];
    assert_eq!(file["file"], "one.txt");
    assert_eq!(file["probes"]["max"], 2);
    let words = file["words"].as_array().expect("words array");
    assert_eq!(words.len(), 3);
    assert_eq!(words[0]["word"], "a");
    assert_eq!(words[1]["word"], "b");
    assert_eq!(words[1]["frequency"], 2);
    assert_eq!(words[1]["depth"], 0);
}

#[test]
fn output_flag_writes_report_file() {
    let dir = workspace_with(&[("one.txt", "solo")]);

    let (code, stdout, stderr) = run_in(
        dir.path(),
        &["analyze", "one.txt", "--output", "report.txt"],
    );
    assert_eq!(code, 0, "stderr: {stderr}");
    assert!(stdout.contains("Analyzed 1 file(s)"));

    let written = fs::read_to_string(dir.path().join("report.txt")).expect("report written");
    assert!(written.starts_with("wordprobe\none.txt\n"));
    assert!(written.contains("solo 1 (0)\n"));
}

#[test]
fn tokens_subcommand_dumps_token_stream() {
    let dir = workspace_with(&[("quirks.txt", "Dog's-leash, CAT\nrun")]);

    let (code, stdout, stderr) = run_in(dir.path(), &["tokens", "quirks.txt"]);
    assert_eq!(code, 0, "stderr: {stderr}");
    assert_eq!(stdout, "dog\ns-leash\ncat\nrun\n");
}

#[test]
fn case_folding_merges_across_the_whole_file() {
    let dir = workspace_with(&[("mixed.txt", "Apple apple APPLE banana")]);

    let (code, stdout, _) = run_in(dir.path(), &["analyze", "mixed.txt"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("apple 3 (0)\n"));
    assert!(stdout.contains("banana 1 (1)\n"));
}
