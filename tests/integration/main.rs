//! Integration tests for the wordtally CLI
//!
//! These tests run the binary inside a scratch directory laid out like the
//! default `data/shakespeare/` inputs.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a wordtally command
fn wordtally() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("wordtally"))
}

/// Front-matter length of the default corpus
const HEADER_LINES: usize = 246;

/// Write the default input layout with the given content lines between the
/// 246-line header and the trailing boilerplate
fn write_inputs(root: &Path, stopwords: &str, content: &[&str]) {
    let input_dir = root.join("data/shakespeare");
    fs::create_dir_all(&input_dir).unwrap();
    fs::write(input_dir.join("stopwords.txt"), stopwords).unwrap();

    let mut corpus = String::new();
    for i in 0..HEADER_LINES {
        corpus.push_str(&format!("Header line {i} with Words that must not count\n"));
    }
    for line in content {
        corpus.push_str(line);
        corpus.push('\n');
    }
    corpus.push_str("End of this Etext of The Complete Works\n");
    corpus.push_str("Boilerplate boilerplate boilerplate\n");
    fs::write(input_dir.join("shakespeare.txt"), corpus).unwrap();
}

fn read_report(root: &Path) -> String {
    fs::read_to_string(root.join("artifacts/shakespeare_report.csv")).unwrap()
}

// =============================================================================
// DEFAULT INVOCATION
// =============================================================================

/// No arguments: read the default inputs and write the default report
#[test]
fn test_no_args_writes_default_report() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), "the\nand\n", &["The cat sat.", "<<annotation>>", "", "The cat ran!"]);

    wordtally()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 distinct word(s)"));

    assert_eq!(read_report(temp.path()), "word,count\r\ncat,2\r\nsat,1\r\nran,1\r\n");
}

/// Header and trailing boilerplate never reach the report
#[test]
fn test_header_and_boilerplate_excluded() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), "", &["Enter Hamlet"]);

    wordtally().current_dir(temp.path()).assert().success();

    let report = read_report(temp.path());
    assert!(report.contains("hamlet,1"));
    assert!(!report.contains("header"));
    assert!(!report.contains("boilerplate"));
}

/// Two runs over the same inputs produce identical bytes
#[test]
fn test_repeat_runs_identical() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), "of", &["Now is the winter of our discontent", "Made glorious summer"]);

    wordtally().current_dir(temp.path()).assert().success();
    let first = fs::read(temp.path().join("artifacts/shakespeare_report.csv")).unwrap();
    wordtally().current_dir(temp.path()).assert().success();
    let second = fs::read(temp.path().join("artifacts/shakespeare_report.csv")).unwrap();

    assert_eq!(first, second);
}

/// Nothing after the header yields a header-only report
#[test]
fn test_empty_content_header_only() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), "the", &[]);

    wordtally().current_dir(temp.path()).assert().success();

    assert_eq!(read_report(temp.path()), "word,count\r\n");
}

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// Missing stopword file fails, names the path, and writes nothing
#[test]
fn test_missing_stopwords_fails() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), "the", &["The cat sat."]);
    fs::remove_file(temp.path().join("data/shakespeare/stopwords.txt")).unwrap();

    wordtally()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("stopwords.txt"));

    assert!(!temp.path().join("artifacts").exists());
}

/// Missing corpus fails and names the path
#[test]
fn test_missing_corpus_fails() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), "the", &["The cat sat."]);
    fs::remove_file(temp.path().join("data/shakespeare/shakespeare.txt")).unwrap();

    wordtally()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("shakespeare.txt"));

    assert!(!temp.path().join("artifacts/shakespeare_report.csv").exists());
}

/// Running in an empty directory fails
#[test]
fn test_no_inputs_fails() {
    let temp = TempDir::new().unwrap();
    wordtally().current_dir(temp.path()).assert().failure();
}

/// An unwritable report path fails
#[test]
fn test_output_blocked_by_file_fails() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), "the", &["The cat sat."]);
    fs::write(temp.path().join("artifacts"), "a file, not a directory").unwrap();

    wordtally()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("artifacts"));
}

// =============================================================================
// FLAGS
// =============================================================================

#[test]
fn test_version() {
    wordtally()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wordtally"));
}

#[test]
fn test_help() {
    wordtally()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV ranked by frequency"));
}

#[test]
fn test_json_summary() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), "the", &["The cat sat.", "The cat ran!"]);

    let output = wordtally().arg("--json").current_dir(temp.path()).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["distinct"], 3);
    assert_eq!(json["counted"], 4);
    assert_eq!(json["lines"], 2);
}

#[test]
fn test_top_lists_most_frequent() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), "the", &["The cat sat.", "The cat ran!"]);

    wordtally()
        .args(["--top", "1"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 1:"))
        .stdout(predicate::str::contains("cat"));
}

#[test]
fn test_path_and_marker_overrides() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("stop.txt"), "a").unwrap();
    fs::write(
        temp.path().join("play.txt"),
        "TITLE\nA horse a horse\nFINIS\nkingdom\n",
    )
    .unwrap();

    wordtally()
        .args([
            "--stopwords",
            "stop.txt",
            "--corpus",
            "play.txt",
            "--output",
            "out/richard.csv",
            "--skip-lines",
            "1",
            "--marker",
            "FINIS",
        ])
        .current_dir(temp.path())
        .assert()
        .success();

    let report = fs::read_to_string(temp.path().join("out/richard.csv")).unwrap();
    assert_eq!(report, "word,count\r\nhorse,2\r\n");
}

#[test]
fn test_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("stop.txt"), "").unwrap();
    fs::write(temp.path().join("sonnet.txt"), "Shall I compare thee\nTHE END\nthee thee\n").unwrap();
    fs::write(
        temp.path().join("wordtally.toml"),
        r#"stopwords_path = "stop.txt"
corpus_path = "sonnet.txt"
output_path = "sonnet.csv"
skip_lines = 0
terminal_marker = "THE END"
"#,
    )
    .unwrap();

    wordtally()
        .args(["--config", "wordtally.toml"])
        .current_dir(temp.path())
        .assert()
        .success();

    let report = fs::read_to_string(temp.path().join("sonnet.csv")).unwrap();
    assert_eq!(report, "word,count\r\nshall,1\r\ni,1\r\ncompare,1\r\nthee,1\r\n");
}

#[test]
fn test_flags_override_config_file() {
    let temp = TempDir::new().unwrap();
    write_inputs(temp.path(), "the", &["The cat sat."]);
    fs::write(temp.path().join("wordtally.toml"), "output_path = \"from-config.csv\"\n").unwrap();

    wordtally()
        .args(["--config", "wordtally.toml", "--output", "from-flag.csv"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("from-flag.csv").exists());
    assert!(!temp.path().join("from-config.csv").exists());
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bad.toml"), "skip_lines = \"lots\"").unwrap();

    wordtally()
        .args(["--config", "bad.toml"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.toml"));
}
