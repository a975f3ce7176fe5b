//! CLI surface tests: help, usage errors, small utility commands.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{run_ptc, temp_doc};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn top_level_help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_ptc(&["--help"]);

    assert_eq!(exit_code, 0);
    for subcommand in ["preview", "publish", "skeleton", "authors", "clean", "config"] {
        assert!(stdout.contains(subcommand), "help missing {}", subcommand);
    }
}

#[test]
fn preview_help_documents_flags() {
    let (stdout, _stderr, exit_code) = run_ptc(&["preview", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--input"));
    assert!(stdout.contains("--json"));
    assert!(stdout.contains("--mention"));
}

#[test]
fn publish_help_documents_flags() {
    let (stdout, _stderr, exit_code) = run_ptc(&["publish", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--yes"));
    assert!(stdout.contains("--no-quote-first"));
}

#[test]
fn version_flag_prints_version() {
    Command::cargo_bin("ptc")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ptc"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn no_arguments_shows_usage() {
    Command::cargo_bin("ptc")
        .unwrap()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn preview_requires_input() {
    let (_stdout, stderr, exit_code) = run_ptc(&["preview"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--input"));
}

#[test]
fn missing_input_file_is_a_clean_error() {
    let (_stdout, stderr, exit_code) = run_ptc(&["preview", "-i", "/nonexistent/summary.md"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Error"));
    assert!(stderr.contains("/nonexistent/summary.md"));
}

// ============================================================================
// Utility Commands
// ============================================================================

#[test]
fn config_path_prints_the_toml_location() {
    let (stdout, _stderr, exit_code) = run_ptc(&["config", "path"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("config.toml"));
}

#[test]
fn completions_generate_for_bash() {
    let (stdout, _stderr, exit_code) = run_ptc(&["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("ptc"));
}

#[test]
fn clean_unwraps_link_wrapped_images() {
    let (dir, path) = temp_doc("[![](http://img/1.png)](http://cdn/full)\nCaption");
    let (stdout, _stderr, exit_code) = run_ptc(&["clean", "-i", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("![](http://img/1.png)"));
    assert!(!stdout.contains("http://cdn/full"));

    drop(dir);
}
