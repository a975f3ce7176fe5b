//! Shared helpers for integration tests.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// A summary with explicit tagged users, a subject link, and a hero image.
pub const TAGGED_SUMMARY: &str = "TAG_USERS: @alice\n\n\
[Great Paper](http://x/1)\n\n\
Body text.\n\n\
![](http://img/1.png)\n";

/// Run the ptc CLI and capture output.
pub fn run_ptc(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_ptc"))
        .args(args)
        .output()
        .expect("Failed to execute ptc");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Write `content` to a temp markdown file; keep the TempDir alive.
pub fn temp_doc(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("summary.md");
    std::fs::write(&path, content).expect("Failed to write fixture");
    (dir, path)
}

/// A tagged summary whose body shards into several posts.
pub fn long_tagged_summary() -> String {
    let body = "lorem ".repeat(140);
    format!(
        "TAG_USERS: @alice\n\n[Great Paper](http://x/1)\n\n{}\n",
        body.trim_end()
    )
}
