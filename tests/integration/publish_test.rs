//! End-to-end publish tests against the dry-run backend.

use super::helpers::{long_tagged_summary, run_ptc, temp_doc, TAGGED_SUMMARY};

#[test]
fn publish_narrates_uploads_and_reply_chaining() {
    let (dir, path) = temp_doc(TAGGED_SUMMARY);
    let (stdout, _stderr, exit_code) =
        run_ptc(&["publish", "-i", path.to_str().unwrap(), "--yes"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[dry-run] would upload media http://img/1.png"));
    assert!(stdout.contains("[dry-run] would create post"));
    assert!(stdout.contains("in reply to:"));
    assert!(stdout.contains("Published 2 post(s)."));

    drop(dir);
}

#[test]
fn publish_without_confirmation_aborts() {
    let (dir, path) = temp_doc(TAGGED_SUMMARY);
    let (stdout, _stderr, exit_code) = run_ptc(&["publish", "-i", path.to_str().unwrap()]);

    // stdin is a pipe, so the prompt declines and nothing is posted
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Aborted."));
    assert!(!stdout.contains("would create post"));

    drop(dir);
}

#[test]
fn long_thread_quotes_its_first_post_at_the_end() {
    let doc = long_tagged_summary();
    let (dir, path) = temp_doc(&doc);
    let (stdout, _stderr, exit_code) =
        run_ptc(&["publish", "-i", path.to_str().unwrap(), "--yes"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("quoting: post-1"));

    drop(dir);
}

#[test]
fn quote_back_can_be_disabled_from_the_cli() {
    let doc = long_tagged_summary();
    let (dir, path) = temp_doc(&doc);
    let (stdout, _stderr, exit_code) = run_ptc(&[
        "publish",
        "-i",
        path.to_str().unwrap(),
        "--yes",
        "--no-quote-first",
    ]);

    assert_eq!(exit_code, 0);
    assert!(!stdout.contains("quoting:"));

    drop(dir);
}
