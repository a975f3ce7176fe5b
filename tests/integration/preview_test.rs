//! End-to-end preview tests over fixture documents.

use super::helpers::{run_ptc, temp_doc, TAGGED_SUMMARY};

#[test]
fn preview_renders_the_full_thread() {
    let (dir, path) = temp_doc(TAGGED_SUMMARY);
    let (stdout, _stderr, exit_code) = run_ptc(&["preview", "-i", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    // hero post: title + body, numbered, carrying the hero image and the tag list
    assert!(stdout.contains("Great Paper\n\nBody text. [1/2]"));
    assert!(stdout.contains("![](http://img/1.png)"));
    assert!(stdout.contains("*Users to tag in image:*"));
    assert!(stdout.contains(" 1. @alice"));
    // post boundary, then the closing with link and credit
    assert!(stdout.contains("----"));
    assert!(stdout.contains("http://x/1"));
    assert!(stdout.contains("@alice"));
    assert!(stdout.contains("[2/2]"));

    drop(dir);
}

#[test]
fn preview_is_deterministic() {
    let (dir, path) = temp_doc(TAGGED_SUMMARY);
    let (first, _, _) = run_ptc(&["preview", "-i", path.to_str().unwrap()]);
    let (second, _, _) = run_ptc(&["preview", "-i", path.to_str().unwrap()]);

    assert_eq!(first, second);

    drop(dir);
}

#[test]
fn preview_json_exposes_the_thread_structure() {
    let (dir, path) = temp_doc(TAGGED_SUMMARY);
    let (stdout, _stderr, exit_code) =
        run_ptc(&["preview", "-i", path.to_str().unwrap(), "--json"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("invalid JSON");
    let posts = value["posts"].as_array().expect("posts array");
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["images"][0], "http://img/1.png");
    assert_eq!(posts[0]["tagged_users"][0], "alice");
    assert!(posts[1]["text"]
        .as_str()
        .unwrap()
        .contains("http://x/1"));

    drop(dir);
}

#[test]
fn preview_writes_to_the_output_file() {
    let (dir, path) = temp_doc(TAGGED_SUMMARY);
    let out_path = dir.path().join("preview.md");
    let (_stdout, _stderr, exit_code) = run_ptc(&[
        "preview",
        "-i",
        path.to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 0);
    let written = std::fs::read_to_string(&out_path).expect("output file");
    assert!(written.contains("Great Paper"));

    drop(dir);
}

#[test]
fn mention_flag_credits_authors_without_tag_lines() {
    let doc = "[T](http://x/1)\n\nBody.";
    let (dir, path) = temp_doc(doc);
    let (stdout, _stderr, exit_code) = run_ptc(&[
        "preview",
        "-i",
        path.to_str().unwrap(),
        "--mention",
        "carol",
    ]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("@carol"));

    drop(dir);
}

#[test]
fn empty_document_fails_with_a_message() {
    let (dir, path) = temp_doc("   \n\n  \n");
    let (_stdout, stderr, exit_code) = run_ptc(&["preview", "-i", path.to_str().unwrap()]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("no text or image content"));

    drop(dir);
}
