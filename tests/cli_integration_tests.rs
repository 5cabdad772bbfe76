//! CLI behavior tests, run against the real binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn blogmark() -> Command {
    Command::cargo_bin("blogmark").unwrap()
}

#[test]
fn render_writes_html_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.md");
    fs::write(&input, "# T\n\nhello **world**\n").unwrap();

    blogmark()
        .args(["render", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>hello <strong>world</strong></p>"));
}

#[test]
fn render_reads_stdin_with_dash() {
    blogmark()
        .args(["render", "-"])
        .write_stdin("## Heading\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<h2>Heading</h2>"));
}

#[test]
fn render_output_flag_writes_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.md");
    let output = dir.path().join("post.html");
    fs::write(&input, "plain\n").unwrap();

    blogmark()
        .args(["render", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "<p>plain</p>");
}

#[test]
fn render_full_page_wraps_document() {
    blogmark()
        .args(["render", "-", "--full-page"])
        .write_stdin("# My Title\n\nbody\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("<title>My Title</title>"))
        .stdout(predicate::str::contains("<p>body</p>"));
}

#[test]
fn revert_converts_html_back() {
    blogmark()
        .args(["revert", "-"])
        .write_stdin("<h2>Two</h2><p>a <strong>b</strong></p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Two"))
        .stdout(predicate::str::contains("a **b**"));
}

#[test]
fn preview_respects_words_flag() {
    blogmark()
        .args(["preview", "-", "--words", "3"])
        .write_stdin("one two three four five\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("one two three...\n"));
}

#[test]
fn preview_word_limit_comes_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.md");
    fs::write(&input, "one two three four five\n").unwrap();
    fs::write(dir.path().join("blogmark.toml"), "[preview]\nword_limit = 2\n").unwrap();

    blogmark()
        .current_dir(dir.path())
        .args(["preview", "post.md"])
        .assert()
        .success()
        .stdout(predicate::str::diff("one two...\n"));
}

#[test]
fn preview_ellipsis_comes_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.md");
    fs::write(&input, "one two three four five\n").unwrap();
    fs::write(
        dir.path().join("blogmark.toml"),
        "[preview]\nword_limit = 2\nellipsis = \" (more)\"\n",
    )
    .unwrap();

    blogmark()
        .current_dir(dir.path())
        .args(["preview", "post.md"])
        .assert()
        .success()
        .stdout(predicate::str::diff("one two (more)\n"));
}

#[test]
fn stats_prints_words_and_reading_time() {
    blogmark()
        .args(["stats", "-"])
        .write_stdin("one two three\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 words"))
        .stdout(predicate::str::contains("1 min read"));
}

#[test]
fn stats_json_output_is_parseable() {
    let assert = blogmark()
        .args(["stats", "-", "--json"])
        .write_stdin("one two three\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["words"], 3);
    assert_eq!(value["reading_minutes"], 1);
}

#[test]
fn export_writes_three_files_named_after_title() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.md");
    fs::write(&input, "# My Great Post\n\nsome **content** here\n").unwrap();
    let out_dir = dir.path().join("exports");

    blogmark()
        .args([
            "export",
            input.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
        ])
        .assert()
        .success();

    let md = fs::read_to_string(out_dir.join("My-Great-Post.md")).unwrap();
    let txt = fs::read_to_string(out_dir.join("My-Great-Post.txt")).unwrap();
    let html = fs::read_to_string(out_dir.join("My-Great-Post.html")).unwrap();

    assert!(md.contains("**content**"));
    assert!(txt.contains("some content here"));
    assert!(!txt.contains('<'));
    assert!(html.contains("<title>My Great Post</title>"));
    assert!(html.contains("<strong>content</strong>"));
}

#[test]
fn export_title_flag_overrides_content_title() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.md");
    fs::write(&input, "# Ignored\n\nbody\n").unwrap();

    blogmark()
        .args([
            "export",
            input.to_str().unwrap(),
            "--title",
            "Chosen Name",
            "--out-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(dir.path().join("Chosen-Name.html").exists());
}

#[test]
fn missing_input_file_is_a_tool_error() {
    blogmark()
        .args(["render", "/no/such/file.md"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn invalid_config_file_is_a_tool_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("blogmark.toml"), "preview = \"oops\"\n").unwrap();
    let input = dir.path().join("post.md");
    fs::write(&input, "x\n").unwrap();

    blogmark()
        .current_dir(dir.path())
        .args(["preview", "post.md"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid config file"));
}

#[test]
fn version_subcommand_prints_version() {
    blogmark()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
