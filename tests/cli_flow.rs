mod common;

use assert_fs::prelude::*;
use common::{TestContext, assert_single_page_pdf};
use predicates::prelude::*;
use std::fs;

#[test]
fn rerun_overwrites_documents() {
    let ctx = TestContext::new();
    ctx.write_pair("42");

    ctx.cli().assert().success();
    let first = fs::metadata(ctx.output_dir().join("question_42.pdf")).unwrap().len();

    ctx.cli().assert().success();
    assert_eq!(ctx.output_files(), vec!["question_42.pdf"]);
    let second = fs::metadata(ctx.output_dir().join("question_42.pdf")).unwrap().len();
    assert_eq!(first, second);
}

#[test]
fn single_identifier_converts_only_that_pair() {
    let ctx = TestContext::new();
    ctx.write_pair("1");
    ctx.write_pair("2");

    ctx.cli()
        .args(["questions_folder", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("question_2.pdf"))
        .stdout(predicate::str::contains("Converted 1/1 pair(s)"));

    assert_eq!(ctx.output_files(), vec!["question_2.pdf"]);
}

#[test]
fn single_identifier_without_files_fails() {
    let ctx = TestContext::new();
    ctx.write_pair("1");

    ctx.cli()
        .args(["questions_folder", "3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✗ 3:"));

    assert!(ctx.output_files().is_empty());
}

#[test]
fn output_flag_redirects_documents() {
    let ctx = TestContext::new();
    ctx.write_pair("7");

    ctx.cli().args(["--output", "pdfs"]).assert().success();

    assert!(ctx.work_dir().join("pdfs/question_7.pdf").is_file());
    assert!(!ctx.output_dir().exists());
}

#[test]
fn simple_layout_produces_valid_document() {
    let ctx = TestContext::new();
    ctx.write_gif("9.gif", 1200, 900);
    ctx.write_gif("9s.gif", 1200, 300);

    ctx.cli().arg("--simple").assert().success();

    let bytes = fs::read(ctx.output_dir().join("question_9.pdf")).unwrap();
    assert_single_page_pdf(&bytes);
}

#[test]
fn config_file_in_input_directory_is_applied() {
    let ctx = TestContext::new();
    ctx.write_gif("11.GIF", 60, 60);
    ctx.write_gif("11a.GIF", 60, 60);
    fs::write(
        ctx.input_dir().join("qapdf.toml"),
        r#"output_dir = "notes"
output_prefix = "onenote-"
answer_marker = "a"

[page]
size = "letter"
layout = "compact"
"#,
    )
    .unwrap();

    ctx.cli().assert().success();

    assert!(ctx.work_dir().join("notes/onenote-11.pdf").is_file());
}

#[test]
fn explicit_config_and_cli_override() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("scans");
    input.create_dir_all().unwrap();
    common::write_gif(input.child("3.gif").path(), 80, 40);
    common::write_gif(input.child("3s.gif").path(), 80, 40);
    let config = temp.child("custom.toml");
    config.write_str("output_dir = \"from_config\"\noutput_prefix = \"q\"\n").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("qapdf").unwrap();
    cmd.current_dir(temp.path())
        .args(["scans", "--config", "custom.toml", "--output", "from_cli"])
        .assert()
        .success();

    temp.child("from_cli/q3.pdf").assert(predicate::path::is_file());
    temp.child("from_config").assert(predicate::path::missing());
}

#[test]
fn missing_explicit_config_is_fatal() {
    let ctx = TestContext::new();
    ctx.write_pair("1");

    ctx.cli()
        .args(["--config", "nope.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));

    assert!(ctx.output_files().is_empty());
}

#[test]
fn invalid_config_is_fatal() {
    let ctx = TestContext::new();
    ctx.write_pair("1");
    fs::write(ctx.input_dir().join("qapdf.toml"), "answer_marker = \"ss\"\n").unwrap();

    ctx.cli()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"));
}
