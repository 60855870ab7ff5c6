//! CLI integration tests

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn tiret() -> Command {
    Command::cargo_bin("tiret").unwrap()
}

fn temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn check_flags_a_compound_and_exits_1() {
    let file = temp_file("I have a part time job.\n");
    tiret()
        .arg("check")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("part-time"))
        .stdout(predicate::str::contains("normally spelled with hyphen"));
}

#[test]
fn clean_file_exits_0_with_no_output() {
    let file = temp_file("The notebook is on the shelf.\n");
    tiret()
        .arg("check")
        .arg(file.path())
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn check_reads_stdin_with_dash() {
    tiret()
        .arg("check")
        .arg("-")
        .write_stdin("It is written on the note-book.\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("notebook"));
}

#[test]
fn json_format_is_parsable() {
    let file = temp_file("She folded the news paper.\n");
    let assert = tiret()
        .arg("check")
        .arg("--format")
        .arg("json")
        .arg(file.path())
        .assert()
        .code(1);

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["flags"][0]["suggestions"][0], "newspaper");
    assert_eq!(parsed[0]["flags"][0]["kind"], "solid");
}

#[test]
fn quiet_prints_nothing_but_sets_status() {
    let file = temp_file("I have a part time job.\n");
    tiret()
        .arg("check")
        .arg("--quiet")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_input_exits_2() {
    tiret()
        .arg("check")
        .arg("/nonexistent/input.txt")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_accepts_a_good_list() {
    let file = temp_file("part time/part-time\nnote book/notebook\n");
    tiret()
        .arg("validate")
        .arg(file.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("OK: 2 entries"));
}

#[test]
fn validate_reports_bad_lines() {
    let file = temp_file("part time/part-time\njustoneword\n");
    tiret()
        .arg("validate")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("line 2"));
}

#[test]
fn generate_config_prints_toml() {
    tiret()
        .arg("generate-config")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[metadata]"))
        .stdout(predicate::str::contains("hyphen_convention"));
}

#[test]
fn custom_config_changes_the_rules() {
    let config = temp_file(
        "[metadata]\ncode = \"xx\"\nname = \"Test\"\n\n\
         [compounds]\nentries = [\"data base/database\"]\n",
    );
    let input = temp_file("Our data base is slow, but the part time job is fine.\n");

    tiret()
        .arg("check")
        .arg("--config")
        .arg(config.path())
        .arg(input.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("database"))
        // The embedded English list is replaced by the custom rules.
        .stdout(predicate::str::contains("part-time").not());
}
