//! Integration tests for the termrender CLI

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn termrender() -> Command {
    let mut cmd = Command::cargo_bin("termrender").expect("binary should build");
    cmd.env("TERMRENDER_LOG", "off");
    cmd
}

#[test]
fn help_lists_subcommands() {
    termrender()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("crop"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn crop_respects_fixed_window() {
    termrender()
        .args(["crop", "--width", "5", "--height", "2"])
        .write_stdin("hello world\nsecond line\nthird line\n")
        .assert()
        .success()
        .stdout("hello\nsecon");
}

#[test]
fn crop_preserves_escape_sequences() {
    termrender()
        .args(["crop", "--width", "3", "--height", "5"])
        .write_stdin("\x1b[31mredder\x1b[0m")
        .assert()
        .success()
        .stdout("\x1b[31mred\x1b[0m");
}

#[test]
fn crop_negative_width_keeps_only_escapes() {
    termrender()
        .args(["crop", "--width", "-1", "--height", "5"])
        .write_stdin("text\x1b[0m")
        .assert()
        .success()
        .stdout("\x1b[0m");
}

#[test]
fn crop_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "width = 4\nheight = 1\n").unwrap();

    termrender()
        .args(["crop", "--config"])
        .arg(&path)
        .write_stdin("abcdefg\nhij")
        .assert()
        .success()
        .stdout("abcd");
}

#[test]
fn crop_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "width = 4\nheight = 1\n").unwrap();

    termrender()
        .args(["crop", "--width", "6", "--config"])
        .arg(&path)
        .write_stdin("abcdefg")
        .assert()
        .success()
        .stdout("abcdef");
}

#[test]
fn crop_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "width = \"wide\"\n").unwrap();

    termrender()
        .args(["crop", "--config"])
        .arg(&path)
        .write_stdin("abc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}

#[test]
fn demo_runs_without_tty() {
    termrender()
        .args([
            "demo",
            "--width",
            "60",
            "--height",
            "10",
            "--steps",
            "2",
            "--delay-ms",
            "0",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("termrender demo"))
        .stdout(predicate::str::contains("\x1b[?25l"))
        .stdout(predicate::str::contains("\x1b[?25h"));
}
