use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn bakery() -> assert_cmd::Command {
    cargo_bin_cmd!("bakery")
}

// ── Help / Version ──

#[test]
fn shows_help() {
    bakery()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("image service"));
}

#[test]
fn shows_version() {
    bakery()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bakery"));
}

// ── Stacks Command ──

#[test]
fn stacks_lists_every_supported_tag() {
    let mut assert = bakery().arg("stacks").assert().success();

    for tag in [
        "python:3.8",
        "python:3.9",
        "python:3.12",
        "node:14",
        "node:16",
        "node:18",
        "java:11",
        "java:17",
        "java:19",
    ] {
        assert = assert.stdout(predicate::str::contains(tag));
    }
}

#[test]
fn stacks_marks_the_default() {
    bakery()
        .arg("stacks")
        .assert()
        .success()
        .stdout(predicate::str::contains("python:3.8 (default)"));
}

// ── Submit Command ──

#[test]
fn submit_requires_a_project_argument() {
    bakery()
        .arg("submit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<PROJECT>"));
}

#[test]
fn submit_fails_when_project_file_is_missing() {
    let tmp = TempDir::new().unwrap();

    bakery()
        .current_dir(tmp.path())
        .args(["submit", "no-such-project.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read file"));
}

#[test]
fn submit_rejects_an_unknown_stack_tag() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("project.zip"), b"PK").unwrap();

    bakery()
        .current_dir(tmp.path())
        .args(["submit", "project.zip", "--stack", "ruby:3.2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tech stack"));
}

#[test]
fn submit_against_unreachable_service_prints_generic_failure() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("project.zip"), b"PK").unwrap();

    // Port 1 is never listening; the attempt must resolve to the one
    // generic failure message and a non-zero exit.
    bakery()
        .current_dir(tmp.path())
        .args([
            "submit",
            "project.zip",
            "--endpoint",
            "http://127.0.0.1:1/create_docker_image/",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to create the Docker image."));
}

#[test]
fn submit_reads_defaults_from_config_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("project.zip"), b"PK").unwrap();
    // An invalid configured default stack is caught before any request.
    std::fs::write(
        tmp.path().join("bakery.toml"),
        "[defaults]\ntech_stack = \"cobol:74\"\n",
    )
    .unwrap();

    bakery()
        .current_dir(tmp.path())
        .args(["submit", "project.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tech stack"));
}
