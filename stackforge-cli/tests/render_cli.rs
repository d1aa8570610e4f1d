use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn stackforge_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("stackforge"))
}

fn write_project_file(dir: &Path) -> std::path::PathBuf {
    let yaml = r#"
id: "p-1"
name: Shop
description: storefront services
user_id: "u-1"
services:
  - id: "3"
    name: billing
    template:
      id: node-express-rest
      name: Express REST API
      description: Node.js REST API using Express.js with middleware support
      github_url: https://github.com/templates/express-rest-api
      language: nodejs
      framework: Express.js
    database:
      kind: redis
      connection_url: redis://cache:6379/0
      name: cache
"#;
    let path = dir.join("project.yaml");
    fs::write(&path, yaml).expect("write project file");
    path
}

#[test]
fn render_writes_three_artifact_files() {
    let workspace = TempDir::new().expect("workspace");
    let project_file = write_project_file(workspace.path());
    let out_dir = workspace.path().join("out");

    stackforge_cmd()
        .arg("render")
        .arg(&project_file)
        .arg("--out")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(contains("Shop-docker.yml"));

    let docker = fs::read_to_string(out_dir.join("Shop-docker.yml")).expect("docker artifact");
    let kubernetes =
        fs::read_to_string(out_dir.join("Shop-kubernetes.yml")).expect("kubernetes artifact");
    let env = fs::read_to_string(out_dir.join("Shop-env.yml")).expect("env artifact");

    assert!(docker.contains("version: '3.8'"));
    assert!(docker.contains("\"5435:6379\""), "redis db port offset from id 3");
    assert!(docker.contains("POSTGRES_USER=postgres"));
    assert!(docker.contains("shop-network"));
    assert!(kubernetes.contains("name: billing-secrets"));
    assert!(env.contains("BILLING_PORT=3003"));
    assert!(env.ends_with('\n'), "written files end with a newline");
}

#[test]
fn render_single_artifact_prints_to_stdout() {
    let workspace = TempDir::new().expect("workspace");
    let project_file = write_project_file(workspace.path());

    stackforge_cmd()
        .arg("render")
        .arg(&project_file)
        .args(["--artifact", "env"])
        .assert()
        .success()
        .stdout(contains("BILLING_PORT=3003"))
        .stdout(contains("API_VERSION=v1"));
}

#[test]
fn render_json_emits_all_three_artifacts() {
    let workspace = TempDir::new().expect("workspace");
    let project_file = write_project_file(workspace.path());

    let assert = stackforge_cmd()
        .arg("render")
        .arg(&project_file)
        .arg("--json")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("stdout utf8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    for key in ["deployment", "orchestration", "environment"] {
        assert!(value.get(key).and_then(|v| v.as_str()).is_some(), "missing {key}");
    }
}

#[test]
fn render_unknown_artifact_fails() {
    let workspace = TempDir::new().expect("workspace");
    let project_file = write_project_file(workspace.path());

    stackforge_cmd()
        .arg("render")
        .arg(&project_file)
        .args(["--artifact", "terraform"])
        .assert()
        .failure()
        .stderr(contains("unknown artifact"));
}

#[test]
fn render_missing_file_fails_with_context() {
    stackforge_cmd()
        .args(["render", "/nonexistent/project.yaml"])
        .assert()
        .failure()
        .stderr(contains("cannot read project file"));
}

#[test]
fn templates_lists_catalog() {
    stackforge_cmd()
        .arg("templates")
        .assert()
        .success()
        .stdout(contains("rust-actix"))
        .stdout(contains("Express REST API"));
}

#[test]
fn secret_prints_64_hex_chars() {
    let assert = stackforge_cmd().arg("secret").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("stdout utf8");
    let secret = stdout.trim();
    assert_eq!(secret.len(), 64);
    assert!(secret.chars().all(|c| c.is_ascii_hexdigit()));
}
