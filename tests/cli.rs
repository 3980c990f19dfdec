//
//  github2
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tests for the `gh2` binary.

use assert_cmd::Command;
use github2::exit_codes;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `gh2` command isolated from the user's configuration and environment.
fn gh2(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gh2").unwrap();
    cmd.env("GH2_CONFIG", dir.path().join("config.toml"))
        .env_remove("GITHUB_USER")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_ACCESS_TOKEN")
        .env_remove("GH2_BASE_URL")
        .env_remove("GH2_DEBUG");
    cmd
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    gh2(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("gh2 version {}", github2::VERSION)));
}

#[test]
fn test_user_search_is_deprecated() {
    let dir = TempDir::new().unwrap();
    gh2(&dir)
        .args(["user", "search", "chacon"])
        .assert()
        .code(exit_codes::DEPRECATED)
        .stderr(predicate::str::contains("deprecated"));
}

#[test]
fn test_auth_required_without_credentials() {
    let dir = TempDir::new().unwrap();
    gh2(&dir)
        .args(["repo", "pushable"])
        .assert()
        .code(exit_codes::AUTH_ERROR)
        .stderr(predicate::str::contains("Authentication required for repos.pushable"));
}

#[test]
fn test_repo_list_without_user_is_usage_error() {
    let dir = TempDir::new().unwrap();
    gh2(&dir)
        .args(["repo", "list"])
        .assert()
        .code(exit_codes::USAGE)
        .stderr(predicate::str::contains("Missing argument: user"));
}

#[test]
fn test_delete_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    gh2(&dir)
        .args(["repo", "delete", "defunkt/dotfiles"])
        .assert()
        .code(exit_codes::CANCELLED)
        .stderr(predicate::str::contains("--confirm"));
}

#[test]
fn test_config_set_and_get() {
    let dir = TempDir::new().unwrap();

    gh2(&dir)
        .args(["config", "set", "api.format", "yaml"])
        .assert()
        .success();
    gh2(&dir)
        .args(["config", "get", "api.format"])
        .assert()
        .success()
        .stdout("yaml\n");

    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("format = \"yaml\""));
}

#[test]
fn test_config_rejects_bad_values() {
    let dir = TempDir::new().unwrap();

    gh2(&dir)
        .args(["config", "set", "api.format", "xml"])
        .assert()
        .failure();
    gh2(&dir)
        .args(["config", "set", "editor", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_list_masks_tokens() {
    let dir = TempDir::new().unwrap();

    gh2(&dir)
        .args(["config", "set", "auth.access_token", "abcdef123456"])
        .assert()
        .success();
    gh2(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abcd****"))
        .stdout(predicate::str::contains("abcdef123456").not());
}

#[test]
fn test_environment_token_is_not_persisted() {
    let dir = TempDir::new().unwrap();

    gh2(&dir)
        .env("GITHUB_TOKEN", "from-env")
        .args(["config", "set", "auth.username", "defunkt"])
        .assert()
        .success();

    let written = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(written.contains("defunkt"));
    assert!(!written.contains("from-env"));
}

#[test]
fn test_user_show_json_against_server() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/v2/json/users/defunkt")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"login": "defunkt", "company": "GitHub", "followers_count": 2593}"#)
        .create();

    gh2(&dir)
        .env("GH2_BASE_URL", format!("{}/api/v2", server.url()))
        .args(["user", "show", "defunkt", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"login\": \"defunkt\""))
        .stdout(predicate::str::contains("\"followers_count\": 2593"));

    mock.assert();
}

#[test]
fn test_not_found_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/v2/json/repos/show/defunkt/missing")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error": "repository not found"}"#)
        .create();

    gh2(&dir)
        .env("GH2_BASE_URL", format!("{}/api/v2", server.url()))
        .args(["repo", "show", "defunkt/missing"])
        .assert()
        .code(exit_codes::NOT_FOUND)
        .stderr(predicate::str::contains("repository not found"));
}
