//! CLI-level tests for the signpost binary.

mod support;

use predicates::prelude::*;

use support::{Project, COMPLETE_PROFILE, PARTIAL_PROFILE};

#[test]
fn init_creates_config_and_profiles_dir() {
    let project = Project::new();
    std::fs::remove_file(project.path().join(".signpost.toml")).unwrap();

    project
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized .signpost.toml"));

    assert!(project.path().join(".signpost.toml").exists());
    assert!(project.profiles_dir().exists());
}

#[test]
fn init_twice_fails() {
    let project = Project::new();

    project
        .cmd()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn commands_without_config_suggest_init() {
    let project = Project::new();
    std::fs::remove_file(project.path().join(".signpost.toml")).unwrap();

    project
        .cmd()
        .args(["publish", "--profile", "local"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"))
        .stdout(predicate::str::contains("signpost init"));
}

#[test]
fn publish_complete_profile_succeeds() {
    let project = Project::new();
    project.write_profile("local", COMPLETE_PROFILE);

    project
        .cmd()
        .args(["publish", "--profile", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "published 6 parameters from profile 'local'",
        ));

    assert_eq!(project.stored_parameter_names().len(), 6);
}

#[test]
fn publish_incomplete_profile_fails_and_writes_nothing() {
    let project = Project::new();
    project.write_profile("local", PARTIAL_PROFILE);

    project
        .cmd()
        .args(["publish", "--profile", "local"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("incomplete environment 'local'")
                .and(predicate::str::contains("BRANCH"))
                .and(predicate::str::contains("WEB_REPO")),
        );

    assert!(project.stored_parameter_names().is_empty());
}

#[test]
fn publish_reads_profile_from_environment_variable() {
    let project = Project::new();
    project.write_profile("production", COMPLETE_PROFILE);

    project
        .cmd()
        .arg("publish")
        .env("SIGNPOST_ENVIRONMENT", "production")
        .assert()
        .success()
        .stdout(predicate::str::contains("profile 'production'"));
}

#[test]
fn publish_missing_profile_file_fails() {
    let project = Project::new();

    project
        .cmd()
        .args(["publish", "--profile", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile not found"));
}

#[test]
fn check_validates_without_writing() {
    let project = Project::new();
    project.write_profile("local", COMPLETE_PROFILE);

    project
        .cmd()
        .args(["check", "--profile", "local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all 6 required fields"));

    assert!(project.stored_parameter_names().is_empty());
}

#[test]
fn check_incomplete_profile_fails_without_writing() {
    let project = Project::new();
    project.write_profile("local", PARTIAL_PROFILE);

    project
        .cmd()
        .args(["check", "--profile", "local"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("incomplete environment"));

    assert!(project.stored_parameter_names().is_empty());
}

#[test]
fn get_prints_exact_published_value() {
    let project = Project::new();
    project.write_profile("local", COMPLETE_PROFILE);
    project.cmd().args(["publish", "--profile", "local"]).assert().success();

    project
        .cmd()
        .args(["get", "owner"])
        .assert()
        .success()
        .stdout("acme\n");

    project
        .cmd()
        .args(["get", "hosted_zone_id"])
        .assert()
        .success()
        .stdout("Z123\n");
}

#[test]
fn get_unpublished_name_fails_without_default() {
    let project = Project::new();

    project
        .cmd()
        .args(["get", "owner"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration not found: owner"));
}

#[test]
fn list_shows_published_names() {
    let project = Project::new();
    project.write_profile("local", COMPLETE_PROFILE);
    project.cmd().args(["publish", "--profile", "local"]).assert().success();

    project
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("6 parameters published")
                .and(predicate::str::contains("owner"))
                .and(predicate::str::contains("hosted_zone_id")),
        );
}

#[test]
fn list_on_empty_store_hints_at_publish() {
    let project = Project::new();

    project
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing published yet"));
}

#[test]
fn secret_check_missing_fails_without_printing_values() {
    let project = Project::new();

    project
        .cmd()
        .args(["secret", "check", "oauth-token"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("secret not found: oauth-token"));
}

#[test]
fn secret_check_finds_stored_secret() {
    let project = Project::new();
    std::fs::create_dir_all(project.store_root().join("secrets")).unwrap();
    std::fs::write(
        project.store_root().join("secrets").join("oauth-token"),
        "ghp_abc",
    )
    .unwrap();

    project
        .cmd()
        .args(["secret", "check", "oauth-token"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("secret 'oauth-token' exists")
                .and(predicate::str::contains("ghp_abc").not()),
        );
}

#[test]
fn completions_emit_shell_script() {
    let project = Project::new();

    project
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("signpost"));
}
