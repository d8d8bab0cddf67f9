mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_config_show_without_file_reports_defaults() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created, defaults"))
        .stdout(predicate::str::contains("@you"))
        .stdout(predicate::str::contains("socialhub config init"));
}

#[test]
fn test_config_init_writes_file() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config written"));

    let written = std::fs::read_to_string(env.dir.path().join("config.toml")).unwrap();
    assert!(written.contains("[viewer]"));
    assert!(written.contains("tick_rate_ms = 100"));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let env = TestEnv::new();
    env.cmd().args(["config", "init"]).assert().success();

    env.cmd()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    env.cmd()
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_show_json() {
    let env = TestEnv::new();
    env.cmd().args(["config", "init"]).assert().success();

    let output = env
        .cmd()
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["content"]["exists"], true);
    assert_eq!(json["content"]["config"]["ui"]["show_sidebar"], true);
}

#[test]
fn test_invalid_config_is_reported() {
    let env = TestEnv::new();
    std::fs::write(
        env.dir.path().join("config.toml"),
        "[ui]\ntick_rate_ms = 0\n",
    )
    .unwrap();

    env.cmd()
        .arg("feed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"))
        .stderr(predicate::str::contains("tick_rate_ms"));
}

#[test]
fn test_data_dir_from_env() {
    let env = TestEnv::new();
    let expected = env.dir.path().join("config.toml");

    env.bare_cmd()
        .env("SOCIALHUB_PATH", env.dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    assert!(expected.exists());
}

#[cfg(unix)]
#[test]
fn test_data_dir_env_expands_tilde() {
    let env = TestEnv::new();

    env.bare_cmd()
        .env("HOME", env.dir.path())
        .env("SOCIALHUB_PATH", "~/hub")
        .args(["config", "init"])
        .assert()
        .success();

    assert!(env.dir.path().join("hub").join("config.toml").exists());
}

#[test]
fn test_data_dir_flag_wins_over_env() {
    let env = TestEnv::new();
    let other = tempfile::TempDir::new().unwrap();

    env.cmd()
        .env("SOCIALHUB_PATH", other.path())
        .args(["config", "init"])
        .assert()
        .success();

    assert!(env.dir.path().join("config.toml").exists());
    assert!(!other.path().join("config.toml").exists());
}

#[test]
fn test_broken_config_can_be_reinitialised() {
    let env = TestEnv::new();
    std::fs::write(env.dir.path().join("config.toml"), "[ui\n").unwrap();

    env.cmd()
        .args(["config", "init", "--force"])
        .assert()
        .success();
    env.cmd().arg("feed").assert().success();
}
