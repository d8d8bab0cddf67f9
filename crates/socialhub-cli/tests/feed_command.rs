mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_feed_prints_seeded_posts() {
    let env = TestEnv::new();
    let json = env.feed_json(&[]);

    let posts = json["content"]["feed"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["author_handle"], "@anna_dev");
    assert_eq!(posts[1]["likes"], 156);
    assert_eq!(posts[1]["liked"], false);
    assert!(posts[1]["image"].as_str().unwrap().starts_with("https://"));
    assert!(posts[0].get("image").is_none());
}

#[test]
fn test_feed_post_is_prepended() {
    let env = TestEnv::new();
    let json = env.feed_json(&["--post", "Hello"]);

    let posts = json["content"]["feed"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 4);
    assert_eq!(posts[0]["content"], "Hello");
    assert_eq!(posts[0]["author_handle"], "@you");
    assert_eq!(posts[0]["timestamp"], "сейчас");
    assert_eq!(posts[0]["likes"], 0);
    assert_eq!(json["content"]["composer"]["draft"], "");
}

#[test]
fn test_feed_blank_post_is_ignored() {
    let env = TestEnv::new();
    let json = env.feed_json(&["--post", "   "]);

    assert_eq!(json["content"]["feed"]["posts"].as_array().unwrap().len(), 3);
}

#[test]
fn test_feed_like_toggles_count() {
    let env = TestEnv::new();
    let json = env.feed_json(&["--like", "2"]);

    let second = &json["content"]["feed"]["posts"][1];
    assert_eq!(second["id"], 2);
    assert_eq!(second["likes"], 157);
    assert_eq!(second["liked"], true);
}

#[test]
fn test_feed_double_like_reverts() {
    let env = TestEnv::new();
    let json = env.feed_json(&["--like", "2", "--like", "2"]);

    let second = &json["content"]["feed"]["posts"][1];
    assert_eq!(second["likes"], 156);
    assert_eq!(second["liked"], false);
}

#[test]
fn test_feed_unknown_like_is_harmless() {
    let env = TestEnv::new();
    let json = env.feed_json(&["--like", "999"]);

    let posts = json["content"]["feed"]["posts"].as_array().unwrap();
    assert!(posts.iter().all(|p| p["liked"] == false));
}

#[test]
fn test_feed_tab_selection() {
    let env = TestEnv::new();
    let json = env.feed_json(&["--tab", "explore"]);

    assert_eq!(json["content"]["sidebar"]["active"], "explore");
    assert_eq!(json["content"]["feed"]["posts"].as_array().unwrap().len(), 3);
}

#[test]
fn test_feed_invalid_tab_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["feed", "--tab", "inbox"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inbox"));
}

#[test]
fn test_feed_plain_output() {
    let env = TestEnv::new();
    env.cmd()
        .args(["feed", "--like", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SocialHub"))
        .stdout(predicate::str::contains("♥ 157"))
        .stdout(predicate::str::contains("Рекомендации"))
        .stdout(predicate::str::contains("#ReactJS"));
}

#[test]
fn test_default_command_without_terminal_prints_feed() {
    let env = TestEnv::new();
    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("@anna_dev"));
}

#[test]
fn test_feed_uses_configured_viewer() {
    let env = TestEnv::new();
    std::fs::write(
        env.dir.path().join("config.toml"),
        "[viewer]\nname = \"Олег\"\nhandle = \"@oleg\"\navatar = \"О\"\n",
    )
    .unwrap();

    let json = env.feed_json(&["--post", "Привет"]);
    assert_eq!(json["content"]["feed"]["posts"][0]["author_handle"], "@oleg");
}

#[test]
fn test_unknown_like_logs_a_warning() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--log-level", "warn", "feed", "--like", "999"])
        .assert()
        .success()
        .stderr(predicate::str::contains("like ignored"))
        .stderr(predicate::str::contains("999"));
}

#[test]
fn test_log_level_off_is_silent() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--log-level", "off", "feed", "--like", "999"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_rust_log_overrides_log_level() {
    let env = TestEnv::new();
    env.cmd()
        .env("RUST_LOG", "off")
        .args(["--log-level", "debug", "feed", "--like", "999"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    env.cmd()
        .env("RUST_LOG", "debug")
        .args(["--log-level", "off", "feed"])
        .assert()
        .success()
        .stderr(predicate::str::contains("data dir"));
}

#[test]
fn test_non_interactive_run_writes_no_log_file() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--log-level", "debug", "feed"])
        .assert()
        .success();

    assert!(!env.dir.path().join("socialhub.log").exists());
}
