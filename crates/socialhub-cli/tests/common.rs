#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated data directory plus a command builder pointed at it
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Command with a clean environment and no `--data-dir`
    #[allow(deprecated)]
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("socialhub").unwrap();
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("SOCIALHUB_PATH");
        cmd
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--data-dir").arg(self.dir.path());
        cmd
    }

    pub fn feed_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .cmd()
            .arg("--format")
            .arg("json")
            .arg("feed")
            .args(args)
            .output()
            .unwrap();
        assert!(output.status.success(), "feed failed: {:?}", output);
        serde_json::from_slice(&output.stdout).unwrap()
    }
}
