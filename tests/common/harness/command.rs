//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `bear-notes` binary.
pub struct BearCommand {
    args: Vec<String>,
    config_home: Option<PathBuf>,
    stdin: Option<String>,
}

impl BearCommand {
    /// Creates a new command for the `bear-notes` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config_home: None,
            stdin: None,
        }
    }

    /// Sets the `--db` option.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points the config lookup at `dir` instead of the user's config home.
    pub fn config_home(mut self, dir: &Path) -> Self {
        self.config_home = Some(dir.to_path_buf());
        self
    }

    /// Feeds `input` to the process's stdin.
    pub fn stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("bear-notes").expect("Failed to find bear-notes binary");
        cmd.args(&self.args);
        if let Some(dir) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", dir);
        }
        cmd.env_remove("RUST_LOG");
        if let Some(input) = self.stdin {
            cmd.write_stdin(input);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `recent` command with a count.
    pub fn recent(self, count: u32) -> Self {
        self.args(["recent".to_string(), "-n".to_string(), count.to_string()])
    }

    /// Configures for the `tagged` command.
    pub fn tagged(self, tag: &str) -> Self {
        self.args(["tagged", tag])
    }

    /// Configures for the `show` command.
    pub fn show(self, title: &str) -> Self {
        self.args(["show", title])
    }

    /// Configures for the `trash` command.
    pub fn trash(self, title: &str) -> Self {
        self.args(["trash", title])
    }

    /// Configures for the `serve` command.
    pub fn serve(self) -> Self {
        self.args(["serve"])
    }

    /// Configures for the `tools` command.
    pub fn tools(self) -> Self {
        self.args(["tools"])
    }

    /// Configures for the `path` command.
    pub fn path(self) -> Self {
        self.args(["path"])
    }

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }
}

impl Default for BearCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        BearCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_db() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("database.sqlite");
        let cmd = BearCommand::new().db(&path);
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], path.to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = BearCommand::new().recent(3);
        assert_eq!(cmd.get_args(), ["recent", "-n", "3"]);
    }
}
