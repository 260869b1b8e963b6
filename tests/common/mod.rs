//! Common test utilities and helpers
//!
//! Runs the real binary against stub `git` and `cmake` executables
//! placed on `PATH`. Each stub appends its invocation to a log file so
//! tests can assert which external calls happened and in which order.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Fixture for one installer run
///
/// Lays out a prefix directory, a working directory (the "source tree"
/// the top-level build configures from), a bin directory for stub
/// tools, and a workspace path handed to `--temp`.
pub struct InstallFixture {
    /// Temporary directory holding the whole fixture
    pub dir: TempDir,
}

impl InstallFixture {
    /// Create a new fixture with prefix, work, and bin directories
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        for sub in ["prefix", "work", "bin"] {
            std::fs::create_dir_all(dir.path().join(sub)).expect("Failed to create fixture dir");
        }
        Self { dir }
    }

    /// Installation prefix (exists)
    pub fn prefix(&self) -> PathBuf {
        self.dir.path().join("prefix")
    }

    /// Workspace path passed to `--temp` (not created by the fixture)
    pub fn workspace(&self) -> PathBuf {
        self.dir.path().join("veloc-tmp")
    }

    /// Working directory the binary runs in
    pub fn work_dir(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    /// Log file the git stub appends to
    pub fn git_log(&self) -> PathBuf {
        self.dir.path().join("git.log")
    }

    /// Log file the cmake stub appends to
    pub fn cmake_log(&self) -> PathBuf {
        self.dir.path().join("cmake.log")
    }

    /// Read a stub log; missing file means zero invocations
    pub fn read_log(&self, path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    /// Install a stub tool script into the fixture bin directory
    pub fn stub_tool(&self, name: &str, body: &str) {
        use std::os::unix::fs::PermissionsExt;
        let path = self.dir.path().join("bin").join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write stub");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark stub executable");
    }

    /// git stub that logs its arguments, creates the clone directory,
    /// and succeeds
    pub fn stub_git_ok(&self) {
        self.stub_tool(
            "git",
            r#"echo "$*" >> "$GIT_LOG"
for last in "$@"; do :; done
mkdir -p "$last"
exit 0"#,
        );
    }

    /// git stub that logs its arguments and fails WITHOUT creating the
    /// clone directory
    pub fn stub_git_failing(&self) {
        self.stub_tool(
            "git",
            r#"echo "$*" >> "$GIT_LOG"
exit 1"#,
        );
    }

    /// cmake stub that logs `cwd args` and succeeds
    pub fn stub_cmake_ok(&self) {
        self.stub_tool(
            "cmake",
            r#"echo "$PWD $*" >> "$CMAKE_LOG"
exit 0"#,
        );
    }

    /// cmake stub that logs and exits with `code` whenever `cwd args`
    /// contains `marker`, succeeding otherwise
    pub fn stub_cmake_failing_for(&self, marker: &str, code: i32) {
        self.stub_tool(
            "cmake",
            &format!(
                r#"echo "$PWD $*" >> "$CMAKE_LOG"
case "$PWD $*" in *{marker}*) exit {code};; esac
exit 0"#
            ),
        );
    }

    /// cmake stub that succeeds but replaces the workspace directory
    /// with a plain file during the build-and-install phase, so the
    /// final workspace removal fails
    pub fn stub_cmake_breaking_cleanup(&self) {
        self.stub_tool(
            "cmake",
            r#"echo "$PWD $*" >> "$CMAKE_LOG"
case "$*" in *"--target install"*) rm -rf "$WORKSPACE"; : > "$WORKSPACE";; esac
exit 0"#,
        );
    }

    /// cmake stub that exits with `code` whenever `cwd args` contains
    /// `marker`, additionally breaking workspace removal as above
    pub fn stub_cmake_failing_and_breaking_cleanup(&self, marker: &str, code: i32) {
        self.stub_tool(
            "cmake",
            &format!(
                r#"echo "$PWD $*" >> "$CMAKE_LOG"
case "$PWD $*" in *{marker}*) rm -rf "$WORKSPACE"; : > "$WORKSPACE"; exit {code};; esac
exit 0"#
            ),
        );
    }

    /// Build a command for the installer binary with the stub tools
    /// first on `PATH` and the fixture workspace as `--temp`
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_veloc-install"));
        cmd.current_dir(self.work_dir());
        let path = format!(
            "{}:{}",
            self.dir.path().join("bin").display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.env("PATH", path);
        cmd.env("GIT_LOG", self.git_log());
        cmd.env("CMAKE_LOG", self.cmake_log());
        cmd.env("WORKSPACE", self.workspace());
        cmd.arg("--temp").arg(self.workspace());
        cmd
    }

    /// Run the binary with extra arguments appended after `--temp`
    pub fn run(&self, args: &[&str]) -> std::process::Output {
        let mut cmd = self.command();
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute veloc-install")
    }
}

impl Default for InstallFixture {
    fn default() -> Self {
        Self::new()
    }
}
