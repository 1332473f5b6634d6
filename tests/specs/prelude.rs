//! Test helpers for behavioral specifications.
//!
//! The launchers resolve test binaries relative to their own location,
//! so each spec copies the built binary into a tempdir sandbox and
//! plants stub executables under `build/bin` next to it.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command for the trun binary straight from the target dir.
pub fn trun_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("trun"))
}

/// Returns a Command for the gtrun binary straight from the target dir.
pub fn gtrun_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("gtrun"))
}

/// A sandbox holding a copied launcher and a fabricated `build/bin`.
pub struct Sandbox {
    temp: TempDir,
    launcher: PathBuf,
}

impl Sandbox {
    /// Sandbox around a copy of the `trun` binary.
    pub fn trun() -> Self {
        let bin = assert_cmd::cargo::cargo_bin!("trun");
        Self::with_launcher(bin.as_ref(), "trun")
    }

    /// Sandbox around a copy of the `gtrun` binary.
    pub fn gtrun() -> Self {
        let bin = assert_cmd::cargo::cargo_bin!("gtrun");
        Self::with_launcher(bin.as_ref(), "gtrun")
    }

    fn with_launcher(src: &Path, name: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let launcher = temp.path().join(name);
        // fs::copy preserves the executable bit.
        std::fs::copy(src, &launcher).unwrap();
        std::fs::create_dir_all(temp.path().join("build").join("bin")).unwrap();
        Self { temp, launcher }
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.temp.path().join("build").join("bin")
    }

    fn log_path(&self) -> PathBuf {
        self.temp.path().join("spawn.log")
    }

    /// Plant a stub test binary that records its name and argv, then
    /// exits with `code`.
    pub fn stub_with_exit(&self, name: &str, code: i32) {
        let log = self.log_path();
        let body = format!(
            "echo \"{name} argc=$#\" >> \"{log}\"\n\
             for a in \"$@\"; do echo \"{name} arg=[$a]\" >> \"{log}\"; done\n\
             exit {code}",
            log = log.display()
        );
        let path = self.bin_dir().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
    }

    /// Plant a stub test binary that records its name and argv.
    pub fn stub(&self, name: &str) {
        self.stub_with_exit(name, 0);
    }

    /// Delete `build/bin` to simulate a missing build.
    pub fn remove_bin_dir(&self) {
        std::fs::remove_dir_all(self.bin_dir()).unwrap();
    }

    /// Command invoking the sandboxed launcher copy.
    pub fn cmd(&self) -> Command {
        Command::new(&self.launcher)
    }

    /// Lines recorded by the stubs, in spawn order.
    pub fn log_lines(&self) -> Vec<String> {
        match std::fs::read_to_string(self.log_path()) {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}
