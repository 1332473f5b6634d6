// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Child-process dispatch for test binaries.
//!
//! Every spawn inherits the parent's standard streams so the test
//! frameworks own the terminal. Child exit statuses are discarded: a
//! failing test binary does not stop a sweep, only a spawn failure
//! (missing file, permission denied) does.

use std::path::Path;
use std::process::Command;

use anyhow::Context;
use tracing::debug;

/// File name of the googletest binary produced by the external build.
pub const SUITE_BINARY: &str = "minigdbstub_tests";

/// Googletest suite name shared by every minigdbstub test case.
pub const SUITE_NAME: &str = "minigdbstub";

/// Googletest flag that prints test names without running them.
const LIST_FLAG: &str = "--gtest_list_tests";

/// Run every binary in `dir` sequentially, waiting on each in turn.
pub fn run_all(dir: &Path) -> anyhow::Result<()> {
    for binary in crate::discovery::list_binaries(dir)? {
        spawn(&binary, &[])?;
    }
    Ok(())
}

/// Run the single binary `<dir>/<name>`.
pub fn run_one(dir: &Path, name: &str) -> anyhow::Result<()> {
    spawn(&dir.join(name), &[])
}

/// Print the suite binary's test names without running any tests.
pub fn list_tests(dir: &Path) -> anyhow::Result<()> {
    spawn(&dir.join(SUITE_BINARY), &[LIST_FLAG])
}

/// Run the suite binary, filtered to `minigdbstub.<filter>` when given.
///
/// With no filter the binary still receives a single empty argument,
/// which googletest ignores.
pub fn run_suite(dir: &Path, filter: Option<&str>) -> anyhow::Result<()> {
    let arg = filter_arg(filter);
    spawn(&dir.join(SUITE_BINARY), &[arg.as_str()])
}

/// Build the extra argument passed to the suite binary.
fn filter_arg(filter: Option<&str>) -> String {
    match filter {
        Some(pattern) => format!("--gtest_filter={SUITE_NAME}.{pattern}"),
        None => String::new(),
    }
}

/// Spawn one child with inherited streams and block until it finishes.
fn spawn(binary: &Path, args: &[&str]) -> anyhow::Result<()> {
    debug!(binary = %binary.display(), ?args, "spawning test binary");
    let status = Command::new(binary)
        .args(args)
        .status()
        .with_context(|| format!("Failed to launch test binary: {}", binary.display()))?;
    debug!(binary = %binary.display(), %status, "test binary finished");
    Ok(())
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
