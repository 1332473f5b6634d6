// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test-binary directory resolution and enumeration.
//!
//! Test binaries live in `build/bin` next to the launcher executable,
//! placed there by the external build step. Nothing here checks that the
//! entries are real test binaries or even executable.

use std::path::{Path, PathBuf};

use anyhow::Context;

const BUILD_DIR: &str = "build";
const BIN_DIR: &str = "bin";

/// Resolve the test-binary directory relative to the running executable.
pub fn test_bin_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate launcher executable")?;
    let exe_dir = exe
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Launcher executable has no parent directory"))?;
    Ok(exe_dir.join(BUILD_DIR).join(BIN_DIR))
}

/// List every entry in the test-binary directory, sorted by file name.
///
/// Raw readdir order is filesystem-dependent; sorting keeps "run all"
/// sweeps reproducible across machines.
pub fn list_binaries(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read test binary directory: {}", dir.display()))?;

    let mut binaries = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        binaries.push(entry.path());
    }
    binaries.sort();
    Ok(binaries)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
