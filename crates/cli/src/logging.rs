// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stderr diagnostics via tracing.
//!
//! Silent at the default level so the spawned test binaries own the
//! terminal. `--verbose` forces debug output; otherwise `RUST_LOG`
//! controls the filter.

use tracing_subscriber::EnvFilter;

/// Initialize the stderr subscriber. Call once, before any spawns.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
