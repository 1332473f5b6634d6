// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential launcher for compiled minigdbstub test binaries.
//!
//! Two thin binaries share this crate: `trun` runs every test binary found
//! in the build output directory (or a single one named on the command
//! line), and `gtrun` drives the fixed googletest suite binary with
//! optional list/filter flags. Neither builds anything: `build/bin` is the
//! output of an external build step.

pub mod cli;
pub mod discovery;
pub mod launcher;
pub mod logging;
