//! CLI argument parsing with clap derive.

use clap::Parser;

/// Run compiled test binaries from the build output directory
#[derive(Parser)]
#[command(name = "trun")]
#[command(version, about, long_about = None)]
pub struct RunArgs {
    /// File name of a single test binary to run (default: run all)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the minigdbstub googletest suite binary
#[derive(Parser)]
#[command(name = "gtrun")]
#[command(version, about, long_about = None)]
pub struct GtestArgs {
    /// Run only test cases matching minigdbstub.<PATTERN>
    #[arg(short = 'f', long = "test_filter", value_name = "PATTERN")]
    pub test_filter: Option<String>,

    /// List test cases instead of running them
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
