use clap::Parser;

use trun::cli::RunArgs;
use trun::{discovery, launcher, logging};

fn main() -> anyhow::Result<()> {
    let args = RunArgs::parse();
    logging::init(args.verbose);

    let dir = discovery::test_bin_dir()?;
    match args.name {
        Some(name) => launcher::run_one(&dir, &name),
        None => launcher::run_all(&dir),
    }
}
