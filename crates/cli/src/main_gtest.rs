use clap::Parser;

use trun::cli::GtestArgs;
use trun::{discovery, launcher, logging};

fn main() -> anyhow::Result<()> {
    let args = GtestArgs::parse();
    logging::init(args.verbose);

    let dir = discovery::test_bin_dir()?;

    // --list wins over --test_filter: print names and stop.
    if args.list {
        launcher::list_tests(&dir)?;
        return Ok(());
    }

    launcher::run_suite(&dir, args.test_filter.as_deref())
}
