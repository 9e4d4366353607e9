//! CLI entry point for the pattern-based pixel mixer

use clap::Parser;
use pixelmix::io::cli::{Cli, MixJob};

fn main() -> pixelmix::Result<()> {
    let cli = Cli::parse();
    let job = MixJob::new(cli);
    job.run()
}
