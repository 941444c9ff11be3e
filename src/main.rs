//! usdsize CLI: report the assets reachable from a version descriptor.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use usdsize::engine::arg_parser::Cli;
use usdsize::engine::handle_run;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
