//! `gridpath-scen <map_file> <scen_file> [--heuristic N] [--jobs N] [--verify]`

use std::io::{self, BufWriter, Write};

use clap::Parser;
use gridpath_lib::{ScenArgs, logging};

fn main() -> anyhow::Result<()> {
    let args = ScenArgs::parse();
    logging::init(args.verbose);
    let mut out = BufWriter::new(io::stdout().lock());
    gridpath_lib::run_scenarios(&args, &mut out)?;
    out.flush()?;
    Ok(())
}
