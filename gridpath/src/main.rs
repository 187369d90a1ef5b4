//! `gridpath <map_file> <start_row> <start_col> <goal_row> <goal_col> <heuristic_flag>`

use std::io;

use clap::Parser;
use gridpath_lib::{Args, logging};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    gridpath_lib::run(&args, &mut io::stdout().lock(), &mut io::stderr().lock())
}
