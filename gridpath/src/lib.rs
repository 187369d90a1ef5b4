//! Entry points for the gridpath benchmark binaries.
//!
//! `gridpath` answers a single start/goal query in the fixed positional
//! format the benchmark driver launches; `gridpath-scen` replays a whole
//! scenario file in-process.

pub mod cli;
pub mod logging;
pub mod run;

pub use cli::{Args, ScenArgs};
pub use run::{run, run_scenarios, solve_all};
