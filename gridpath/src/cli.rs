//! Command-line argument definitions.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use gridpath_core::Coord;
use gridpath_search::Heuristic;

/// Find the shortest 4-directional path on a map and print its length.
///
/// Prints the path length in steps, or 0 when the goal is unreachable.
#[derive(Parser, Debug)]
#[command(name = "gridpath", version)]
pub struct Args {
    /// Map file (four metadata lines, then one row per line; `.` is open)
    pub map_file: PathBuf,

    /// Start row
    pub start_row: usize,

    /// Start column
    pub start_col: usize,

    /// Goal row
    pub goal_row: usize,

    /// Goal column
    pub goal_col: usize,

    /// Heuristic flag: 0 = Manhattan, 1 = Euclidean
    pub heuristic: Heuristic,

    /// Also print every step of the path as `row col`
    #[arg(long)]
    pub print_path: bool,

    /// Print search counters to stderr
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn start(&self) -> Coord {
        Coord::new(self.start_row, self.start_col)
    }

    pub fn goal(&self) -> Coord {
        Coord::new(self.goal_row, self.goal_col)
    }
}

/// Run every query of a MovingAI scenario file against one map.
#[derive(Parser, Debug)]
#[command(name = "gridpath-scen", version)]
pub struct ScenArgs {
    /// Map file
    pub map_file: PathBuf,

    /// Scenario (.scen) file
    pub scen_file: PathBuf,

    /// Heuristic: 0 = Manhattan, 1 = Euclidean
    #[arg(long, default_value = "0")]
    pub heuristic: Heuristic,

    /// Worker threads sharing the map
    #[arg(short, long, default_value = "1")]
    pub jobs: NonZeroUsize,

    /// Check every length against breadth-first search
    #[arg(long)]
    pub verify: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definitions_are_valid() {
        Args::command().debug_assert();
        ScenArgs::command().debug_assert();
    }

    #[test]
    fn positional_contract() {
        let a = Args::try_parse_from(["gridpath", "m.map", "1", "2", "3", "4", "1"]).unwrap();
        assert_eq!(a.map_file, PathBuf::from("m.map"));
        assert_eq!(a.start(), Coord::new(1, 2));
        assert_eq!(a.goal(), Coord::new(3, 4));
        assert_eq!(a.heuristic, Heuristic::Euclidean);
        assert!(!a.print_path);
        assert_eq!(a.verbose, 0);
    }

    #[test]
    fn rejects_bad_arguments() {
        // Missing heuristic.
        assert!(Args::try_parse_from(["gridpath", "m.map", "1", "2", "3", "4"]).is_err());
        // Unknown heuristic flag.
        assert!(Args::try_parse_from(["gridpath", "m.map", "1", "2", "3", "4", "7"]).is_err());
        // Heuristic names are not flags.
        assert!(Args::try_parse_from(["gridpath", "m.map", "1", "2", "3", "4", "euclidean"]).is_err());
        // Negative / non-numeric coordinate.
        assert!(Args::try_parse_from(["gridpath", "m.map", "x", "2", "3", "4", "0"]).is_err());
        assert!(Args::try_parse_from(["gridpath", "m.map", "1", "-2", "3", "4", "0"]).is_err());
    }

    #[test]
    fn optional_flags() {
        let a = Args::try_parse_from([
            "gridpath", "m.map", "0", "0", "0", "0", "0", "--print-path", "--stats", "-vv",
        ])
        .unwrap();
        assert!(a.print_path);
        assert!(a.stats);
        assert_eq!(a.verbose, 2);
    }

    #[test]
    fn scen_defaults() {
        let s = ScenArgs::try_parse_from(["gridpath-scen", "m.map", "m.scen"]).unwrap();
        assert_eq!(s.heuristic, Heuristic::Manhattan);
        assert_eq!(s.jobs.get(), 1);
        assert!(!s.verify);
        assert!(ScenArgs::try_parse_from(["gridpath-scen", "m.map", "m.scen", "-j", "0"]).is_err());
    }
}
