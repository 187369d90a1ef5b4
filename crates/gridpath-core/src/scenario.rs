//! Reader for MovingAI `.scen` scenario files.
//!
//! Each data row is whitespace-separated:
//!
//! ```text
//! bucket  map  width  height  start_x  start_y  goal_x  goal_y  optimal
//! ```
//!
//! `x` is the column and `y` the row. The first line is a header
//! (`version ...`) and is skipped whatever it says.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::geom::Coord;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("cannot read scenario file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("scenario line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// One start/goal query from a scenario file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub bucket: u32,
    pub map: String,
    pub start: Coord,
    pub goal: Coord,
    /// Reference length recorded in the file (octile metric), if parseable.
    pub optimal: Option<f64>,
}

/// Read and parse the scenario file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Scenario>, ScenarioError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scens = parse(&text)?;
    log::debug!("loaded {} scenarios from {}", scens.len(), path.display());
    Ok(scens)
}

/// Parse scenario file contents. Line numbers in errors are 1-based.
pub fn parse(text: &str) -> Result<Vec<Scenario>, ScenarioError> {
    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        out.push(parse_line(i + 1, line)?);
    }
    Ok(out)
}

fn parse_line(line_no: usize, line: &str) -> Result<Scenario, ScenarioError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 8 {
        return Err(ScenarioError::Parse {
            line: line_no,
            reason: format!("expected at least 8 fields, found {}", tokens.len()),
        });
    }

    let bucket = field(&tokens, 0, "bucket", line_no)?;
    let start_x = field(&tokens, 4, "start x", line_no)?;
    let start_y = field(&tokens, 5, "start y", line_no)?;
    let goal_x = field(&tokens, 6, "goal x", line_no)?;
    let goal_y = field(&tokens, 7, "goal y", line_no)?;

    Ok(Scenario {
        bucket,
        map: tokens[1].to_string(),
        start: Coord::new(start_y, start_x),
        goal: Coord::new(goal_y, goal_x),
        optimal: tokens.get(8).and_then(|t| t.parse().ok()),
    })
}

fn field<T: FromStr>(
    tokens: &[&str],
    idx: usize,
    name: &str,
    line_no: usize,
) -> Result<T, ScenarioError> {
    tokens[idx].parse().map_err(|_| ScenarioError::Parse {
        line: line_no,
        reason: format!("{name} {:?} is not a non-negative integer in range", tokens[idx]),
    })
}
