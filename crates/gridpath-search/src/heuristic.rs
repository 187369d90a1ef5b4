//! The two selectable cost-to-go estimates.

use std::fmt;
use std::str::FromStr;

use gridpath_core::Coord;

use crate::distance;
use crate::error::SearchError;
use crate::traits::Estimate;

/// Heuristic selected by the integer flag on the command line.
///
/// Both variants are admissible and consistent on a 4-directional unit-cost
/// grid, so either one yields optimal path lengths. Euclidean is looser and
/// typically expands more nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Heuristic {
    /// Flag `0`: `|dr| + |dc|`.
    #[default]
    Manhattan,
    /// Flag `1`: `sqrt(dr² + dc²)`.
    Euclidean,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::Manhattan, Heuristic::Euclidean];

    /// The command-line flag selecting this heuristic.
    pub const fn flag(self) -> u8 {
        match self {
            Self::Manhattan => 0,
            Self::Euclidean => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        }
    }

    /// Estimated remaining cost from `a` to `b`.
    #[inline]
    pub fn cost(self, a: Coord, b: Coord) -> f64 {
        match self {
            Self::Manhattan => distance::manhattan(a, b) as f64,
            Self::Euclidean => distance::euclidean(a, b),
        }
    }
}

impl Estimate for Heuristic {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> f64 {
        self.cost(from, to)
    }
}

impl TryFrom<u8> for Heuristic {
    type Error = SearchError;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(Self::Manhattan),
            1 => Ok(Self::Euclidean),
            other => Err(SearchError::UnknownHeuristic(other)),
        }
    }
}

/// Parses the command-line flag. Only `0` and `1` are accepted.
impl FromStr for Heuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Self::Manhattan),
            "1" => Ok(Self::Euclidean),
            _ => Err(SearchError::UnknownHeuristicName(s.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
