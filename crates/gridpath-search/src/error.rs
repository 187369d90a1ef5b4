use gridpath_core::GridError;
use thiserror::Error;

/// Errors that stop a search before it starts.
///
/// An unreachable goal is not an error; it is reported as an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("unknown heuristic flag {0} (expected 0 = manhattan or 1 = euclidean)")]
    UnknownHeuristic(u8),
    #[error("unknown heuristic {0:?} (expected 0 or 1)")]
    UnknownHeuristicName(String),
}
