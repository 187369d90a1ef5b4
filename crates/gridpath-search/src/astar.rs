//! A* search on a 4-directional unit-cost grid.
//!
//! One [`AStar`] value is one run. It borrows the grid read-only and owns
//! everything else (frontier, closed set, predecessor links), so several
//! runs may share one grid across threads. Dropping or consuming the engine
//! releases all per-run memory.

use gridpath_core::{Coord, Grid, GridError};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::reconstruct::reconstruct_path;
use crate::traits::{Estimate, Pather};

/// Lifecycle of a search run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// Start is queued, nothing popped yet.
    Initialized,
    /// At least one node has been expanded; the frontier is non-empty.
    Expanding,
    /// Goal was popped. Terminal.
    Found,
    /// Frontier emptied without reaching the goal. Terminal.
    Exhausted,
}

impl SearchState {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Found | Self::Exhausted)
    }
}

/// Work counters for one run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped and closed (the goal included when found).
    pub expanded: u64,
    /// Frontier entries pushed, the start included.
    pub pushed: u64,
    /// Popped entries discarded because their cell was already closed.
    pub stale: u64,
    /// Largest frontier size reached.
    pub peak_frontier: usize,
}

/// Outcome of a finished run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Start-to-goal path, inclusive. Empty when the goal is unreachable.
    pub path: Vec<Coord>,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Path length in edges; `0` when no path exists or start equals goal.
    #[inline]
    pub fn length(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A single A* run from `start` to `goal`.
pub struct AStar<'g, E: Estimate = Heuristic> {
    grid: &'g Grid,
    estimator: E,
    start: Coord,
    goal: Coord,
    goal_idx: usize,
    state: SearchState,
    frontier: Frontier,
    closed: Vec<bool>,
    came_from: Vec<Option<usize>>,
    goal_g: Option<u32>,
    stale: u64,
    expanded: u64,
    nbuf: Vec<Coord>,
}

impl<'g, E: Estimate> AStar<'g, E> {
    /// Validate the endpoints and queue the start node.
    ///
    /// Fails with `OutOfBounds` or `Blocked` before any search work is done.
    pub fn new(grid: &'g Grid, start: Coord, goal: Coord, estimator: E) -> Result<Self, SearchError> {
        let start_idx = endpoint_index(grid, start)?;
        let goal_idx = endpoint_index(grid, goal)?;

        let mut frontier = Frontier::default();
        frontier.push(estimator.estimate(start, goal), start_idx, 0, None);

        Ok(Self {
            grid,
            estimator,
            start,
            goal,
            goal_idx,
            state: SearchState::Initialized,
            frontier,
            closed: vec![false; grid.len()],
            came_from: vec![None; grid.len()],
            goal_g: None,
            stale: 0,
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        })
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Cost of the path to the goal, once found.
    pub fn goal_cost(&self) -> Option<u32> {
        self.goal_g
    }

    /// Whether `c` has been finalized.
    pub fn is_closed(&self, c: Coord) -> bool {
        self.grid.idx(c).is_some_and(|i| self.closed[i])
    }

    /// Recorded predecessor of a closed cell. `None` for the start and for
    /// cells not yet closed.
    pub fn predecessor(&self, c: Coord) -> Option<Coord> {
        let i = self.grid.idx(c)?;
        self.came_from[i].map(|p| self.grid.coord(p))
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            expanded: self.expanded,
            pushed: self.frontier.pushed(),
            stale: self.stale,
            peak_frontier: self.frontier.peak(),
        }
    }

    /// Expand one node.
    ///
    /// Stale frontier entries are discarded without counting as an
    /// expansion. Calling `step` in a terminal state is a no-op.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }

        let entry = loop {
            let Some(entry) = self.frontier.pop() else {
                self.state = SearchState::Exhausted;
                return self.state;
            };
            if self.closed[entry.idx] {
                self.stale += 1;
                continue;
            }
            break entry;
        };

        self.closed[entry.idx] = true;
        self.came_from[entry.idx] = entry.parent;
        self.expanded += 1;

        let current = self.grid.coord(entry.idx);
        log::trace!("expand {current} g={} f={:.3}", entry.g, entry.f);

        if entry.idx == self.goal_idx {
            self.goal_g = Some(entry.g);
            self.state = SearchState::Found;
            return self.state;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.grid.neighbors(current, &mut nbuf);

        let g = entry.g + 1;
        for &n in &nbuf {
            let Some(ni) = self.grid.idx(n) else {
                continue;
            };
            if self.closed[ni] {
                continue;
            }
            let f = g as f64 + self.estimator.estimate(n, self.goal);
            self.frontier.push(f, ni, g, Some(entry.idx));
        }
        self.nbuf = nbuf;

        self.state = if self.frontier.is_empty() {
            SearchState::Exhausted
        } else {
            SearchState::Expanding
        };
        self.state
    }

    /// The path found so far: start-to-goal once [`SearchState::Found`],
    /// otherwise empty.
    pub fn path(&self) -> Vec<Coord> {
        if self.state != SearchState::Found {
            return Vec::new();
        }
        reconstruct_path(self.goal, |c| self.predecessor(c))
    }

    /// Run to a terminal state and return the path with work counters.
    pub fn run(mut self) -> SearchResult {
        while !self.step().is_terminal() {}

        let path = self.path();
        let stats = self.stats();
        log::debug!(
            "search {} -> {}: {:?}, length {}, {} expanded, {} pushed, {} stale",
            self.start,
            self.goal,
            self.state,
            path.len().saturating_sub(1),
            stats.expanded,
            stats.pushed,
            stats.stale
        );
        SearchResult { path, stats }
    }
}

/// Flat index of a search endpoint, rejecting out-of-bounds and blocked
/// cells.
fn endpoint_index(grid: &Grid, c: Coord) -> Result<usize, GridError> {
    grid.validate_endpoint(c)?;
    grid.idx(c).ok_or(GridError::OutOfBounds {
        coord: c,
        rows: grid.rows(),
        cols: grid.cols(),
    })
}

/// Run A* from `start` to `goal` with the chosen heuristic.
pub fn astar_path(
    grid: &Grid,
    start: Coord,
    goal: Coord,
    heuristic: Heuristic,
) -> Result<SearchResult, SearchError> {
    Ok(AStar::new(grid, start, goal, heuristic)?.run())
}
