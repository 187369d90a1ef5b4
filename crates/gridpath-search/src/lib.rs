//! Deterministic shortest-path search on obstacle grids.
//!
//! This crate implements the search core that every entrant of the gridpath
//! benchmark reproduces:
//!
//! - **A\*** with 4-directional unit-cost moves ([`AStar`], [`astar_path`])
//! - two selectable heuristics ([`Heuristic::Manhattan`],
//!   [`Heuristic::Euclidean`])
//! - path reconstruction from predecessor links ([`reconstruct_path`])
//! - **BFS** distances used as ground truth ([`bfs_distance`], [`bfs_map`])
//!
//! The grid is only ever borrowed; all search state belongs to one run.
//!
//! # Trait seams
//!
//! | Trait | Role |
//! |---|---|
//! | [`Pather`] | neighbour enumeration (implemented for [`Grid`](gridpath_core::Grid)) |
//! | [`Estimate`] | cost-to-go estimate (implemented for [`Heuristic`] and closures) |

mod astar;
mod bfs;
mod distance;
mod error;
mod frontier;
mod heuristic;
mod neighbors;
mod reconstruct;
mod traits;

pub use astar::{AStar, SearchResult, SearchState, SearchStats, astar_path};
pub use bfs::{bfs_distance, bfs_map};
pub use distance::{euclidean, manhattan};
pub use error::SearchError;
pub use heuristic::Heuristic;
pub use reconstruct::reconstruct_path;
pub use traits::{Estimate, Pather};
