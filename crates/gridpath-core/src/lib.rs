//! **gridpath-core** is the obstacle grid model for the gridpath search benchmark.
//!
//! This crate provides the read-only inputs a search runs against:
//! coordinates, the traversability grid, readers for MovingAI map and
//! scenario files, and a seeded map generator for fixtures.

pub mod geom;
pub mod grid;
pub mod mapfile;
pub mod mapgen;
pub mod scenario;

pub use geom::Coord;
pub use grid::{Grid, GridError, Malformed};
pub use mapfile::{MapError, MapFile, load_grid};
pub use mapgen::{CellularRule, MapGen};
pub use scenario::{Scenario, ScenarioError};
