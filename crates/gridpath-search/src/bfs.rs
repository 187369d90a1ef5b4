//! Unit-cost breadth-first search.
//!
//! BFS gives exact shortest distances on a 4-directional unit-cost grid and
//! serves as the ground truth A* results are checked against.

use std::collections::VecDeque;

use gridpath_core::{Coord, Grid};

use crate::traits::Pather;

/// Distance from `source` to every cell, indexed by the grid's flat index.
///
/// Unreached and blocked cells are `None`. A blocked or out-of-bounds
/// source reaches nothing.
pub fn bfs_map(grid: &Grid, source: Coord) -> Vec<Option<u32>> {
    let mut dist = vec![None; grid.len()];
    walk(grid, source, &mut dist, None);
    dist
}

/// Shortest path length in edges from `start` to `goal`, or `None` if
/// `goal` cannot be reached.
pub fn bfs_distance(grid: &Grid, start: Coord, goal: Coord) -> Option<u32> {
    let goal_idx = grid.idx(goal)?;
    let mut dist = vec![None; grid.len()];
    walk(grid, start, &mut dist, Some(goal_idx));
    dist[goal_idx]
}

fn walk(grid: &Grid, source: Coord, dist: &mut [Option<u32>], stop_at: Option<usize>) {
    let Some(si) = grid.idx(source) else {
        return;
    };
    if !grid.is_passable(source) {
        return;
    }

    dist[si] = Some(0);
    if stop_at == Some(si) {
        return;
    }

    let mut queue = VecDeque::from([si]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
        let Some(d) = dist[ci] else {
            continue;
        };
        nbuf.clear();
        grid.neighbors(grid.coord(ci), &mut nbuf);

        for &n in &nbuf {
            let Some(ni) = grid.idx(n) else {
                continue;
            };
            if dist[ni].is_some() {
                continue;
            }
            dist[ni] = Some(d + 1);
            if stop_at == Some(ni) {
                return;
            }
            queue.push_back(ni);
        }
    }
}
