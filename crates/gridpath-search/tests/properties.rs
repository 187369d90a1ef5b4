//! Property tests: A* against the BFS oracle on generated grids.

use gridpath_core::{CellularRule, Coord, Grid, MapGen};
use gridpath_search::{Heuristic, astar_path, bfs_distance};
use proptest::prelude::*;

fn passable_cells(grid: &Grid) -> Vec<Coord> {
    grid.iter().filter(|&(_, open)| open).map(|(c, _)| c).collect()
}

fn endpoints(grid: &Grid, a: usize, b: usize) -> Option<(Coord, Coord)> {
    let open = passable_cells(grid);
    if open.is_empty() {
        return None;
    }
    Some((open[a % open.len()], open[b % open.len()]))
}

fn check_path(grid: &Grid, start: Coord, goal: Coord, path: &[Coord]) -> Result<(), TestCaseError> {
    prop_assert_eq!(path.first(), Some(&start));
    prop_assert_eq!(path.last(), Some(&goal));
    for w in path.windows(2) {
        prop_assert!(w[0].is_adjacent(w[1]), "{} -> {}", w[0], w[1]);
    }
    for c in path {
        prop_assert!(grid.is_passable(*c));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn random_fill_matches_bfs(
        seed in any::<u64>(),
        rows in 1usize..24,
        cols in 1usize..24,
        density in 0.0f64..0.45,
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        let grid = MapGen::seeded(seed).random_fill(rows, cols, density).unwrap();
        let Some((start, goal)) = endpoints(&grid, a, b) else {
            return Ok(());
        };
        let truth = bfs_distance(&grid, start, goal);

        for h in Heuristic::ALL {
            let res = astar_path(&grid, start, goal, h).unwrap();
            match truth {
                Some(d) => {
                    prop_assert_eq!(res.length(), d as usize, "heuristic {}", h);
                    check_path(&grid, start, goal, &res.path)?;
                }
                None => prop_assert!(res.path.is_empty()),
            }
        }
    }

    #[test]
    fn caves_match_bfs(seed in any::<u64>(), a in any::<usize>(), b in any::<usize>()) {
        let grid = MapGen::seeded(seed)
            .cellular_cave(32, 32, 0.45, &[CellularRule::default()])
            .unwrap();
        let Some((start, goal)) = endpoints(&grid, a, b) else {
            return Ok(());
        };
        let truth = bfs_distance(&grid, start, goal).map(|d| d as usize);
        let m = astar_path(&grid, start, goal, Heuristic::Manhattan).unwrap();
        let e = astar_path(&grid, start, goal, Heuristic::Euclidean).unwrap();
        prop_assert_eq!(m.is_found().then(|| m.length()), truth);
        prop_assert_eq!(e.is_found().then(|| e.length()), truth);
    }

    #[test]
    fn repeated_runs_are_identical(seed in any::<u64>(), a in any::<usize>(), b in any::<usize>()) {
        let grid = MapGen::seeded(seed).random_fill(16, 16, 0.3).unwrap();
        let Some((start, goal)) = endpoints(&grid, a, b) else {
            return Ok(());
        };
        for h in Heuristic::ALL {
            let first = astar_path(&grid, start, goal, h).unwrap();
            let second = astar_path(&grid, start, goal, h).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn out_of_bounds_endpoints_rejected(
        rows in 1usize..10,
        cols in 1usize..10,
        extra in 0usize..5,
    ) {
        let grid = Grid::from_rows(vec![vec![true; cols]; rows]).unwrap();
        let inside = Coord::new(0, 0);
        let below = Coord::new(rows + extra, 0);
        let right = Coord::new(0, cols + extra);
        prop_assert!(astar_path(&grid, inside, below, Heuristic::Manhattan).is_err());
        prop_assert!(astar_path(&grid, right, inside, Heuristic::Euclidean).is_err());
    }
}
