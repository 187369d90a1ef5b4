//! Benchmarks for A* over generated maps.
//!
//! Run with: cargo bench -p gridpath-search

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridpath_core::{CellularRule, Coord, Grid, MapGen};
use gridpath_search::{Heuristic, astar_path, bfs_distance};

/// A cave map plus the two passable cells farthest apart in row-major order.
fn cave(size: usize) -> (Grid, Coord, Coord) {
    let grid = MapGen::seeded(0x5eed)
        .cellular_cave(size, size, 0.45, &[CellularRule::default()])
        .expect("non-empty cave");
    let open: Vec<Coord> = grid.iter().filter(|&(_, o)| o).map(|(c, _)| c).collect();
    let start = *open.first().expect("cave has open cells");
    let goal = *open.last().expect("cave has open cells");
    (grid, start, goal)
}

fn bench_astar(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar");
    for size in [64, 128, 256] {
        let (grid, start, goal) = cave(size);
        for h in Heuristic::ALL {
            group.bench_with_input(BenchmarkId::new(h.name(), size), &grid, |b, grid| {
                b.iter(|| astar_path(black_box(grid), start, goal, h).map(|r| r.length()))
            });
        }
    }
    group.finish();
}

fn bench_bfs(c: &mut Criterion) {
    let (grid, start, goal) = cave(256);
    c.bench_function("bfs_distance/256", |b| {
        b.iter(|| bfs_distance(black_box(&grid), start, goal))
    });
}

criterion_group!(benches, bench_astar, bench_bfs);
criterion_main!(benches);
