//! Seeded obstacle-grid generators.
//!
//! Two generators are provided:
//! - **Random fill**: every cell is independently blocked with a given
//!   probability.
//! - **Cellular automata cave**: random fill followed by smoothing passes,
//!   giving connected cave-like open areas.
//!
//! With the same seed the output is identical, so generated maps can be used
//! as benchmark fixtures.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Coord;
use crate::grid::{Grid, GridError};

/// A rule for one cellular automata smoothing pass.
#[derive(Debug, Clone)]
pub struct CellularRule {
    /// A cell becomes a wall if it has at least this many walls among its
    /// 8 neighbours.
    pub w_cutoff1: usize,
    /// A cell also becomes a wall if it has at most this many walls within
    /// Chebyshev distance 2 (24 cells).
    pub w_cutoff2: usize,
    /// Whether positions outside the grid count as walls.
    pub walls_out_of_range: bool,
    /// How many times to apply this rule.
    pub reps: usize,
}

impl Default for CellularRule {
    fn default() -> Self {
        Self {
            w_cutoff1: 5,
            w_cutoff2: 2,
            walls_out_of_range: true,
            reps: 4,
        }
    }
}

/// Grid generator driven by a random number source.
pub struct MapGen<R: Rng> {
    rng: R,
}

impl MapGen<StdRng> {
    /// Generator with a reproducible seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> MapGen<R> {
    /// Generator over an arbitrary RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Block each cell independently with probability `blocked_pct`
    /// (clamped to `0.0..=1.0`).
    pub fn random_fill(
        &mut self,
        rows: usize,
        cols: usize,
        blocked_pct: f64,
    ) -> Result<Grid, GridError> {
        let p = blocked_pct.clamp(0.0, 1.0);
        let cells = (0..rows)
            .map(|_| (0..cols).map(|_| !self.rng.random_bool(p)).collect())
            .collect();
        Grid::from_rows(cells)
    }

    /// Generate a cave: random walls with probability `wall_init_pct`, then
    /// apply each rule in `rules` for its number of repetitions.
    pub fn cellular_cave(
        &mut self,
        rows: usize,
        cols: usize,
        wall_init_pct: f64,
        rules: &[CellularRule],
    ) -> Result<Grid, GridError> {
        let mut open: Vec<Vec<bool>> = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| self.rng.random::<f64>() >= wall_init_pct)
                    .collect()
            })
            .collect();

        for rule in rules {
            for _ in 0..rule.reps {
                let next = (0..rows)
                    .map(|r| {
                        (0..cols)
                            .map(|c| {
                                let p = Coord::new(r, c);
                                let walls1 = count_walls(&open, p, 1, rule.walls_out_of_range);
                                let walls2 = count_walls(&open, p, 2, rule.walls_out_of_range);
                                walls1 < rule.w_cutoff1 && walls2 > rule.w_cutoff2
                            })
                            .collect()
                    })
                    .collect();
                open = next;
            }
        }

        Grid::from_rows(open)
    }
}

/// Count wall cells within Chebyshev distance `radius` of `center`.
fn count_walls(open: &[Vec<bool>], center: Coord, radius: isize, walls_out_of_range: bool) -> usize {
    let mut count = 0;
    for dr in -radius..=radius {
        for dc in -radius..=radius {
            if dr == 0 && dc == 0 {
                continue;
            }
            let cell = center
                .offset(dr, dc)
                .and_then(|p| open.get(p.row).and_then(|row| row.get(p.col)));
            match cell {
                Some(&is_open) => count += usize::from(!is_open),
                None => count += usize::from(walls_out_of_range),
            }
        }
    }
    count
}
