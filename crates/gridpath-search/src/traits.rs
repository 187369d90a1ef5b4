use gridpath_core::Coord;

/// Neighbour enumeration for a search space.
pub trait Pather {
    /// Append the passable neighbours of `c` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Cost-to-go estimate used to order the A* frontier.
///
/// Implementations must be non-negative, zero when `from == to`, and
/// symmetric. For 4-directional unit-cost grids they must also never
/// overestimate the true remaining cost.
pub trait Estimate {
    fn estimate(&self, from: Coord, to: Coord) -> f64;
}

impl<F> Estimate for F
where
    F: Fn(Coord, Coord) -> f64,
{
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> f64 {
        self(from, to)
    }
}
