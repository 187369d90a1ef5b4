use gridpath_core::{Coord, Grid};

use crate::traits::Pather;

/// Cardinal (4-way) movement over a grid's traversable cells, in the fixed
/// order up, right, down, left.
impl Pather for Grid {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.extend(
            c.neighbors_4()
                .into_iter()
                .flatten()
                .filter(|&n| self.is_passable(n)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_interior_cell_has_four() {
        let g = Grid::parse("...\n...\n...").unwrap();
        let mut buf = Vec::new();
        g.neighbors(Coord::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Coord::new(0, 1),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(1, 0),
            ]
        );
    }

    #[test]
    fn edges_and_walls_filtered() {
        let g = Grid::parse(".#\n..").unwrap();
        let mut buf = Vec::new();
        g.neighbors(Coord::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Coord::new(1, 0)]);

        buf.clear();
        g.neighbors(Coord::new(1, 1), &mut buf);
        assert_eq!(buf, vec![Coord::new(1, 0)]);
    }

    #[test]
    fn appends_without_clearing() {
        let g = Grid::parse("..").unwrap();
        let mut buf = vec![Coord::new(9, 9)];
        g.neighbors(Coord::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Coord::new(9, 9), Coord::new(0, 1)]);
    }
}
