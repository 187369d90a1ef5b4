use gridpath_core::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> usize {
    let (dr, dc) = a.abs_diff(b);
    dr + dc
}

/// Euclidean (L2) distance between two coordinates.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> f64 {
    let (dr, dc) = a.abs_diff(b);
    ((dr * dr + dc * dc) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(euclidean(a, b), 5.0);
    }

    #[test]
    fn identity_and_symmetry() {
        let a = Coord::new(9, 2);
        let b = Coord::new(1, 14);
        assert_eq!(manhattan(a, a), 0);
        assert_eq!(euclidean(a, a), 0.0);
        assert_eq!(manhattan(a, b), manhattan(b, a));
        assert_eq!(euclidean(a, b), euclidean(b, a));
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        for r in 0..8 {
            for c in 0..8 {
                let p = Coord::new(r, c);
                assert!(euclidean(Coord::ZERO, p) <= manhattan(Coord::ZERO, p) as f64);
            }
        }
    }
}
