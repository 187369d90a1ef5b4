use gridpath_core::Coord;

/// Walk predecessor links back from `goal` and return the path in
/// start-to-goal order.
///
/// `predecessor` must describe a tree: following it from `goal` has to reach
/// a node with no predecessor (the start). The returned path begins with
/// that node and ends with `goal`.
pub fn reconstruct_path(goal: Coord, mut predecessor: impl FnMut(Coord) -> Option<Coord>) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(prev) = predecessor(cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
