use crate::grid::Grid;
use crate::polyomino::{Cell, Polyomino};

/// Returns true if the complement of the polyomino inside its padded
/// bounding box is not 4-connected, i.e. some empty cell is enclosed.
pub fn has_hole(p: &Polyomino) -> bool {
    let grid = Grid::from_polyomino(p);
    let complement = grid.area() - grid.count();

    // The margin guarantees the corner is empty
    let ((x0, y0), _) = grid.bounds();
    let mut visited = Grid::new(p.dimension());
    let mut stack = vec![Cell::new(x0, y0)];
    visited.set(x0, y0);
    let mut reached = 0;

    while let Some(cell) = stack.pop() {
        reached += 1;
        for n in cell.neighbours() {
            if grid.contains(n.x, n.y) && !grid.get(n.x, n.y) && !visited.get(n.x, n.y) {
                visited.set(n.x, n.y);
                stack.push(n);
            }
        }
    }

    reached < complement
}
