//! Contour following over the cells of a hole-free polyomino.
//!
//! The walk starts on the leftmost cell of the bottom row and is split in
//! four sweeps, heading east, north, west then south. Each sweep keeps the
//! polyomino on its right and hugs the wall, taking the tightest right turn
//! available, until it reaches the matching side of the bounding box with
//! its heading restored.

use crate::direction::{Direction, FREEMAN};
use crate::grid::Grid;
use crate::polyomino::{Cell, Polyomino};

/// Leftmost cell of the bottom row
pub fn start_cell(p: &Polyomino) -> Option<Cell> {
    p.cells().iter().copied().min_by_key(|c| (c.y != 0, c.x))
}

/// Freeman word of the outer contour of `p`, starting at [`start_cell`].
/// The result is only meaningful for hole-free polyominoes.
pub fn trace(p: &Polyomino) -> Vec<Direction> {
    let Some(start) = start_cell(p) else {
        return vec![];
    };
    let grid = Grid::from_polyomino(p);
    let (w, h) = p.dimension();
    let max = (w as i32 - 1, h as i32 - 1);

    let mut word = Vec::with_capacity(2 * (w + h));
    let mut position = (start.x, start.y);
    for sweep in FREEMAN {
        position = quarter_word(&grid, max, position, sweep, &mut word);
    }
    word
}

/// Whether the sweep heading `s` has not yet reached its side of the bounding box
fn in_progress(s: Direction, (x, y): (i32, i32), (w, h): (i32, i32)) -> bool {
    match s {
        Direction::East => x != w,
        Direction::North => y != h,
        Direction::West => x != 0,
        Direction::South => y != 0,
    }
}

fn quarter_word(
    grid: &Grid,
    max: (i32, i32),
    mut position: (i32, i32),
    sweep: Direction,
    word: &mut Vec<Direction>,
) -> (i32, i32) {
    word.push(sweep);
    let mut current = sweep;

    while in_progress(sweep, position, max) || current != sweep {
        let ahead = current.advance(position);
        if grid.get(ahead.0, ahead.1) {
            position = ahead;
            let right = current.turn_right();
            let beside = right.advance(position);
            if grid.get(beside.0, beside.1) {
                position = beside;
                current = right;
            }
        } else {
            current = current.turn_left();
        }
        word.push(current);
    }

    position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::BoundaryWord;

    fn word_of(cells: &[(i32, i32)]) -> String {
        let p = Polyomino::from_cells(cells.iter().copied().map(Cell::from));
        trace(&p).iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn unit_square() {
        assert_eq!(word_of(&[(0, 0)]), "0123");
    }

    #[test]
    fn dominoes() {
        assert_eq!(word_of(&[(0, 0), (1, 0)]), "001223");
        assert_eq!(word_of(&[(0, 0), (0, 1)]), "011233");
    }

    #[test]
    fn square_tetromino() {
        assert_eq!(word_of(&[(0, 0), (0, 1), (1, 0), (1, 1)]), "00112233");
    }

    #[test]
    fn start_prefers_bottom_row() {
        let p = Polyomino::from_cells([(0, 1), (1, 1), (1, 0)].map(Cell::from));
        assert_eq!(start_cell(&p), Some(Cell::new(1, 0)));
    }

    #[test]
    fn concave_shapes_close() {
        let shapes: &[&[(i32, i32)]] = &[
            &[(0, 1), (1, 1), (1, 0)],
            &[(0, 0), (1, 0), (2, 0), (1, 1)],
            &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1)],
            &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
            &[(0, 2), (1, 2), (1, 1), (1, 0), (2, 0)],
        ];
        for cells in shapes {
            let p = Polyomino::from_cells(cells.iter().copied().map(Cell::from));
            let word = BoundaryWord::new(trace(&p)).unwrap();
            assert_eq!(word.turning_number(), 1, "{p:?}");
        }
    }
}
