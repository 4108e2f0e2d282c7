use std::fmt::{self, Debug, Display, Write};

use crate::boundary;
use crate::error::TraceError;
use crate::hole;
use crate::rotation::{Rotation, Symmetry};
use crate::word::BoundaryWord;

/// A unit square of the grid, identified by its lower-left corner
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 4 edge-adjacent cells, in growth order
    pub fn neighbours(self) -> [Cell; 4] {
        let Cell { x, y } = self;
        [
            Cell::new(x - 1, y),
            Cell::new(x + 1, y),
            Cell::new(x, y - 1),
            Cell::new(x, y + 1),
        ]
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A finite set of cells in canonical form: translated so that the smallest
/// x and y are both 0, and sorted by (x, y). Two polyominoes are equal iff
/// they are translates of each other.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Polyomino {
    cells: Vec<Cell>,
}

impl Polyomino {
    /// The single cell at the origin
    pub fn trivial() -> Self {
        Self {
            cells: vec![Cell::new(0, 0)],
        }
    }

    /// Canonicalize any collection of cells. Duplicated cells are merged.
    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut cells: Vec<Cell> = cells.into_iter().collect();
        let min_x = cells.iter().map(|c| c.x).min().unwrap_or(0);
        let min_y = cells.iter().map(|c| c.y).min().unwrap_or(0);
        for c in cells.iter_mut() {
            c.x -= min_x;
            c.y -= min_y;
        }
        cells.sort_unstable();
        cells.dedup();
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn square_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.binary_search(&cell).is_ok()
    }

    /// Width and height of the bounding box, in cells
    pub fn dimension(&self) -> (usize, usize) {
        if self.cells.is_empty() {
            return (0, 0);
        }
        let w = self.cells.iter().map(|c| c.x).max().unwrap_or(0);
        let h = self.cells.iter().map(|c| c.y).max().unwrap_or(0);
        (w as usize + 1, h as usize + 1)
    }

    pub fn transform(&self, symmetry: Symmetry) -> Self {
        Self::from_cells(self.cells.iter().map(|c| Cell::from(symmetry.apply((c.x, c.y)))))
    }

    /// Quarter-turn clockwise
    pub fn rotate(&self) -> Self {
        self.transform(Symmetry {
            rotation: Rotation::R90,
            ..Symmetry::IDENTITY
        })
    }

    /// Mirror image across the X axis
    pub fn reflect(&self) -> Self {
        self.transform(Symmetry {
            reflected: true,
            ..Symmetry::IDENTITY
        })
    }

    /// The 8 images of this polyomino under the dihedral group, lazily,
    /// starting with itself
    pub fn orbit(&self) -> impl Iterator<Item = Polyomino> + '_ {
        Symmetry::ORBIT.into_iter().map(move |s| self.transform(s))
    }

    pub fn has_hole(&self) -> bool {
        hole::has_hole(self)
    }

    /// Trace the outer contour, failing on polyominoes with holes
    pub fn boundary_word(&self) -> Result<BoundaryWord, TraceError> {
        if self.has_hole() {
            return Err(TraceError::HasHole);
        }
        Ok(BoundaryWord::new(boundary::trace(self))?)
    }
}

/// Return all polyominoes that can be created by adding a square to this polyomino.
/// Candidates come in cell order, then in the order of [`Cell::neighbours`],
/// and may contain several translates of the same shape.
pub fn decline(p: &Polyomino) -> Vec<Polyomino> {
    let mut polyominoes = vec![];

    for &cell in p.cells.iter() {
        for neighbour in cell.neighbours() {
            if !p.contains(neighbour) {
                let cells = p.cells.iter().copied().chain(std::iter::once(neighbour));
                polyominoes.push(Polyomino::from_cells(cells));
            }
        }
    }

    polyominoes
}

impl Debug for Polyomino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimension();
        for y in (0..h as i32).rev() {
            for x in 0..w as i32 {
                if self.contains(Cell::new(x, y)) {
                    f.write_char('O')?;
                } else {
                    f.write_char('.')?;
                }
            }
            if y != 0 {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

/// The list form used in records: `[(0, 0), (1, 0)]`
impl Display for Polyomino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, c) in self.cells.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "({}, {})", c.x, c.y)?;
        }
        f.write_char(']')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_tromino() -> Polyomino {
        Polyomino::from_cells([(5, 5), (5, 6), (6, 5)].map(Cell::from))
    }

    #[test]
    fn canonical_form_is_translated_and_sorted() {
        let p = Polyomino::from_cells([(3, -1), (2, -1), (2, 0)].map(Cell::from));
        assert_eq!(p.cells(), &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 0)]);
        assert_eq!(Polyomino::from_cells(p.cells().iter().copied()), p);
        assert_eq!(p, l_tromino());
    }

    #[test]
    fn four_rotations_are_identity() {
        let p = Polyomino::from_cells([(0, 0), (1, 0), (2, 0), (2, 1)].map(Cell::from));
        let mut q = p.clone();
        for _ in 0..4 {
            q = q.rotate();
        }
        assert_eq!(q, p);
        assert_ne!(p.rotate(), p);
        assert_eq!(p.reflect().reflect(), p);
    }

    #[test]
    fn orbit_of_l_tetromino_has_eight_shapes() {
        let p = Polyomino::from_cells([(0, 0), (1, 0), (2, 0), (2, 1)].map(Cell::from));
        let mut orbit: Vec<_> = p.orbit().collect();
        assert_eq!(orbit[0], p);
        orbit.sort();
        orbit.dedup();
        assert_eq!(orbit.len(), 8);
    }

    #[test]
    fn orbit_of_square_is_trivial() {
        let square = Polyomino::from_cells([(0, 0), (0, 1), (1, 0), (1, 1)].map(Cell::from));
        assert!(square.orbit().all(|q| q == square));
    }

    #[test]
    fn decline_adds_one_cell() {
        let candidates = decline(&Polyomino::trivial());
        assert_eq!(candidates.len(), 4);
        assert!(candidates.iter().all(|p| p.square_count() == 2));
        assert_eq!(candidates[0].dimension(), (2, 1));
        assert_eq!(candidates[2].dimension(), (1, 2));

        // 3 cells with 4 neighbours each, minus the 2 inner edges seen from both sides
        assert_eq!(decline(&l_tromino()).len(), 8);
    }

    #[test]
    fn boundary_word_of_holey_polyomino() {
        let ring = Polyomino::from_cells(
            [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)].map(Cell::from),
        );
        assert_eq!(ring.boundary_word(), Err(TraceError::HasHole));

        let word = l_tromino().boundary_word().unwrap();
        assert_eq!(word.to_string(), "00121233");
    }

    #[test]
    fn display_and_debug() {
        let p = l_tromino();
        assert_eq!(p.to_string(), "[(0, 0), (0, 1), (1, 0)]");
        assert_eq!(format!("{p:?}"), "O.\nOO");
    }
}
