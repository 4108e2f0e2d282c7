use std::fmt::{self, Debug, Write};

use crate::polyomino::Polyomino;

/// A dense boolean grid over the bounding box of a polyomino, grown by
/// `MARGIN` cells on every side so that the cells just outside the
/// polyomino can be stored and queried too.
///
/// ```text
///  ┌──────────┐
///  │ ┌──────┐ │
///  │ │x     │ │
///  │ │      │ │
///  │ └──────┘ │
///  └──────────┘
///   (-1, -1)
/// ```
///
/// Coordinates are those of the polyomino; queries outside the grid
/// return false.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

pub const MARGIN: i32 = 1;

impl Grid {
    /// An empty grid able to hold all elements of (-1, -1) -> (w, h) **inclusive**,
    /// where (w, h) is the dimension of the polyomino
    pub fn new(dimension: (usize, usize)) -> Self {
        let width = dimension.0 + 2 * MARGIN as usize;
        let height = dimension.1 + 2 * MARGIN as usize;
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    pub fn from_polyomino(p: &Polyomino) -> Self {
        let mut grid = Self::new(p.dimension());
        for c in p.cells() {
            grid.set(c.x, c.y);
        }
        grid
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (gx, gy) = (x + MARGIN, y + MARGIN);
        if gx < 0 || gy < 0 || gx as usize >= self.width || gy as usize >= self.height {
            None
        } else {
            Some(gy as usize * self.width + gx as usize)
        }
    }

    /// Lower-left and upper-right corners of the grid, inclusive
    pub fn bounds(&self) -> ((i32, i32), (i32, i32)) {
        (
            (-MARGIN, -MARGIN),
            (self.width as i32 - MARGIN - 1, self.height as i32 - MARGIN - 1),
        )
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map_or(false, |i| self.cells[i])
    }

    /// Set the element at (x, y) to true. Does nothing outside the grid.
    pub fn set(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = true;
        }
    }

    /// Return the number of elements set to true
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Total number of elements, margin included
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                if self.cells[y * self.width + x] {
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
