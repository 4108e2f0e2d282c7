use std::collections::VecDeque;

use log::warn;

use crate::boundary;
use crate::database::Database;
use crate::polyomino::{decline, Polyomino};
use crate::word::BoundaryWord;

/// A hole-free polyomino together with its boundary word
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Figure {
    pub word: BoundaryWord,
    pub polyomino: Polyomino,
}

impl Figure {
    pub fn is_composed(&self) -> bool {
        !self.word.is_prime()
    }
}

/// Lazily yields one figure per free hole-free polyomino with at most
/// `max_cells` cells, by increasing number of cells.
///
/// Growth goes one generation at a time: every free polyomino of the
/// current generation, holes included, is declined into candidates with
/// one more cell, and each candidate is kept only if none of its 8
/// symmetric images was kept before.
pub struct FreePolyominoes {
    max_cells: usize,
    db: Database,
    candidates: VecDeque<Polyomino>,
    started: bool,
}

/// Enumerates free polyominoes from scratch, see [`FreePolyominoes`]
pub fn free_polyominoes(max_cells: usize) -> FreePolyominoes {
    FreePolyominoes {
        max_cells,
        db: Database::new(),
        candidates: VecDeque::new(),
        started: false,
    }
}

impl FreePolyominoes {
    /// Growth statistics, complete for every generation already exhausted
    pub fn database(&self) -> &Database {
        &self.db
    }

    fn figure(p: Polyomino) -> Option<Figure> {
        match BoundaryWord::new(boundary::trace(&p)) {
            Ok(word) => Some(Figure { word, polyomino: p }),
            Err(e) => {
                warn!("Skipping polyomino with invalid contour ({e}):\n{p:?}");
                None
            }
        }
    }
}

impl Iterator for FreePolyominoes {
    type Item = Figure;

    fn next(&mut self) -> Option<Figure> {
        if !self.started {
            self.started = true;
            if self.max_cells == 0 {
                return None;
            }
            if let Some(figure) = Self::figure(Polyomino::trivial()) {
                return Some(figure);
            }
        }

        loop {
            if let Some(candidate) = self.candidates.pop_front() {
                let polyomino = match self.db.register(candidate) {
                    Some(p) if !p.has_hole() => p.clone(),
                    _ => continue,
                };
                self.db.mark_hole_free();
                match Self::figure(polyomino) {
                    Some(figure) => return Some(figure),
                    None => continue,
                }
            }

            if self.db.square_count() >= self.max_cells {
                return None;
            }

            match self.db.pop() {
                Some(seed) => self.candidates = decline(&seed).into(),
                None => self.db.flush(),
            }
        }
    }
}

/// Keeps the figures whose boundary word is composed
pub fn composed<I>(figures: I) -> impl Iterator<Item = Figure>
where
    I: IntoIterator<Item = Figure>,
{
    figures.into_iter().filter(Figure::is_composed)
}
