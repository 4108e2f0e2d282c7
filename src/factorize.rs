//! Factorization of boundary words by homologous morphisms.
//!
//! A boundary word `w` is *composed* when some rotation of it can be cut
//! into images of a non-trivial homologous morphism `φ`, that is
//! `w = φ(u)` for a shorter word `u`. The polyomino coded by `w` is then
//! built from copies of the parallelogram tile `φ(0123)`. A word with no
//! such factorization is *prime*.
//!
//! The search is a depth-first backtracking over the possible images. It
//! tries rotations starting on a `0` in increasing order and, at each
//! letter without an image, the candidate images in increasing length, so
//! the witness returned is always the same for a given word. Its cost is
//! exponential in the length of the word in the worst case.

use log::trace;

use crate::direction::Direction;
use crate::morphism::Morphism;
use crate::word::BoundaryWord;

#[cfg(test)]
mod tests;

/// A witness that a boundary word is composed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factorization {
    /// The word rotated left by `offset` is the image of `preimage`
    pub offset: usize,
    pub morphism: Morphism,
    pub preimage: Vec<Direction>,
}

impl BoundaryWord {
    /// Returns true if the word admits no non-trivial factorization
    pub fn is_prime(&self) -> bool {
        self.factorize().is_none()
    }

    /// Finds the first factorization of the word, if any
    pub fn factorize(&self) -> Option<Factorization> {
        for offset in self.occurrences(Direction::East, 0) {
            let word = self.rotated(offset);
            let search = Search { word: &word };
            let mut preimage = Vec::new();
            if let Some(morphism) = search.run(Morphism::new(), 0, &mut preimage) {
                return Some(Factorization {
                    offset,
                    morphism,
                    preimage,
                });
            }
        }
        None
    }
}

struct Search<'a> {
    word: &'a BoundaryWord,
}

impl Search<'_> {
    /// The morphism must not be the unit square nor cover the whole word
    fn is_non_trivial(&self, morphism: &Morphism) -> bool {
        morphism.is_non_trivial_homologous() && morphism.size() < self.word.len()
    }

    /// Decodes `word[i..]` extending `morphism`. On success `preimage` holds
    /// the decoded letters; on failure it is left as it was given.
    fn run(&self, morphism: Morphism, i: usize, preimage: &mut Vec<Direction>) -> Option<Morphism> {
        trace!("{morphism} {i}");
        let letters = self.word.letters();
        if i >= letters.len() {
            return self.is_non_trivial(&morphism).then_some(morphism);
        }

        let letter = letters[i];
        if let Some(image) = morphism.image(letter) {
            if !letters[i..].starts_with(image) {
                return None;
            }
            let k = image.len();
            preimage.push(letter);
            let found = self.run(morphism, i + k, preimage);
            if found.is_none() {
                preimage.pop();
            }
            return found;
        }

        for j in self.word.occurrences(letter, i) {
            let mut candidate = morphism.clone();
            candidate.assign(letter, &letters[i..=j]);
            preimage.push(letter);
            if let Some(phi) = self.run(candidate, j + 1, preimage) {
                return Some(phi);
            }
            preimage.pop();
        }
        None
    }
}
