use std::fmt;

use crate::direction::{hat, Direction, FREEMAN};
use crate::word::BoundaryWord;

/// A substitution over the Freeman alphabet, possibly partial.
///
/// Images are stored in one slot per letter. The type is a plain value:
/// cloning it gives an independent morphism, which is what the
/// factorization search relies on when it backtracks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Morphism {
    images: [Option<Vec<Direction>>; 4],
}

impl Morphism {
    pub fn new() -> Self {
        Self::default()
    }

    /// The morphism mapping letters 0, 1, 2, 3 to the given images, in order
    pub fn from_images(images: [Vec<Direction>; 4]) -> Self {
        Self {
            images: images.map(Some),
        }
    }

    pub fn image(&self, letter: Direction) -> Option<&[Direction]> {
        self.images[letter.index()].as_deref()
    }

    /// Set the image of `letter` and, to keep the morphism homologous,
    /// the image of its complement to the hat of `image`
    pub fn assign(&mut self, letter: Direction, image: &[Direction]) {
        self.images[letter.complement().index()] = Some(hat(image));
        self.images[letter.index()] = Some(image.to_vec());
    }

    /// Whether every letter has an image
    pub fn is_complete(&self) -> bool {
        self.images.iter().all(Option::is_some)
    }

    /// Total length of the images
    pub fn size(&self) -> usize {
        self.images.iter().flatten().map(Vec::len).sum()
    }

    /// The word `φ(0)φ(1)φ(2)φ(3)`, if the morphism is complete
    pub fn tile(&self) -> Option<Vec<Direction>> {
        if !self.is_complete() {
            return None;
        }
        Some(self.images.iter().flatten().flatten().copied().collect())
    }

    /// Returns true if the morphism induces a parallelogram tile,
    /// i.e. `φ(0123)` is a boundary word
    pub fn is_homologous(&self) -> bool {
        match self.tile() {
            Some(word) => BoundaryWord::new(word).is_ok(),
            None => false,
        }
    }

    /// Returns true if all assigned images have length one
    pub fn is_one_uniform(&self) -> bool {
        self.images.iter().flatten().all(|image| image.len() == 1)
    }

    pub fn is_non_trivial_homologous(&self) -> bool {
        self.is_homologous() && !self.is_one_uniform()
    }

    /// Image of `word`, or `None` if a letter of `word` has no image
    pub fn apply(&self, word: &[Direction]) -> Option<Vec<Direction>> {
        let mut result = Vec::new();
        for &letter in word {
            result.extend_from_slice(self.image(letter)?);
        }
        Some(result)
    }
}

impl fmt::Display for Morphism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, letter) in FREEMAN.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{letter}: ")?;
            match self.image(*letter) {
                Some(image) => {
                    for d in image {
                        write!(f, "{d}")?;
                    }
                }
                None => f.write_str("_")?,
            }
        }
        f.write_str("}")
    }
}
