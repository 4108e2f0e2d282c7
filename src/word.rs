use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::direction::Direction;
use crate::error::WordError;

/// A closed, self-avoiding word over the Freeman chain code.
///
/// The word is read cyclically: its last letter is the step closing the
/// path back to the starting point, which is why that step is the only
/// one allowed to land on an already visited point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoundaryWord {
    letters: Vec<Direction>,
}

impl BoundaryWord {
    pub fn new(letters: Vec<Direction>) -> Result<Self, WordError> {
        let (dx, dy) = letters.iter().fold((0i64, 0i64), |(x, y), d| {
            let (dx, dy) = d.step();
            (x + dx as i64, y + dy as i64)
        });
        if (dx, dy) != (0, 0) {
            return Err(WordError::NotClosed { dx, dy });
        }

        let mut visited = HashSet::with_capacity(letters.len());
        let (mut x, mut y) = (0i64, 0i64);
        visited.insert((x, y));
        for d in letters.iter().take(letters.len().saturating_sub(1)) {
            let (dx, dy) = d.step();
            x += dx as i64;
            y += dy as i64;
            if !visited.insert((x, y)) {
                return Err(WordError::NotSimple { x, y });
            }
        }

        Ok(Self { letters })
    }

    /// Build a word from raw Freeman digits
    pub fn from_letters(letters: &[u8]) -> Result<Self, WordError> {
        let letters = letters
            .iter()
            .enumerate()
            .map(|(index, &letter)| {
                Direction::try_from(letter).map_err(|_| WordError::InvalidAlphabet { letter, index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(letters)
    }

    pub fn letters(&self) -> &[Direction] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Signed number of full turns made while walking the word once.
    /// Equals 1 for a counter-clockwise contour, -1 for a clockwise one.
    pub fn turning_number(&self) -> i32 {
        let n = self.letters.len();
        let turns: i32 = (0..n)
            .map(|i| {
                let turn = (self.letters[(i + 1) % n].index() + 4 - self.letters[i].index()) % 4;
                match turn {
                    1 => 1,
                    3 => -1,
                    _ => 0,
                }
            })
            .sum();
        turns.div_euclid(4)
    }

    /// Ascending indices `>= from` holding `letter`
    pub fn occurrences(&self, letter: Direction, from: usize) -> impl Iterator<Item = usize> + '_ {
        self.letters
            .iter()
            .enumerate()
            .skip(from)
            .filter(move |&(_, &d)| d == letter)
            .map(|(i, _)| i)
    }

    /// The same contour read from index `offset`.
    /// Rotating a closed simple word keeps it closed and simple.
    pub fn rotated(&self, offset: usize) -> Self {
        let mut letters = self.letters.clone();
        if !letters.is_empty() {
            letters.rotate_left(offset % self.letters.len());
        }
        Self { letters }
    }
}

impl fmt::Display for BoundaryWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.letters.iter() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for BoundaryWord {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .bytes()
            .enumerate()
            .map(|(index, b)| match b {
                b'0'..=b'9' => Ok(b - b'0'),
                _ => Err(WordError::InvalidAlphabet { letter: b, index }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_letters(&digits)
    }
}
