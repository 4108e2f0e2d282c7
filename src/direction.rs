use std::fmt;

use crate::error::WordError;

/// A letter of the Freeman chain code: one unit step on the integral grid
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

pub const FREEMAN: [Direction; 4] = [
    Direction::East,
    Direction::North,
    Direction::West,
    Direction::South,
];

impl Direction {
    pub fn from_index(i: usize) -> Self {
        FREEMAN[i % 4]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// The opposite direction: 0 <-> 2 and 1 <-> 3
    pub fn complement(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Quarter-turn counter-clockwise
    pub fn turn_left(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Quarter-turn clockwise
    pub fn turn_right(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::North => (0, 1),
            Direction::West => (-1, 0),
            Direction::South => (0, -1),
        }
    }

    /// Moves (x, y) by one unit in this direction
    pub fn advance(self, (x, y): (i32, i32)) -> (i32, i32) {
        let (dx, dy) = self.step();
        (x + dx, y + dy)
    }
}

impl TryFrom<u8> for Direction {
    type Error = WordError;

    fn try_from(letter: u8) -> Result<Self, Self::Error> {
        match letter {
            0..=3 => Ok(FREEMAN[letter as usize]),
            _ => Err(WordError::InvalidAlphabet { letter, index: 0 }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Reverses `image` and complements each letter
pub fn hat(image: &[Direction]) -> Vec<Direction> {
    image.iter().rev().map(|d| d.complement()).collect()
}
