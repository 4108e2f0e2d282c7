//! Enumeration of free polyominoes and classification of their boundary
//! words as prime or composed.
//!
//! A polyomino without hole is coded by the Freeman chain code of its
//! contour, a word over `{0, 1, 2, 3}` for the unit steps east, north,
//! west and south. The word is composed when it is the image of a shorter
//! boundary word under a non-trivial homologous morphism, and prime
//! otherwise.
//!
//! ```text
//! free_polyominoes(n) ──> Figure { word, polyomino } ──> word.factorize()
//!        │                        ▲
//!    Database, decline     boundary::trace, hole::has_hole
//! ```

pub mod boundary;
pub mod database;
pub mod direction;
pub mod enumeration;
pub mod error;
pub mod factorize;
pub mod grid;
pub mod hole;
pub mod morphism;
pub mod polyomino;
pub mod record;
pub mod rotation;
pub mod tikz;
pub mod word;

pub use direction::Direction;
pub use enumeration::{composed, free_polyominoes, Figure, FreePolyominoes};
pub use error::{RecordError, TraceError, WordError};
pub use factorize::Factorization;
pub use morphism::Morphism;
pub use polyomino::{Cell, Polyomino};
pub use word::BoundaryWord;
