use thiserror::Error;

/// Reasons a sequence of letters is not a boundary word.
/// Checks are made in declaration order, so a word with a bad letter
/// always reports `InvalidAlphabet` first.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum WordError {
    #[error("invalid letter {letter} at index {index}: expected one of 0, 1, 2, 3")]
    InvalidAlphabet { letter: u8, index: usize },
    #[error("boundary word is not closed: net displacement is ({dx}, {dy})")]
    NotClosed { dx: i64, dy: i64 },
    #[error("boundary word is not simple: point ({x}, {y}) is visited twice")]
    NotSimple { x: i64, y: i64 },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    #[error("polyomino has an interior hole")]
    HasHole,
    #[error(transparent)]
    Word(#[from] WordError),
}

/// Errors raised while reading `<word>:<cells>` records
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("missing ':' between boundary word and cells")]
    MissingSeparator,
    #[error("invalid boundary word: {0}")]
    Word(#[from] WordError),
    #[error("malformed cell list: {0}")]
    Cells(String),
    #[error("record has no cells")]
    Empty,
    #[error("failed to read record: {0}")]
    Io(#[from] std::io::Error),
}
