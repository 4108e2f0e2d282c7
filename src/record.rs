//! Line records of figures: `<boundary word>:<cells>`, for example
//! `001223:[(0, 0), (1, 0)]`. The cell list is written the way a list of
//! pairs prints in Python, which is the format existing figure files use.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::enumeration::Figure;
use crate::error::RecordError;
use crate::polyomino::{Cell, Polyomino};
use crate::word::BoundaryWord;

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.word, self.polyomino)
    }
}

impl FromStr for Figure {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, cells) = s.trim().split_once(':').ok_or(RecordError::MissingSeparator)?;
        let word: BoundaryWord = word.trim().parse()?;
        let cells = parse_cells(cells)?;
        if cells.is_empty() {
            return Err(RecordError::Empty);
        }

        Ok(Figure {
            word,
            polyomino: Polyomino::from_cells(cells),
        })
    }
}

/// Parse `[(x, y), (x, y), ...]`
fn parse_cells(s: &str) -> Result<Vec<Cell>, RecordError> {
    let inner = s
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| RecordError::Cells(format!("expected a bracketed list, got {s:?}")))?
        .trim();

    let mut cells = vec![];
    let mut rest = inner;
    while !rest.is_empty() {
        let open = rest
            .strip_prefix('(')
            .ok_or_else(|| RecordError::Cells(format!("expected '(' at {rest:?}")))?;
        let (pair, tail) = open
            .split_once(')')
            .ok_or_else(|| RecordError::Cells(format!("unclosed pair at {rest:?}")))?;
        let (x, y) = pair
            .split_once(',')
            .ok_or_else(|| RecordError::Cells(format!("expected a pair, got ({pair})")))?;
        let coordinate = |v: &str| {
            v.trim()
                .parse::<i32>()
                .map_err(|e| RecordError::Cells(format!("bad coordinate {v:?}: {e}")))
        };
        cells.push(Cell::new(coordinate(x)?, coordinate(y)?));

        let tail = tail.trim_start();
        rest = match tail.strip_prefix(',') {
            Some(tail) => tail.trim_start(),
            None if tail.is_empty() => tail,
            None => return Err(RecordError::Cells(format!("expected ',' at {tail:?}"))),
        };
    }

    check_span(cells.iter().map(|c| c.x), 'x')?;
    check_span(cells.iter().map(|c| c.y), 'y')?;
    Ok(cells)
}

/// Cells are translated to the origin and drawn up to `x + 1`, so the
/// span of each coordinate must stay below `i32::MAX`
fn check_span<I>(values: I, axis: char) -> Result<(), RecordError>
where
    I: Iterator<Item = i32> + Clone,
{
    let (Some(min), Some(max)) = (values.clone().min(), values.max()) else {
        return Ok(());
    };
    match max.checked_sub(min) {
        Some(span) if span < i32::MAX => Ok(()),
        _ => Err(RecordError::Cells(format!(
            "{axis} coordinates from {min} to {max} are too far apart"
        ))),
    }
}

/// Reads one figure per non-blank line. Reading stops after an I/O error.
pub fn read_figures<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Figure, RecordError>> {
    let mut failed = false;
    reader.lines().filter_map(move |line| {
        if failed {
            return None;
        }
        match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(line.parse()),
            Err(e) => {
                failed = true;
                Some(Err(RecordError::Io(e)))
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::free_polyominoes;

    #[test]
    fn figures_round_trip() {
        for figure in free_polyominoes(5) {
            let line = figure.to_string();
            assert_eq!(line.parse::<Figure>().unwrap(), figure, "{line}");
        }
    }

    #[test]
    fn known_records() {
        let f: Figure = "0123:[(0, 0)]".parse().unwrap();
        assert_eq!(f.polyomino, Polyomino::trivial());
        assert_eq!(f.to_string(), "0123:[(0, 0)]");

        let f: Figure = " 001223:[(3,5),(4, 5)] ".parse().unwrap();
        assert_eq!(f.to_string(), "001223:[(0, 0), (1, 0)]");
    }

    #[test]
    fn malformed_records() {
        assert!(matches!("0123".parse::<Figure>(), Err(RecordError::MissingSeparator)));
        assert!(matches!("0124:[(0, 0)]".parse::<Figure>(), Err(RecordError::Word(_))));
        assert!(matches!("0123:[]".parse::<Figure>(), Err(RecordError::Empty)));
        assert!(matches!("0123:[(0 0)]".parse::<Figure>(), Err(RecordError::Cells(_))));
        assert!(matches!("0123:[(0, 0)(1, 0)]".parse::<Figure>(), Err(RecordError::Cells(_))));
        assert!(matches!("0123:(0, 0)".parse::<Figure>(), Err(RecordError::Cells(_))));
    }

    #[test]
    fn coordinates_too_far_apart() {
        let far = "0123:[(-2147483648, 0), (2147483647, 0)]".parse::<Figure>();
        assert!(matches!(far, Err(RecordError::Cells(_))));
        let far = "0123:[(0, -1), (0, 2147483647)]".parse::<Figure>();
        assert!(matches!(far, Err(RecordError::Cells(_))));

        let f: Figure = "001223:[(2147483646, -7), (2147483647, -7)]".parse().unwrap();
        assert_eq!(f.to_string(), "001223:[(0, 0), (1, 0)]");
    }

    #[test]
    fn reader_stops_after_io_error() {
        let input: &[u8] = b"0123:[(0, 0)]\n\xff\n001223:[(0, 0), (1, 0)]\n";
        let records: Vec<_> = read_figures(input).collect();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_ok());
        assert!(matches!(records[1], Err(RecordError::Io(_))));
    }

    #[test]
    fn reader_skips_blank_lines() {
        let input = "0123:[(0, 0)]\n\n001223:[(0, 0), (1, 0)]\n0:[(0, 0)]\n";
        let records: Vec<_> = read_figures(input.as_bytes()).collect();
        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok() && records[1].is_ok());
        assert!(matches!(records[2], Err(RecordError::Word(_))));
    }
}
