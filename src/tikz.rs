use std::fmt;

use crate::boundary::start_cell;
use crate::enumeration::Figure;

/// Placement of figures in a TikZ matrix, in centimeters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TikzLayout {
    pub num_cols: usize,
    pub col_width: usize,
    pub row_height: usize,
}

impl Default for TikzLayout {
    fn default() -> Self {
        Self {
            num_cols: 10,
            col_width: 10,
            row_height: 10,
        }
    }
}

/// Draw commands for the cells of a figure and its boundary path
pub fn tikz_figure(figure: &Figure) -> String {
    TikzFigure(figure).to_string()
}

/// A `tikzpicture` laying out the figures row by row, each centered in its slot
pub fn tikz_matrix(figures: &[Figure], layout: &TikzLayout) -> String {
    TikzMatrix { figures, layout }.to_string()
}

struct TikzFigure<'a>(&'a Figure);

impl fmt::Display for TikzFigure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let figure = self.0;
        for c in figure.polyomino.cells() {
            let (x, y) = (i64::from(c.x), i64::from(c.y));
            writeln!(f, "  \\draw[cell] ({x}, {y}) rectangle ({}, {});", x + 1, y + 1)?;
        }

        if let Some(start) = start_cell(&figure.polyomino) {
            write!(f, "  \\draw[boundary] ({}, {})", start.x, start.y)?;
            for d in figure.word.letters() {
                let (dx, dy) = d.step();
                write!(f, " -- ++ ({dx},{dy})")?;
            }
            f.write_str(";\n")?;
        }
        Ok(())
    }
}

struct TikzMatrix<'a> {
    figures: &'a [Figure],
    layout: &'a TikzLayout,
}

impl fmt::Display for TikzMatrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.layout;
        writeln!(
            f,
            "\\begin{{tikzpicture}}[cell/.style={{fill=black!20, densely dotted}}, boundary/.style={{very thick}}]"
        )?;
        let num_cols = layout.num_cols.max(1);

        for (i, figure) in self.figures.iter().enumerate() {
            let (w, h) = figure.polyomino.dimension();
            let x = ((i % num_cols) * layout.col_width) as f64
                + (layout.col_width as f64 - w.saturating_sub(1) as f64) / 2.0;
            let y = -(((i / num_cols) * layout.row_height) as f64)
                + (layout.row_height as f64 - h.saturating_sub(1) as f64) / 2.0;

            writeln!(f, "  \\begin{{scope}}[xshift={x}cm,yshift={y}cm]")?;
            write!(f, "{}", TikzFigure(figure))?;
            writeln!(f, "  \\end{{scope}}")?;
        }

        writeln!(f, "\\end{{tikzpicture}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure(record: &str) -> Figure {
        record.parse().unwrap()
    }

    #[test]
    fn unit_square_drawing() {
        assert_eq!(
            tikz_figure(&figure("0123:[(0, 0)]")),
            "  \\draw[cell] (0, 0) rectangle (1, 1);\n  \\draw[boundary] (0, 0) -- ++ (1,0) -- ++ (0,1) -- ++ (-1,0) -- ++ (0,-1);\n"
        );
    }

    #[test]
    fn cells_at_the_edge_of_the_range() {
        let s = tikz_figure(&figure("0123:[(0, 0), (2147483646, 0)]"));
        assert!(s.contains("(2147483646, 0) rectangle (2147483647, 1)"));
    }

    #[test]
    fn matrix_wraps_rows() {
        let figures = vec![figure("0123:[(0, 0)]"); 3];
        let layout = TikzLayout {
            num_cols: 2,
            col_width: 4,
            row_height: 6,
        };
        let s = tikz_matrix(&figures, &layout);
        assert!(s.starts_with("\\begin{tikzpicture}"));
        assert!(s.ends_with("\\end{tikzpicture}\n"));
        assert_eq!(s.matches("\\begin{scope}").count(), 3);
        assert!(s.contains("[xshift=2cm,yshift=3cm]"));
        assert!(s.contains("[xshift=6cm,yshift=3cm]"));
        assert!(s.contains("[xshift=2cm,yshift=-3cm]"));
    }
}
