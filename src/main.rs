use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use polyominos::record::read_figures;
use polyominos::tikz::{tikz_matrix, TikzLayout};
use polyominos::{composed, free_polyominoes, Figure, RecordError};

/// Enumerate free polyominoes and find the ones with a composed boundary word
#[derive(Parser)]
#[command(name = "prime-polyominos")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write every free polyomino without hole up to some number of cells
    Free {
        /// File to which records are written
        output: PathBuf,
        /// Maximum number of cells
        #[arg(long)]
        max_cells: usize,
    },
    /// Write the records of a file whose boundary word is composed
    Composed {
        output: PathBuf,
        /// File from which records are read
        #[arg(long)]
        input: PathBuf,
    },
    /// Draw the records of a file as a TikZ matrix
    Tikz {
        output: PathBuf,
        #[arg(long)]
        input: PathBuf,
        /// Number of columns in the matrix
        #[arg(long, default_value_t = 10)]
        num_cols: usize,
        /// Width of each column, in cm
        #[arg(long, default_value_t = 10)]
        col_width: usize,
        /// Height of each row, in cm
        #[arg(long, default_value_t = 10)]
        row_height: usize,
    },
    /// Print how many free polyominoes there are for each number of cells
    Count {
        #[arg(long)]
        max_cells: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Free { output, max_cells } => {
            let mut figures: Vec<Figure> = free_polyominoes(max_cells).collect();
            figures.sort_by_key(|f| (f.polyomino.square_count(), f.word.len()));
            write_records(&output, &figures)?;
            info!("Wrote {} polyominoes to {}", figures.len(), output.display());
        }
        Command::Composed { output, input } => {
            let figures: Vec<Figure> = composed(read_records(&input)?).collect();
            write_records(&output, &figures)?;
            info!("Wrote {} composed polyominoes to {}", figures.len(), output.display());
        }
        Command::Tikz {
            output,
            input,
            num_cols,
            col_width,
            row_height,
        } => {
            let layout = TikzLayout {
                num_cols,
                col_width,
                row_height,
            };
            let figures = read_records(&input)?;
            std::fs::write(&output, tikz_matrix(&figures, &layout))
                .with_context(|| format!("failed to write {}", output.display()))?;
        }
        Command::Count { max_cells } => {
            let mut figures = free_polyominoes(max_cells);
            let mut composed = vec![0usize; max_cells + 1];
            for f in figures.by_ref() {
                if f.is_composed() {
                    composed[f.polyomino.square_count()] += 1;
                }
            }

            for (i, stats) in figures.database().all_stats().take(max_cells).enumerate() {
                let squares = i + 1;
                println!(
                    "With {squares} squares: {} free, {} without hole, {} composed ({} redundancies)",
                    stats.accepted,
                    stats.hole_free,
                    composed[squares],
                    stats.redundant()
                );
            }
        }
    }

    Ok(())
}

/// Valid records of `path`; invalid lines are logged and skipped
fn read_records(path: &Path) -> Result<Vec<Figure>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut figures = vec![];
    for (i, record) in read_figures(BufReader::new(file)).enumerate() {
        match record {
            Ok(figure) => figures.push(figure),
            Err(RecordError::Io(e)) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
            Err(e) => warn!("{}: skipping record {}: {e}", path.display(), i + 1),
        }
    }
    Ok(figures)
}

fn write_records(path: &Path, figures: &[Figure]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for figure in figures {
        writeln!(out, "{figure}")?;
    }
    out.flush()?;
    Ok(())
}
