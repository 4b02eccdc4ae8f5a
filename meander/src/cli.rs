//! Command-line argument parsing and validation.
//!
//! Everything here runs before the core is touched: by the time a grid is
//! built, dimensions are in range and every blocked coordinate is inside
//! it, so the core's fatal bounds checks are unreachable from user input.

use std::io::BufRead;
use std::path::PathBuf;

use clap::Parser;
use meander_core::Coord;
use meander_search::DEFAULT_WORKERS;

/// Adaptive path finding in an NxM grid.
#[derive(Parser, Debug)]
#[command(name = "meander", version, about)]
pub struct Args {
    /// Number of grid rows.
    #[arg(long)]
    pub rows: u16,

    /// Number of grid columns.
    #[arg(long)]
    pub cols: u16,

    /// Target path length.
    #[arg(long)]
    pub path_length: usize,

    /// Blocked cell as `row,col`; repeat for several cells.
    #[arg(long = "blocked-cell", value_name = "ROW,COL", value_parser = parse_coord)]
    pub blocked_cells: Vec<Coord>,

    /// File of blocked cells, one `row,col` per line; `#` lines are
    /// comments.
    #[arg(long, value_name = "FILE")]
    pub blocked_cells_file: Option<PathBuf>,

    /// Race worker threads instead of searching on one thread.
    #[arg(long)]
    pub parallel: bool,

    /// Worker thread count for --parallel.
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Random seed; omit for a fresh one per run.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Parse a `row,col` pair.
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
    let row = row
        .trim()
        .parse::<u16>()
        .map_err(|e| format!("bad row in `{s}`: {e}"))?;
    let col = col
        .trim()
        .parse::<u16>()
        .map_err(|e| format!("bad column in `{s}`: {e}"))?;
    Ok(Coord::new(row, col))
}

/// Parse the blocked-cells file format from any line source. Malformed
/// lines are skipped with a warning, matching the file's forgiving
/// contract; only I/O failures are errors.
pub fn parse_blocked_cells(reader: impl BufRead) -> std::io::Result<Vec<Coord>> {
    let mut cells = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_coord(line) {
            Ok(c) => cells.push(c),
            Err(e) => log::warn!("skipping malformed blocked-cell line `{line}`: {e}"),
        }
    }
    Ok(cells)
}

impl Args {
    /// Collect blocked cells from the command line and the optional file,
    /// and reject anything the core would treat as a fatal misuse.
    pub fn validated_blocked_cells(&self) -> Result<Vec<Coord>, String> {
        if self.rows == 0 || self.cols == 0 {
            return Err("--rows and --cols must be positive".into());
        }
        if (self.rows as usize) * (self.cols as usize) < 4 {
            return Err(format!(
                "a {}x{} grid is too small; at least 4 cells are required",
                self.rows, self.cols
            ));
        }
        if self.path_length == 0 {
            return Err("--path-length must be positive".into());
        }
        if self.parallel && self.workers == 0 {
            return Err("--workers must be positive".into());
        }

        let mut cells = self.blocked_cells.clone();
        if let Some(path) = &self.blocked_cells_file {
            let file = std::fs::File::open(path)
                .map_err(|e| format!("cannot open {}: {e}", path.display()))?;
            cells.extend(parse_blocked_cells(std::io::BufReader::new(file))
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?);
        }

        for &c in &cells {
            if c.row >= self.rows || c.col >= self.cols {
                return Err(format!(
                    "blocked cell {c} is outside the {}x{} grid",
                    self.rows, self.cols
                ));
            }
        }
        if cells.len() > (self.rows as usize) * (self.cols as usize) {
            return Err("more blocked cells than the grid holds".into());
        }
        Ok(cells)
    }
}
