//! Plain-text level format.
//!
//! One row per line, one digit per column from `{0, 1, 2}`. Rows are
//! trimmed and blank lines skipped; short rows are padded with `0` up to the
//! widest row.

use std::fmt;

use crate::types::{Cell, Grid};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelError {
    /// No non-empty line survived trimming.
    MalformedLevel,
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::MalformedLevel => write!(f, "malformed level: no non-empty rows"),
        }
    }
}

impl std::error::Error for LevelError {}

/// Parse level text into a grid.
///
/// Characters other than `1` and `2` decode as empty, so the result only
/// ever holds valid cell codes.
pub fn parse(text: &str) -> Result<Grid, LevelError> {
    let rows: Vec<Vec<Cell>> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(Cell::from_char).collect())
        .collect();

    if rows.is_empty() {
        return Err(LevelError::MalformedLevel);
    }
    Ok(Grid::from_rows(&rows))
}

/// Serialize a grid back to level text (rows joined by `\n`, no trailing newline).
pub fn serialize(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width + 1) * grid.height);
    for (y, row) in grid.rows().enumerate().take(grid.height) {
        if y > 0 {
            out.push('\n');
        }
        out.extend(row.iter().map(|c| c.to_char()));
    }
    out
}
