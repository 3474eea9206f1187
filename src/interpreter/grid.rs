//! The maze board
//!
//! A [`Grid`] is a rectangular array of two-character tokens. Rows shorter than the
//! widest row are padded with walls when the grid is built, so every row has the
//! same length for the lifetime of the program.
//!
//! Coordinates are signed so that a car one step past an edge can still be looked
//! up; such positions are simply out of bounds.

use super::constants::{SPAWN, WALL};
use crate::parser::ast::Heading;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl Grid {
    /// Build a grid from parsed rows, padding short rows with walls
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, WALL.to_string());
        }
        Grid { rows, width }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Token at a position, or None when out of bounds
    pub fn get(&self, row: i64, col: i64) -> Option<&str> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Whether a car may enter this position
    pub fn is_open(&self, row: i64, col: i64) -> bool {
        self.get(row, col).is_some_and(|token| token != WALL)
    }

    /// Whether the cell one step away in `heading` is open
    pub fn is_open_towards(&self, row: i64, col: i64, heading: Heading) -> bool {
        let (dr, dc) = heading.offset();
        self.is_open(row + dr, col + dc)
    }

    /// Overwrite a cell with a wall. Out-of-bounds positions are ignored.
    pub fn erase(&mut self, row: i64, col: i64) {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return;
        };
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = WALL.to_string();
        }
    }

    /// Positions of spawn cells in row-major order
    pub fn spawn_points(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, token)| token.as_str() == SPAWN)
                .map(move |(c, _)| (r as i64, c as i64))
        })
    }
}
