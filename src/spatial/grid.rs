//! Extracted puzzle cells
//!
//! A `PuzzleGrid` is built once per image and never modified afterwards.
//! Cells are bit-packed row-major, a set bit meaning the cell is filled.

use bitvec::prelude::*;
use std::fmt;

use crate::io::error::{Result, invalid_source};

/// State of a single puzzle cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Inked cell, part of the solution
    Filled,
    /// Blank cell
    Empty,
}

impl CellState {
    /// Map a filled flag to a cell state
    pub const fn from_filled(filled: bool) -> Self {
        if filled { Self::Filled } else { Self::Empty }
    }

    /// Whether the cell is inked
    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled)
    }

    /// Token used in level file lines
    pub const fn token(self) -> char {
        match self {
            Self::Filled => 'x',
            Self::Empty => '_',
        }
    }
}

/// Rectangular grid of filled and empty cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleGrid {
    cells: BitVec,
    width: usize,
    height: usize,
}

impl PuzzleGrid {
    /// Assemble a grid from rows of equal, non-zero length
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if there are no rows, the rows are empty,
    /// or the rows differ in length
    pub fn from_rows(rows: &[Vec<CellState>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(invalid_source(&"no grid rows inside the image"));
        };
        let width = first.len();
        if width == 0 {
            return Err(invalid_source(&"no grid columns inside the image"));
        }

        let mut cells = BitVec::with_capacity(width * rows.len());
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(invalid_source(&format!(
                    "row {index} has {} cells, expected {width}",
                    row.len()
                )));
            }
            cells.extend(row.iter().map(|cell| cell.is_filled()));
        }

        Ok(Self {
            cells,
            width,
            height: rows.len(),
        })
    }

    /// Number of cell columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of cell rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// State of the cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        if col >= self.width {
            return None;
        }
        let index = row.checked_mul(self.width)?.checked_add(col)?;
        self.cells.get(index).map(|bit| CellState::from_filled(*bit))
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> Option<impl Iterator<Item = CellState> + '_> {
        let start = row.checked_mul(self.width)?;
        let bits = self.cells.get(start..start.checked_add(self.width)?)?;
        Some(bits.iter().by_vals().map(CellState::from_filled))
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellState> + '_> + '_ {
        self.cells
            .chunks_exact(self.width)
            .map(|bits| bits.iter().by_vals().map(CellState::from_filled))
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.count_ones()
    }
}

// Two characters per cell keep the preview roughly square in a terminal
impl fmt::Display for PuzzleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(if cell.is_filled() { "XX" } else { "  " })?;
            }
        }
        Ok(())
    }
}
