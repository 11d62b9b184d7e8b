//! Grid primitives shared by the maze model and the path search.
//!
//! This module defines the coordinate and cell types along with the immutable rectangular grid the
//! searcher walks over, including the derivation of boundary exit cells.

use std::collections::BTreeSet;

use color_eyre::eyre::{ensure, Result};

/// A single coordinate in a maze grid.
///
/// Cells are addressed as `(row, col)` with the origin in the top-left corner. The derived
/// ordering keeps collections of cells stable, which the exit set and the tests rely on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Cell {
    /// Zero-based row index, growing downwards.
    pub(crate) row: usize,
    /// Zero-based column index, growing rightwards.
    pub(crate) col: usize,
}

impl Cell {
    /// Creates a cell from its row and column indices.
    pub(crate) const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Applies a signed cardinal delta to this cell.
    ///
    /// Returns `None` when the delta would move past the top or left edge of the coordinate
    /// space; the bounds check against the grid itself is left to the caller.
    pub(crate) fn step(self, delta: (isize, isize)) -> Option<Self> {
        let row = self.row.checked_add_signed(delta.0)?;
        let col = self.col.checked_add_signed(delta.1)?;

        Some(Self { row, col })
    }
}

/// The two states a grid cell can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CellKind {
    /// An impassable wall cell.
    Wall,
    /// A traversable path cell.
    Path,
}

/// An immutable rectangular grid of maze cells.
///
/// The grid never changes for the duration of a search. Both dimensions are at least one and every
/// row has the same length; construction enforces this once so lookups stay simple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Grid {
    /// Number of rows in the grid.
    rows: usize,
    /// Number of columns in the grid.
    cols: usize,
    /// Cell contents in row-major order.
    cells: Vec<CellKind>,
}

impl Grid {
    /// Builds a grid from rows of cells.
    ///
    /// # Errors
    ///
    /// This function returns an error when the input is empty or the rows are not all of the same
    /// non-zero length.
    pub(crate) fn from_rows(rows: Vec<Vec<CellKind>>) -> Result<Self> {
        let row_count = rows.len();
        ensure!(row_count > 0, "grid needs at least one row");

        let col_count = rows.first().map_or(0, Vec::len);
        ensure!(col_count > 0, "grid needs at least one column");

        let mut cells = Vec::with_capacity(row_count * col_count);
        for row in rows {
            ensure!(
                row.len() == col_count,
                "grid rows must all have the same length"
            );
            cells.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols: col_count,
            cells,
        })
    }

    /// Returns the number of rows in the grid.
    pub(crate) const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns in the grid.
    pub(crate) const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the kind of the given cell, or `None` when it lies outside the grid.
    pub(crate) fn kind(&self, cell: Cell) -> Option<CellKind> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return None;
        }

        self.cells.get(cell.row * self.cols + cell.col).copied()
    }

    /// Reports whether the given cell is an in-bounds path cell.
    pub(crate) fn is_path(&self, cell: Cell) -> bool {
        matches!(self.kind(cell), Some(CellKind::Path))
    }

    /// Derives the set of exit cells: boundary cells that are traversable.
    ///
    /// Callers derive this once per maze and hold on to the result; the grid itself never changes,
    /// so the set stays valid for every search over it.
    pub(crate) fn exit_cells(&self) -> BTreeSet<Cell> {
        let mut exits = BTreeSet::new();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let on_boundary =
                    row == 0 || row == self.rows - 1 || col == 0 || col == self.cols - 1;
                let cell = Cell::new(row, col);

                if on_boundary && self.is_path(cell) {
                    let _ = exits.insert(cell);
                }
            }
        }

        exits
    }
}
