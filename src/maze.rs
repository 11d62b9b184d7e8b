//! Maze data and management module.
//!
//! This module contains the `Maze` struct, which pairs a grid with its designated start cell and
//! the exit set derived from the grid boundary, plus the built-in default maze.

use std::{collections::BTreeSet, ffi::OsString, sync::LazyLock};

use color_eyre::eyre::{bail, ensure, OptionExt as _, Result};

use crate::grid::{Cell, CellKind, Grid};

/// A named maze with its grid, designated start cell and derived exit set.
///
/// Mazes are immutable once constructed. The exit set is derived from the grid boundary exactly
/// once, here, and reused by every search over the maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Maze {
    /// Display name of the maze, the file name without its extension.
    pub(crate) key: String,
    /// The wall/path grid.
    grid: Grid,
    /// The cell every search over this maze starts from.
    start: Cell,
    /// Boundary cells that are traversable, i.e. the places a walk may leave the maze.
    exits: BTreeSet<Cell>,
}

impl Default for Maze {
    fn default() -> Self {
        Self::new("Default.maze".into(), *DEFAULT_MAZE).expect("failed to create default maze")
    }
}

impl Maze {
    /// Builds a maze from a file name and its textual contents.
    ///
    /// Rows consist of `0` (path), `1` (wall) and exactly one `S` marking the start cell, which is
    /// itself traversable. The display key is the file name with the `.maze` extension removed.
    ///
    /// # Errors
    ///
    /// This function returns an error when:
    /// - the file name is not valid UTF-8 or lacks the `.maze` extension
    /// - the rows do not form a non-empty rectangular grid
    /// - the contents hold an illegal character or not exactly one start marker
    pub(crate) fn new(key: OsString, contents: &str) -> Result<Self> {
        let mut rows = Vec::new();
        let mut start = None;

        for (row_idx, line) in contents.lines().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col_idx, byte) in line.bytes().enumerate() {
                let kind = match byte {
                    b'0' => CellKind::Path,
                    b'1' => CellKind::Wall,
                    b'S' => {
                        ensure!(start.is_none(), "maze must hold exactly one start marker");
                        start = Some(Cell::new(row_idx, col_idx));
                        CellKind::Path
                    }
                    _ => bail!(
                        "unexpected character {:?} in maze contents",
                        char::from(byte)
                    ),
                };
                cells.push(kind);
            }
            rows.push(cells);
        }

        let grid = Grid::from_rows(rows)?;
        let start = start.ok_or_eyre("maze holds no start marker")?;
        let exits = grid.exit_cells();

        let mut file_name = key
            .to_str()
            .ok_or_eyre("failed to convert osstring to string slice")?
            .to_owned();
        file_name.truncate({
            file_name
                .rfind(".maze")
                .ok_or_eyre("failed to find extension in file name")?
        });

        Ok(Self {
            key: file_name,
            grid,
            start,
            exits,
        })
    }

    /// Returns the maze grid.
    pub(crate) const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the designated start cell.
    pub(crate) const fn start(&self) -> Cell {
        self.start
    }

    /// Returns the exit set derived from the grid boundary.
    pub(crate) const fn exits(&self) -> &BTreeSet<Cell> {
        &self.exits
    }

    /// Collects the wall cells of the maze for rendering.
    pub(crate) fn wall_cells(&self) -> Vec<Cell> {
        let mut walls = Vec::new();

        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let cell = Cell::new(row, col);
                if matches!(self.grid.kind(cell), Some(CellKind::Wall)) {
                    walls.push(cell);
                }
            }
        }

        walls
    }
}

/// The built-in maze every session starts with.
///
/// `1` is a wall, `0` a path and `S` the start; the only boundary path cell sits on the right edge
/// of the outer ring.
static DEFAULT_MAZE: LazyLock<&str> = LazyLock::new(|| {
    "\
1111111
1S00011
1011111
1011111
1010001
1010101
1010100
1000111
1111111"
});
