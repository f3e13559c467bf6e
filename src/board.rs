use crate::action::Cursor;
use crate::cell::Cell;
use crate::cell_content::CellContent::*;
use crate::config::{cell_count, validate_layout};
use crate::error::{ConfigError, GameError, Result};
use crate::util::{DIRS_8, index_of, position_of, valid_neighbors};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Row-major grid of cells. Mine layout is fixed once built; only cell states change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    mine_total: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub(crate) fn empty(rows: usize, cols: usize) -> Result<Self> {
        let cells = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            mine_total: 0,
            cells: vec![Cell::default(); cells],
        })
    }

    /// Builds a board with mines exactly at `mines`.
    pub fn with_mines(rows: usize, cols: usize, mines: &[Cursor]) -> Result<Self> {
        validate_layout(rows, cols, mines.len())?;
        let mut board = Self::empty(rows, cols)?;
        for &(row, col) in mines {
            if index_of((row, col), rows, cols).is_none() {
                return Err(ConfigError::MineOutOfBounds { row, col }.into());
            }
            if !board.place_mine((row, col)) {
                return Err(ConfigError::DuplicateMine { row, col }.into());
            }
        }
        Ok(board)
    }

    /// Marks `cursor` as a mine and bumps its neighbours' counts. Returns false if it already was one.
    pub(crate) fn place_mine(&mut self, cursor: Cursor) -> bool {
        let (rows, cols) = (self.rows, self.cols);
        let Some(i) = index_of(cursor, rows, cols) else {
            return false;
        };
        if self.cells[i].content == Mine {
            return false;
        }
        self.cells[i].content = Mine;
        self.mine_total += 1;

        for neighbor in valid_neighbors(&DIRS_8, cursor, rows, cols) {
            let Some(j) = index_of(neighbor, rows, cols) else {
                continue;
            };
            if let Empty(ref mut n) = self.cells[j].content {
                *n += 1;
            }
        }
        true
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mine_total(&self) -> usize {
        self.mine_total
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn index_of(&self, cursor: Cursor) -> Option<usize> {
        index_of(cursor, self.rows, self.cols)
    }

    pub fn position_of(&self, index: usize) -> Option<Cursor> {
        position_of(index, self.rows, self.cols)
    }

    /// Index of `cursor`, or an out-of-bounds error naming it.
    pub fn checked_index(&self, (row, col): Cursor) -> Result<usize> {
        self.index_of((row, col)).ok_or(GameError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    pub fn get(&self, cursor: Cursor) -> Option<&Cell> {
        self.index_of(cursor).map(|i| &self.cells[i])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn neighbors(&self, cursor: Cursor) -> impl Iterator<Item = Cursor> + use<> {
        valid_neighbors(&DIRS_8, cursor, self.rows, self.cols)
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.cols)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in self.rows_iter() {
            for cell in line {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
