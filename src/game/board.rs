use std::fmt;

use super::win;
use super::{Mark, Player};
use crate::error::BoardError;

/// Immutable game parameters, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
    gravity: bool,
}

impl BoardConfig {
    /// Validate and build a config.
    ///
    /// Rejects zero dimensions and a `win_length` longer than both axes. A
    /// degenerate but satisfiable length such as 1 is accepted.
    pub fn new(
        rows: usize,
        cols: usize,
        win_length: usize,
        gravity: bool,
    ) -> Result<Self, BoardError> {
        if rows == 0 {
            return Err(BoardError::InvalidConfig("rows must be > 0".into()));
        }
        if cols == 0 {
            return Err(BoardError::InvalidConfig("cols must be > 0".into()));
        }
        if win_length == 0 {
            return Err(BoardError::InvalidConfig("win_length must be > 0".into()));
        }
        if win_length > rows.max(cols) {
            return Err(BoardError::InvalidConfig(format!(
                "win_length {win_length} exceeds both board dimensions ({rows}x{cols})"
            )));
        }
        Ok(BoardConfig {
            rows,
            cols,
            win_length,
            gravity,
        })
    }

    /// Standard Connect Four: 6 rows, 7 columns, four in a row, gravity on.
    pub fn connect_four() -> Self {
        BoardConfig {
            rows: 6,
            cols: 7,
            win_length: 4,
            gravity: true,
        }
    }

    /// Standard Tic-Tac-Toe: 3x3, three in a row, free placement.
    pub fn tic_tac_toe() -> Self {
        BoardConfig {
            rows: 3,
            cols: 3,
            win_length: 3,
            gravity: false,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn gravity(&self) -> bool {
        self.gravity
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// A board coordinate. Row 0 is the top, column 0 is the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Mutable grid of marks plus incremental bookkeeping.
///
/// Cells are stored row-major in a single allocation. `heights[col]` counts the
/// filled cells of each column; under gravity those cells are always the
/// bottom `heights[col]` rows, so the next free row is `rows - heights - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    config: BoardConfig,
    cells: Vec<Mark>,
    heights: Vec<usize>,
    move_count: usize,
}

impl BoardState {
    /// Create a board with every cell empty.
    pub fn new(config: BoardConfig) -> Self {
        BoardState {
            config,
            cells: vec![Mark::Empty; config.cell_count()],
            heights: vec![0; config.cols],
            move_count: 0,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    /// Number of non-empty cells.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Reset every cell to empty without reallocating.
    pub fn clear(&mut self) {
        self.cells.fill(Mark::Empty);
        self.heights.fill(0);
        self.move_count = 0;
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.config.rows && cell.col < self.config.cols
    }

    fn check_bounds(&self, cell: Cell) -> Result<usize, BoardError> {
        if self.in_bounds(cell) {
            Ok(cell.row * self.config.cols + cell.col)
        } else {
            Err(BoardError::OutOfBounds {
                row: cell.row,
                col: cell.col,
                rows: self.config.rows,
                cols: self.config.cols,
            })
        }
    }

    /// Read the mark at `cell`.
    pub fn mark_at(&self, cell: Cell) -> Result<Mark, BoardError> {
        let idx = self.check_bounds(cell)?;
        Ok(self.cells[idx])
    }

    /// Unchecked lookup for callers that already bounded the coordinates.
    pub(crate) fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row * self.config.cols + col]
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.move_count == self.config.cell_count()
    }

    /// Check if a column has no free cell. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.config.cols {
            return true;
        }
        if self.config.gravity {
            self.heights[col] == self.config.rows
        } else {
            (0..self.config.rows).all(|row| !self.get(row, col).is_empty())
        }
    }

    /// Lowest empty row of `col`, i.e. where a gravity drop would land.
    ///
    /// Without gravity the column may have gaps, so this scans from the bottom.
    pub fn next_free_row(&self, col: usize) -> Option<usize> {
        if col >= self.config.cols {
            return None;
        }
        if self.config.gravity {
            let height = self.heights[col];
            (height < self.config.rows).then(|| self.config.rows - height - 1)
        } else {
            (0..self.config.rows)
                .rev()
                .find(|&row| self.get(row, col).is_empty())
        }
    }

    /// Apply a move and return the cell actually written.
    ///
    /// With gravity on, `row` is ignored and the mark lands on the lowest
    /// empty row of `col`. With gravity off, `row` is required.
    pub fn place(
        &mut self,
        col: usize,
        row: Option<usize>,
        mark: Mark,
    ) -> Result<Cell, BoardError> {
        if mark.is_empty() {
            return Err(BoardError::InvalidMark);
        }
        // With a usable row the full cell is reported by `check_bounds` below.
        if col >= self.config.cols && (self.config.gravity || row.is_none()) {
            return Err(BoardError::ColumnOutOfBounds {
                col,
                cols: self.config.cols,
            });
        }

        let cell = if self.config.gravity {
            let row = self.next_free_row(col).ok_or(BoardError::ColumnFull(col))?;
            Cell::new(row, col)
        } else {
            let row = row.ok_or(BoardError::MissingRow(col))?;
            let cell = Cell::new(row, col);
            let idx = self.check_bounds(cell)?;
            if !self.cells[idx].is_empty() {
                return Err(BoardError::CellOccupied { row, col });
            }
            cell
        };

        let idx = cell.row * self.config.cols + cell.col;
        self.cells[idx] = mark;
        self.heights[col] += 1;
        self.move_count += 1;
        Ok(cell)
    }

    /// Drop a piece in a column (gravity boards).
    pub fn drop_piece(&mut self, col: usize, mark: Mark) -> Result<Cell, BoardError> {
        self.place(col, None, mark)
    }

    /// Place at an exact cell (free-placement boards).
    pub fn place_at(&mut self, cell: Cell, mark: Mark) -> Result<Cell, BoardError> {
        self.place(cell.col, Some(cell.row), mark)
    }

    /// Revert a placement.
    ///
    /// Under gravity only the topmost filled cell of a column may be undone.
    pub fn undo(&mut self, cell: Cell) -> Result<(), BoardError> {
        let idx = self.check_bounds(cell)?;
        if self.cells[idx].is_empty() {
            return Err(BoardError::InvalidUndo {
                row: cell.row,
                col: cell.col,
                reason: "cell is empty",
            });
        }
        if self.config.gravity && cell.row != self.config.rows - self.heights[cell.col] {
            return Err(BoardError::InvalidUndo {
                row: cell.row,
                col: cell.col,
                reason: "not the top of its column",
            });
        }

        self.cells[idx] = Mark::Empty;
        self.heights[cell.col] -= 1;
        self.move_count -= 1;
        Ok(())
    }

    /// Currently legal moves, recomputed on every call.
    ///
    /// Under gravity this is the landing cell of each non-full column, left to
    /// right. Otherwise every empty cell in row-major order.
    pub fn legal_moves(&self) -> Vec<Cell> {
        if self.config.gravity {
            (0..self.config.cols)
                .filter_map(|col| self.next_free_row(col).map(|row| Cell::new(row, col)))
                .collect()
        } else {
            (0..self.config.rows)
                .flat_map(|row| (0..self.config.cols).map(move |col| Cell::new(row, col)))
                .filter(|&cell| self.get(cell.row, cell.col).is_empty())
                .collect()
        }
    }

    /// Check if the mark at `cell` completes a run of `win_length`.
    pub fn check_win(&self, cell: Cell) -> Result<Option<Player>, BoardError> {
        win::check_win(self, cell)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                write!(f, "{}", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
