//! Board module - the fixed 10x20 grid of locked cells
//!
//! Cells live in a flat row-major array (`y * WIDTH + x`), row 0 at the top.
//! Every operation that feeds the engine's snapshots (`stamp`, `clear_full_rows`)
//! returns a new board and leaves `self` untouched.

use arrayvec::ArrayVec;

use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH, GAME_OVER_ROWS};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Indices of rows removed by one clear, top to bottom.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// One row of cells, left to right. Panics if `y` is out of bounds.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove every full row.
    ///
    /// Returns the new board together with the removed row indices (top to
    /// bottom). Retained rows keep their relative order and sink to the bottom;
    /// empty rows fill the top so the height never changes.
    pub fn clear_full_rows(&self) -> (Board, ClearedRows) {
        let mut out = Board::new();
        let mut cleared = ClearedRows::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                let dst = write_y * WIDTH;
                out.cells[dst..dst + WIDTH].copy_from_slice(self.row(read_y));
            }
        }

        cleared.reverse();
        (out, cleared)
    }

    /// Copy of this board with `color` written at every listed empty cell.
    ///
    /// Cells outside the grid (a piece protruding above row 0) and cells that
    /// are already occupied are left as they are.
    pub fn stamp(&self, cells: impl IntoIterator<Item = (i8, i8)>, color: Color) -> Board {
        let mut out = self.clone();
        for (x, y) in cells {
            if out.get(x, y) == Some(None) {
                out.set(x, y, Some(color));
            }
        }
        out
    }

    /// Game over check: any occupied cell in the top two rows.
    pub fn is_game_over(&self) -> bool {
        self.cells[..GAME_OVER_ROWS as usize * WIDTH]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy into a row-major 2D grid
    pub fn to_grid(&self) -> [[Cell; WIDTH]; HEIGHT] {
        let mut grid = [[None; WIDTH]; HEIGHT];
        for (y, row) in self.rows().enumerate() {
            grid[y].copy_from_slice(row);
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
