//! Board module - manages the game grid
//!
//! The board is a 10x15 grid where each cell is either empty or holds exactly one color.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (col, row) where col ranges 0..9 (left to right), row ranges 0..14 (top to bottom)

use arrayvec::ArrayVec;

use crate::error::{BoardError, Result};
use crate::types::{Cell, Rgb, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the board
pub const BOARD_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Row indices removed by a single clear, bottom to top
pub type ClearedRows = ArrayVec<usize, { GRID_HEIGHT as usize }>;

/// The game board - 10 columns x 15 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if col < 0 || col >= GRID_WIDTH as i8 || row < 0 || row >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((row as usize) * (GRID_WIDTH as usize) + (col as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (col, row)
    /// Returns None if out of bounds
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Write a cell
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> Result<()> {
        let idx = Self::index(col, row).ok_or(BoardError::OutOfBounds { col, row })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_cell(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(None))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= GRID_HEIGHT as usize {
            return false;
        }
        let start = row * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every complete row and return how many were removed.
    ///
    /// Remaining rows keep their relative order and sink by the number of
    /// removed rows below them; the same number of empty rows appears on top.
    pub fn clear_completed_rows(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    /// Uses a two-pointer algorithm with zero-allocation
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = GRID_WIDTH as usize;
        let mut write_row = GRID_HEIGHT as usize;

        for read_row in (0..GRID_HEIGHT as usize).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    let dst_start = write_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Every empty cell as (col, row), top-to-bottom then left-to-right
    pub fn free_cells(&self) -> ArrayVec<(i8, i8), BOARD_SIZE> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| {
                (
                    (idx % GRID_WIDTH as usize) as i8,
                    (idx / GRID_WIDTH as usize) as i8,
                )
            })
            .collect()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Colors of one row, for rendering
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * GRID_WIDTH as usize;
        &self.cells[start..start + GRID_WIDTH as usize]
    }

    /// Fill an entire row with one color
    pub fn fill_row(&mut self, row: usize, color: Rgb) {
        if row >= GRID_HEIGHT as usize {
            return;
        }
        let start = row * GRID_WIDTH as usize;
        self.cells[start..start + GRID_WIDTH as usize].fill(Some(color));
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Write the grid as nested rows (for snapshots and rendering)
    pub fn write_grid(&self, out: &mut [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            out_row.copy_from_slice(self.row(row));
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 14), Some(149));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 15), None);
    }

    #[test]
    fn test_set_out_of_bounds_reports_cell() {
        let mut board = Board::new();
        assert_eq!(
            board.set(10, 3, Some(RED)),
            Err(BoardError::OutOfBounds { col: 10, row: 3 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_clear_full_rows_returns_bottom_to_top() {
        let mut board = Board::new();
        board.fill_row(3, RED);
        board.fill_row(14, RED);
        board.fill_row(9, RED);

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[14, 9, 3]);
        assert!(board.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_clear_every_row() {
        let mut board = Board::new();
        for row in 0..GRID_HEIGHT as usize {
            board.fill_row(row, RED);
        }
        assert_eq!(board.clear_completed_rows(), GRID_HEIGHT as usize);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_free_cells_row_major() {
        let mut board = Board::new();
        for row in 0..GRID_HEIGHT as usize {
            board.fill_row(row, RED);
        }
        board.set(7, 2, None).unwrap();
        board.set(1, 11, None).unwrap();

        assert_eq!(board.free_cells().as_slice(), &[(7, 2), (1, 11)]);
    }
}
