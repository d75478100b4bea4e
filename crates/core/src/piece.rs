//! Piece module - the falling piece, collision and locking
//!
//! Collision treats the grid as open above row 0: cells with a negative row
//! never hit settled tiles but still respect the side walls.

use crate::board::Board;
use crate::error::Result;
use crate::shapes::{get_shape, spawn_origin, Mask};
use crate::types::{Direction, Rgb, ShapeKind, GRID_HEIGHT, GRID_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    /// Mask in the current rotation
    pub mask: Mask,
    pub color: Rgb,
    /// Column of the mask's top-left corner
    pub x: i8,
    /// Row of the mask's top-left corner
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the centered spawn position
    pub fn spawn(kind: ShapeKind, color: Rgb) -> Self {
        let mask = get_shape(kind);
        let (x, y) = spawn_origin(&mask, GRID_WIDTH);
        Self {
            kind,
            mask,
            color,
            x,
            y,
        }
    }

    /// Absolute (col, row) of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.mask
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Whether the piece covers the given grid cell
    pub fn covers(&self, col: i8, row: i8) -> bool {
        self.cells().any(|cell| cell == (col, row))
    }

    /// Whether the piece overlaps walls, floor or settled tiles where it stands
    pub fn collides(&self, board: &Board) -> bool {
        collides(board, &self.mask, self.x, self.y)
    }

    /// Move by (dx, dy) unless the target position collides
    pub fn try_move(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        let (x, y) = (self.x + dx, self.y + dy);
        if collides(board, &self.mask, x, y) {
            return false;
        }
        self.x = x;
        self.y = y;
        true
    }

    /// Step one cell in a direction
    pub fn try_step(&mut self, board: &Board, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        self.try_move(board, dx, dy)
    }

    /// Rotate clockwise in place; a colliding rotation leaves the piece untouched
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotated = self.mask.rotated_cw();
        if collides(board, &rotated, self.x, self.y) {
            return false;
        }
        self.mask = rotated;
        true
    }
}

/// Check a mask placed with its top-left corner at (x, y)
pub fn collides(board: &Board, mask: &Mask, x: i8, y: i8) -> bool {
    mask.cells().any(|(dx, dy)| {
        let col = x + dx;
        let row = y + dy;
        col < 0
            || col >= GRID_WIDTH as i8
            || row >= GRID_HEIGHT as i8
            || (row >= 0 && board.is_occupied(col, row))
    })
}

/// Write the piece's color into the board
///
/// Cells above the top row are dropped silently. Every other cell must be on
/// the grid; a cell outside it is reported as `OutOfBounds` after the valid
/// cells are written.
pub fn lock(board: &mut Board, piece: &Piece) -> Result<()> {
    let mut result = Ok(());
    for (col, row) in piece.cells() {
        if row < 0 {
            continue;
        }
        if let Err(err) = board.set(col, row, Some(piece.color)) {
            result = Err(err);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn test_spawn_is_centered() {
        let piece = Piece::spawn(ShapeKind::O, BLUE);
        assert_eq!((piece.x, piece.y), (4, 0));
        assert_eq!(piece.mask, get_shape(ShapeKind::O));
    }

    #[test]
    fn test_cells_above_grid_only_check_walls() {
        let board = Board::new();
        let mask = get_shape(ShapeKind::L);
        assert!(!collides(&board, &mask, 0, -2));
        assert!(collides(&board, &mask, -1, -2));
        assert!(collides(&board, &mask, 9, -2));
    }

    #[test]
    fn test_floor_collision() {
        let board = Board::new();
        let mask = get_shape(ShapeKind::O);
        assert!(!collides(&board, &mask, 0, 13));
        assert!(collides(&board, &mask, 0, 14));
    }

    #[test]
    fn test_settled_tile_collision() {
        let mut board = Board::new();
        board.set(5, 1, Some(BLUE)).unwrap();
        let mask = get_shape(ShapeKind::O);
        assert!(collides(&board, &mask, 4, 0));
        assert!(!collides(&board, &mask, 2, 0));
    }

    #[test]
    fn test_try_move_rejects_wall() {
        let board = Board::new();
        let mut piece = Piece::spawn(ShapeKind::O, BLUE);
        piece.x = 0;
        assert!(!piece.try_step(&board, Direction::Left));
        assert_eq!(piece.x, 0);
        assert!(piece.try_step(&board, Direction::Right));
        assert_eq!(piece.x, 1);
    }

    #[test]
    fn test_rotation_rejected_against_wall() {
        let board = Board::new();
        // L is 2 wide; rotated it is 3 wide and would poke through the right wall.
        let mut piece = Piece::spawn(ShapeKind::L, BLUE);
        piece.x = 8;
        let before = piece;
        assert!(!piece.try_rotate(&board));
        assert_eq!(piece, before);
    }

    #[test]
    fn test_lock_skips_rows_above_grid() {
        let mut board = Board::new();
        let mut piece = Piece::spawn(ShapeKind::L, BLUE);
        piece.y = -2;
        lock(&mut board, &piece).unwrap();

        // Only the bottom row (row 0) of the L lands on the grid.
        assert!(board.is_occupied(4, 0));
        assert!(board.is_occupied(5, 0));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 2);
    }

    #[test]
    fn test_lock_reports_out_of_bounds() {
        let mut board = Board::new();
        let mut piece = Piece::spawn(ShapeKind::O, BLUE);
        piece.x = 9;
        assert_eq!(
            lock(&mut board, &piece),
            Err(BoardError::OutOfBounds { col: 10, row: 1 })
        );
        assert!(board.is_occupied(9, 0));
        assert!(board.is_occupied(9, 1));
    }
}
