//! Shapes module - the piece catalog and clockwise rotation
//!
//! Shapes are small rectangular boolean masks. The catalog is immutable;
//! rotating a mask always produces a new mask.

use crate::types::ShapeKind;

/// Largest mask edge in the catalog (and under rotation).
pub const MASK_MAX: usize = 3;

/// Offset of a single filled mask cell relative to the mask's top-left corner
pub type CellOffset = (i8, i8);

/// A rectangular boolean mask of at most 3x3 cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    rows: u8,
    cols: u8,
    bits: [[bool; MASK_MAX]; MASK_MAX],
}

impl Mask {
    /// Build a mask from rows of 0/1 values.
    ///
    /// Rows are taken from the first `rows` entries; each row uses its first `cols` values.
    pub const fn from_rows(rows: u8, cols: u8, values: [[u8; MASK_MAX]; MASK_MAX]) -> Self {
        let mut bits = [[false; MASK_MAX]; MASK_MAX];
        let mut r = 0;
        while r < rows as usize {
            let mut c = 0;
            while c < cols as usize {
                bits[r][c] = values[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self { rows, cols, bits }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (col, row) inside the mask is set
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.bits[row][col]
    }

    /// Offsets (dx, dy) of every set cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        (0..self.rows as usize).flat_map(move |row| {
            (0..self.cols as usize)
                .filter(move |&col| self.bits[row][col])
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Rotate 90° clockwise: reverse the row order, then transpose.
    ///
    /// A `rows x cols` mask becomes `cols x rows`.
    pub fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut bits = [[false; MASK_MAX]; MASK_MAX];
        for (r, out_row) in bits.iter_mut().enumerate().take(cols) {
            for (c, bit) in out_row.iter_mut().enumerate().take(rows) {
                *bit = self.bits[rows - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

const O_MASK: Mask = Mask::from_rows(2, 2, [[1, 1, 0], [1, 1, 0], [0, 0, 0]]);
const L_MASK: Mask = Mask::from_rows(3, 2, [[1, 0, 0], [1, 0, 0], [1, 1, 0]]);
const J_MASK: Mask = Mask::from_rows(3, 2, [[0, 1, 0], [0, 1, 0], [1, 1, 0]]);
const T_MASK: Mask = Mask::from_rows(2, 3, [[1, 1, 1], [0, 1, 0], [0, 0, 0]]);

/// The shape catalog, indexed like [`ShapeKind::ALL`]
pub static SHAPES: [Mask; 4] = [O_MASK, L_MASK, J_MASK, T_MASK];

/// Get the spawn mask for a shape kind
pub fn get_shape(kind: ShapeKind) -> Mask {
    match kind {
        ShapeKind::O => O_MASK,
        ShapeKind::L => L_MASK,
        ShapeKind::J => J_MASK,
        ShapeKind::T => T_MASK,
    }
}

/// Column/row of the top-left corner for a freshly spawned mask: centered, top row.
pub fn spawn_origin(mask: &Mask, grid_width: u8) -> (i8, i8) {
    ((grid_width / 2) as i8 - (mask.cols() / 2) as i8, 0)
}
