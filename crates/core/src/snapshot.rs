//! Snapshot module - a plain copy of a session for rendering

use crate::obstacle::Obstacle;
use crate::piece::Piece;
use crate::shapes::Mask;
use crate::types::{Cell, Phase, Rgb, ShapeKind, GRID_HEIGHT, GRID_WIDTH, STARTING_LIVES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub mask: Mask,
    pub color: Rgb,
    pub x: i8,
    pub y: i8,
}

impl PieceSnapshot {
    /// Absolute (col, row) of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.mask
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            mask: value.mask,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything the adapter needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub piece: PieceSnapshot,
    pub obstacle: Option<Obstacle>,
    pub score: u32,
    pub lives: u32,
    pub collisions: u32,
    pub elapsed_ms: u32,
    pub remaining_ms: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn paused(&self) -> bool {
        self.phase.is_paused()
    }

    pub fn game_over(&self) -> bool {
        self.phase.game_over_reason().is_some()
    }

    /// Whole seconds left on the countdown (rounded down)
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_ms / 1000
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            piece: PieceSnapshot::from(Piece::spawn(ShapeKind::O, Rgb::default())),
            obstacle: None,
            score: 0,
            lives: STARTING_LIVES,
            collisions: 0,
            elapsed_ms: 0,
            remaining_ms: 0,
            phase: Phase::Playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::get_shape;

    #[test]
    fn test_piece_snapshot_cells() {
        let snap = PieceSnapshot {
            kind: ShapeKind::T,
            mask: get_shape(ShapeKind::T),
            color: Rgb::default(),
            x: 2,
            y: 5,
        };
        let cells: Vec<_> = snap.cells().collect();
        assert_eq!(cells, vec![(2, 5), (3, 5), (4, 5), (3, 6)]);
    }

    #[test]
    fn test_remaining_secs_rounds_down() {
        let snap = GameSnapshot {
            remaining_ms: 41_999,
            ..GameSnapshot::default()
        };
        assert_eq!(snap.remaining_secs(), 41);
    }
}
