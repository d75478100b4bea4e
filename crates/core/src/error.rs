//! Error taxonomy for grid writes.
//!
//! Gameplay failures (blocked moves, lost lives, time running out) are not
//! errors; they are ordinary return values and session phases.

use thiserror::Error;

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A write addressed a cell outside the grid
    #[error("cell ({col}, {row}) is outside the grid")]
    OutOfBounds { col: i8, row: i8 },
}
