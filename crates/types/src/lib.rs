//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 15 rows (indexed 0-14, row 0 is the top)
//! - **Spawn position**: horizontally centered on row 0
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal loop (~60 FPS) |
//! | `FALL_INTERVAL_MS` | 500 | Gravity step interval |
//! | `GAME_DURATION_MS` | 60000 | Length of a game before time runs out |
//!
//! # Examples
//!
//! ```
//! use tile_blocks_types::{Direction, Phase, GameOverReason, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//! assert_eq!(
//!     Phase::GameOver(GameOverReason::TimeUp).game_over_reason(),
//!     Some(GameOverReason::TimeUp)
//! );
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 15);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (15 rows)
pub const GRID_HEIGHT: u8 = 15;

/// Edge length of one cell in pixels, for adapters that draw on a pixel surface.
pub const CELL_SIZE: u16 = 40;

/// Frame interval of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval: the active piece drops one row every 500ms
pub const FALL_INTERVAL_MS: u32 = 500;

/// Length of one game (one minute)
pub const GAME_DURATION_MS: u32 = 60_000;

/// Lives at the start of every game
pub const STARTING_LIVES: u32 = 3;

/// Points for every locked piece
pub const LOCK_POINTS: u32 = 10;

/// Extra points when a lock completes exactly one row
pub const SINGLE_CLEAR_BONUS: u32 = 10;

/// Extra points when a lock completes two or more rows (flat, not per row)
pub const MULTI_CLEAR_BONUS: u32 = 20;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The same color darkened by `amount` per channel (saturating at black).
    pub const fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }
}

/// Colors a falling piece may take.
pub const PIECE_COLORS: [Rgb; 6] = [
    Rgb::new(255, 0, 0),   // red
    Rgb::new(0, 255, 0),   // green
    Rgb::new(0, 0, 255),   // blue
    Rgb::new(255, 255, 0), // yellow
    Rgb::new(0, 255, 255), // cyan
    Rgb::new(255, 0, 255), // magenta
];

/// Colors the obstacle may take.
pub const RAINBOW_COLORS: [Rgb; 7] = [
    Rgb::new(255, 0, 0),     // red
    Rgb::new(255, 165, 0),   // orange
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(0, 255, 0),     // green
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(75, 0, 130),    // indigo
    Rgb::new(238, 130, 238), // violet
];

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Settled tile of the given color
pub type Cell = Option<Rgb>;


/// The four catalog shapes
///
/// - **O**: 2x2 square
/// - **L**: 3 rows, foot to the right
/// - **J**: 3 rows, foot to the left
/// - **T**: 2 rows, stem pointing down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    O,
    L,
    J,
    T,
}

impl ShapeKind {
    /// Every kind, in catalog order.
    pub const ALL: [ShapeKind; 4] = [ShapeKind::O, ShapeKind::L, ShapeKind::J, ShapeKind::T];
}

/// Direction of a player-directed move. There is no upward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Column/row delta of a single step.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Commands the input adapter can send to a session
///
/// Quitting is handled by the adapter itself and never reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the piece one cell
    Move(Direction),
    /// Rotate the piece 90° clockwise
    Rotate,
    /// Toggle between playing and paused
    TogglePause,
    /// Start a fresh game from any state
    Reset,
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    /// The last life was lost to the obstacle
    OutOfLives,
    /// The countdown reached zero
    TimeUp,
    /// A freshly spawned piece overlapped settled tiles
    BlockCollision,
}

impl GameOverReason {
    /// Text shown to the player on the game-over screen
    pub fn message(&self) -> &'static str {
        match self {
            GameOverReason::OutOfLives => "Out of lives!",
            GameOverReason::TimeUp => "Time's up!",
            GameOverReason::BlockCollision => "Block collision!",
        }
    }
}

/// Session state machine phase
///
/// `GameOver` is terminal: only a reset leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Paused,
    GameOver(GameOverReason),
}

impl Phase {
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, Phase::Paused)
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self {
            Phase::GameOver(reason) => Some(*reason),
            _ => None,
        }
    }
}
