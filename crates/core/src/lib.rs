//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the tile-block puzzle: the shape catalog,
//! the grid, the falling piece, the roaming obstacle, scoring, and the session
//! state machine that ties them together. It has **no dependencies** on
//! terminals, input devices or clocks:
//!
//! - **Deterministic**: one seeded RNG owned by the session drives every random choice
//! - **Tick-driven**: the adapter passes elapsed milliseconds; nothing blocks or sleeps
//! - **Single owner**: the [`Session`] owns the board, piece, obstacle and counters
//!
//! # Module Structure
//!
//! - [`shapes`]: the four catalog masks and clockwise rotation
//! - [`board`]: 10x15 grid with completed-row clearing
//! - [`piece`]: falling piece, collision and locking
//! - [`obstacle`]: hazard placement on a random empty cell
//! - [`scoring`]: lock points and row-clear bonus
//! - [`session`]: playing / paused / game-over state machine
//! - [`snapshot`]: copyable view of a session for rendering
//!
//! # Example
//!
//! ```
//! use tile_blocks_core::Session;
//! use tile_blocks_types::{Command, Direction, Phase, FALL_INTERVAL_MS};
//!
//! let mut session = Session::new(12345);
//! assert_eq!(session.phase(), Phase::Playing);
//!
//! session.apply(Command::Move(Direction::Left));
//! session.apply(Command::Rotate);
//! session.tick(FALL_INTERVAL_MS);
//!
//! assert!(session.remaining_ms() < 60_000);
//! ```

pub mod board;
pub mod error;
pub mod obstacle;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use tile_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::BoardError;
pub use obstacle::{place_obstacle, Obstacle};
pub use piece::{collides, lock, Piece};
pub use rng::SimpleRng;
pub use scoring::{clear_bonus, lock_score};
pub use session::{Rules, Session, SessionEvent, SessionEvents};
pub use shapes::{get_shape, Mask, SHAPES};
pub use snapshot::{GameSnapshot, PieceSnapshot};
