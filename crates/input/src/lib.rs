//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! event types. It maps `crossterm` key events into [`crate::types::Command`]s
//! and recognizes the quit keys, which never reach the core.

pub mod map;

pub use tile_blocks_types as types;

pub use map::{handle_key_event, should_quit};
