//! Tile Blocks (workspace facade crate).
//!
//! This package exposes `tile_blocks::{core, input, term, types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tile_blocks_core as core;
pub use tile_blocks_input as input;
pub use tile_blocks_term as term;
pub use tile_blocks_types as types;
