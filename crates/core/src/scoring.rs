//! Scoring rules
//!
//! Every lock is worth a flat amount. Clearing rows adds a bonus on top that
//! distinguishes only "one row" from "more than one row".

use crate::types::{LOCK_POINTS, MULTI_CLEAR_BONUS, SINGLE_CLEAR_BONUS};

/// Bonus for clearing `rows` rows in one lock: 0, 10, or a flat 20
pub fn clear_bonus(rows: usize) -> u32 {
    match rows {
        0 => 0,
        1 => SINGLE_CLEAR_BONUS,
        _ => MULTI_CLEAR_BONUS,
    }
}

/// Total points for one lock that cleared `rows` rows
pub fn lock_score(rows: usize) -> u32 {
    LOCK_POINTS + clear_bonus(rows)
}
