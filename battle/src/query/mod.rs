//! Query helpers for battle decision making
//!
//! Effectiveness labels for responses and the AI's choice of attacking type.

mod matchup;

pub use matchup::{best_attacking_type, Effectiveness};
