//! Critical hit rolls

use super::rng::RandomSource;

/// Base critical chance
pub const CRITICAL_CHANCE: f64 = 0.10;

/// Critical chance with the critical accessory equipped
pub const BOOSTED_CRITICAL_CHANCE: f64 = 0.15;

/// Damage multiplier applied to a critical hit
pub const CRITICAL_MULTIPLIER: u32 = 3;

pub fn critical_chance(bonus_equipped: bool) -> f64 {
    if bonus_equipped {
        BOOSTED_CRITICAL_CHANCE
    } else {
        CRITICAL_CHANCE
    }
}

/// Roll for a critical hit. The AI side always passes `false`.
pub fn roll_critical(rng: &mut dyn RandomSource, bonus_equipped: bool) -> bool {
    rng.chance(critical_chance(bonus_equipped))
}
