//! Combat mechanics: randomness, critical hits, damage, turn order and
//! faint penalties

mod critical;
mod damage;
mod faint;
mod rng;
mod turn_order;

pub use critical::{
    critical_chance, roll_critical, BOOSTED_CRITICAL_CHANCE, CRITICAL_CHANCE, CRITICAL_MULTIPLIER,
};
pub use damage::{compute_damage, DamageInput, LEAGUE_POWER_CAP};
pub use faint::{penalize_on_faint, MOVEMENT_PENALTY, SOLE_MOVEMENT_PENALTY};
pub use rng::{RandomSource, ScriptedRolls};
pub use turn_order::{resolve_first_attacker, Side};
