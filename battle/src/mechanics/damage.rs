//! Damage calculation.
//!
//! ```text
//! base   = 50 + attacker_power * 5
//! power  = 1 + advantage * 0.06   (advantage > 0)
//!          1 + advantage * 0.04   (otherwise)
//! iv     = 1 + (attacker_iv_attack - defender_iv_defense) / 70
//! damage = round(base * iv * type_multiplier * power), tripled on a critical
//! ```
//!
//! In league mode both powers are set to 10 before anything else, so the
//! power advantage never applies there.

use super::critical::CRITICAL_MULTIPLIER;

/// Power both sides fight at in league encounters
pub const LEAGUE_POWER_CAP: u32 = 10;

/// Everything the damage formula reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageInput {
    pub attacker_power: u32,
    pub defender_power: u32,
    pub attacker_iv_attack: u32,
    pub defender_iv_defense: u32,
    /// Product of chart multipliers over every defending type
    pub type_multiplier: f64,
    pub critical: bool,
    pub league: bool,
}

impl DamageInput {
    /// Neutral input: no type advantage, no critical, game mode
    pub fn new(attacker_power: u32, defender_power: u32) -> Self {
        Self {
            attacker_power,
            defender_power,
            attacker_iv_attack: 0,
            defender_iv_defense: 0,
            type_multiplier: 1.0,
            critical: false,
            league: false,
        }
    }

    pub fn with_ivs(mut self, attacker_iv_attack: u32, defender_iv_defense: u32) -> Self {
        self.attacker_iv_attack = attacker_iv_attack;
        self.defender_iv_defense = defender_iv_defense;
        self
    }

    pub fn with_multiplier(mut self, type_multiplier: f64) -> Self {
        self.type_multiplier = type_multiplier;
        self
    }

    pub fn with_critical(mut self, critical: bool) -> Self {
        self.critical = critical;
        self
    }

    pub fn with_league(mut self, league: bool) -> Self {
        self.league = league;
        self
    }
}

/// Compute the damage of one attack. Never negative.
pub fn compute_damage(input: &DamageInput) -> u32 {
    let (attacker_power, defender_power) = if input.league {
        (LEAGUE_POWER_CAP, LEAGUE_POWER_CAP)
    } else {
        (input.attacker_power, input.defender_power)
    };

    let base = 50.0 + f64::from(attacker_power) * 5.0;

    let advantage = f64::from(attacker_power) - f64::from(defender_power);
    let power_factor = if advantage > 0.0 {
        1.0 + advantage * 0.06
    } else {
        1.0 + advantage * 0.04
    };

    let iv_gap = f64::from(input.attacker_iv_attack) - f64::from(input.defender_iv_defense);
    let iv_factor = 1.0 + iv_gap / 70.0;

    let raw = (base * iv_factor * input.type_multiplier * power_factor).round();
    let damage = if raw.is_finite() && raw > 0.0 {
        raw as u32
    } else {
        0
    };

    if input.critical {
        damage.saturating_mul(CRITICAL_MULTIPLIER)
    } else {
        damage
    }
}
