//! Who strikes first

use super::rng::RandomSource;

/// The two sides of a battle turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The trainer's creature
    Attacker,
    /// The AI slot
    Defender,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Attacker => "attacker",
            Side::Defender => "defender",
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide which side attacks first.
///
/// Higher power goes first. On a tie a fair coin decides; with the speed
/// accessory a coin that picks the defender is flipped once more, giving the
/// attacker 75% overall.
pub fn resolve_first_attacker(
    attacker_power: u32,
    defender_power: u32,
    speed_accessory: bool,
    rng: &mut dyn RandomSource,
) -> Side {
    if attacker_power > defender_power {
        return Side::Attacker;
    }
    if defender_power > attacker_power {
        return Side::Defender;
    }

    if rng.coin_flip() {
        return Side::Attacker;
    }
    if speed_accessory && rng.coin_flip() {
        return Side::Attacker;
    }
    Side::Defender
}
