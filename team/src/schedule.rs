//! The game level schedule

use dojo_battle::{PowerTier, Unlock};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Slots per encounter
pub const TEAM_SIZE: u32 = 6;

/// Blueprint of one game level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPlan {
    pub number: u32,

    /// Slots per tier, in `PowerTier::ALL` order (3, 4, 5, 6, 8, 10)
    pub tier_counts: [u8; 6],

    pub reward: u32,

    #[serde(default)]
    pub unlock: Option<Unlock>,
}

impl LevelPlan {
    pub fn slot_count(&self) -> u32 {
        self.tier_counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// Tiers paired with their slot counts, weakest first, skipping empty tiers
    pub fn tiers(&self) -> impl Iterator<Item = (PowerTier, usize)> + '_ {
        PowerTier::ALL
            .iter()
            .zip(self.tier_counts.iter())
            .filter(|(_, count)| **count > 0)
            .map(|(&tier, &count)| (tier, usize::from(count)))
    }

    /// Inclusive IV budget range for a slot of this level
    pub fn iv_budget(&self) -> (u32, u32) {
        let n = self.number;
        (10 + n * 60 / 30, 20 + n * 73 / 30)
    }
}

/// Ordered level plans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSchedule {
    pub levels: Vec<LevelPlan>,
}

impl LevelSchedule {
    /// The 31 standard game levels
    pub fn standard() -> Self {
        let levels = STANDARD_LEVELS
            .iter()
            .enumerate()
            .map(|(i, &(tier_counts, unlock))| {
                let number = i as u32 + 1;
                LevelPlan {
                    number,
                    tier_counts,
                    reward: 100 + 20 * (number - 1),
                    unlock,
                }
            })
            .collect();
        Self { levels }
    }

    /// Load a schedule from JSON and validate it
    pub fn from_json(body: &str) -> Result<Self, GenerationError> {
        let schedule: Self = serde_json::from_str(body)?;
        schedule.validate()?;
        Ok(schedule)
    }

    /// Every level must fill exactly six slots
    pub fn validate(&self) -> Result<(), GenerationError> {
        for plan in &self.levels {
            let total = plan.slot_count();
            if total != TEAM_SIZE {
                return Err(GenerationError::InvalidPlan {
                    level: plan.number,
                    total,
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, number: u32) -> Option<&LevelPlan> {
        self.levels.iter().find(|p| p.number == number)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

const CRIT_CHARM: Option<Unlock> = Some(Unlock::Accessory(3));
const SWIFT_CHARM: Option<Unlock> = Some(Unlock::Accessory(4));

const fn badge(id: u32) -> Option<Unlock> {
    Some(Unlock::Badge(id))
}

/// Tier counts (3, 4, 5, 6, 8, 10) and unlock per level, level 1 first
#[rustfmt::skip]
static STANDARD_LEVELS: &[([u8; 6], Option<Unlock>)] = &[
    ([6, 0, 0, 0, 0, 0], None),
    ([5, 1, 0, 0, 0, 0], None),
    ([4, 2, 0, 0, 0, 0], CRIT_CHARM),
    ([3, 3, 0, 0, 0, 0], None),
    ([3, 2, 1, 0, 0, 0], None),
    ([2, 3, 1, 0, 0, 0], badge(1)),
    ([2, 2, 2, 0, 0, 0], None),
    ([1, 3, 2, 0, 0, 0], None),
    ([1, 2, 3, 0, 0, 0], CRIT_CHARM),
    ([1, 2, 2, 1, 0, 0], None),
    ([0, 3, 2, 1, 0, 0], None),
    ([0, 2, 3, 1, 0, 0], badge(2)),
    ([0, 2, 2, 2, 0, 0], None),
    ([0, 1, 3, 2, 0, 0], None),
    ([0, 1, 2, 2, 1, 0], CRIT_CHARM),
    ([0, 0, 3, 2, 1, 0], None),
    ([0, 0, 2, 3, 1, 0], None),
    ([0, 0, 2, 2, 2, 0], badge(3)),
    ([0, 0, 1, 3, 2, 0], None),
    ([0, 0, 1, 2, 2, 1], None),
    ([0, 0, 0, 3, 2, 1], badge(4)),
    ([0, 0, 0, 2, 3, 1], None),
    ([0, 0, 0, 2, 2, 2], None),
    ([0, 0, 0, 1, 3, 2], SWIFT_CHARM),
    ([0, 0, 0, 1, 2, 3], None),
    ([0, 0, 0, 0, 3, 3], None),
    ([0, 0, 0, 0, 2, 4], badge(5)),
    ([0, 0, 0, 0, 2, 4], None),
    ([0, 0, 0, 0, 1, 5], None),
    ([0, 0, 0, 0, 1, 5], badge(6)),
    ([0, 0, 0, 0, 0, 6], badge(7)),
];
