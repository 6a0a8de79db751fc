//! Outcome of a resolved turn

use dojo_protocol::{AttackSummary, MovementCount, SlotSummary, TurnResponse};

use super::action::TurnAction;
use crate::mechanics::Side;
use crate::query::Effectiveness;
use crate::types::{ElementType, EncounterId, EncounterKind, EncounterSlot, PokemonId, Unlock};

/// Where the battle stands after a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// The trainer picks the next action
    AwaitingAction,
    /// The creature on the field fainted and must be replaced
    AwaitingReplacement,
    /// Victory, defeat or surrender
    Resolved,
}

impl TurnPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::AwaitingAction => "awaiting-action",
            TurnPhase::AwaitingReplacement => "awaiting-replacement",
            TurnPhase::Resolved => "encounter-resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Victory,
    Defeat,
    Surrender,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Victory => "victory",
            Resolution::Defeat => "defeat",
            Resolution::Surrender => "surrender",
        }
    }

    /// Defeat and surrender both count as a loss
    pub fn is_loss(&self) -> bool {
        !matches!(self, Resolution::Victory)
    }
}

/// One attack that landed this turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackReport {
    pub side: Side,
    pub movement: ElementType,
    pub multiplier: f64,
    pub damage: u32,
    pub critical: bool,
    /// The target dropped to 0 PS
    pub knocked_out: bool,
}

impl AttackReport {
    pub fn effectiveness(&self) -> Effectiveness {
        Effectiveness::from_multiplier(self.multiplier)
    }

    pub fn to_summary(&self) -> AttackSummary {
        AttackSummary {
            movement_type_id: self.movement.id(),
            movement: self.movement.as_str().to_string(),
            damage: self.damage,
            effectiveness: self.effectiveness().as_str().to_string(),
            critical: self.critical,
        }
    }
}

/// Everything a turn changed, captured before any resolution bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub encounter: EncounterId,
    pub kind: EncounterKind,
    pub action: TurnAction,

    pub first_attacker: Option<Side>,
    pub dealt: Option<AttackReport>,
    pub received: Option<AttackReport>,
    pub movement_consumed: Option<ElementType>,

    /// Creature on the field after the turn
    pub pokemon: PokemonId,
    pub pokemon_ps: u32,
    pub pokemon_max_ps: u32,
    pub movements: Vec<(ElementType, u32)>,

    /// Enemy slot fought this turn
    pub enemy: EncounterSlot,

    pub phase: TurnPhase,
    pub resolution: Option<Resolution>,

    /// Set only on the first victory
    pub reward: Option<u32>,
    pub unlock: Option<Unlock>,
}

impl TurnReport {
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    pub fn is_first_clear(&self) -> bool {
        self.resolution == Some(Resolution::Victory) && self.reward.is_some()
    }

    pub fn to_response(&self) -> TurnResponse {
        TurnResponse {
            first_attacker: self.first_attacker.map(|s| s.as_str().to_string()),
            damage_dealt: self.dealt.as_ref().map(AttackReport::to_summary),
            damage_received: self.received.as_ref().map(AttackReport::to_summary),
            movement_consumed: self.movement_consumed.map(|m| m.id()),
            movements: self
                .movements
                .iter()
                .map(|(movement, quantity)| MovementCount {
                    type_id: movement.id(),
                    name: movement.as_str().to_string(),
                    quantity: *quantity,
                })
                .collect(),
            pokemon_id: self.pokemon,
            pokemon_ps: self.pokemon_ps,
            pokemon_max_ps: self.pokemon_max_ps,
            pokemon_dead: self.pokemon_ps == 0,
            enemy: SlotSummary {
                slot_id: self.enemy.id,
                pokedex_id: self.enemy.species,
                ps: self.enemy.ps,
                max_ps: self.enemy.max_ps,
                dead: self.enemy.dead,
            },
            phase: self.phase.as_str().to_string(),
            outcome: self.resolution.map(|r| r.as_str().to_string()),
            reward: self.reward,
            unlock: self.unlock.map(|u| u.label()),
        }
    }
}
