//! Outgoing response payloads

use serde::{Deserialize, Serialize};

/// Remaining charges for one movement type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementCount {
    pub type_id: u32,
    pub name: String,
    pub quantity: u32,
}

/// One resolved attack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackSummary {
    pub movement_type_id: u32,
    pub movement: String,
    pub damage: u32,
    /// "very effective", "not very effective" or "fairly effective"
    pub effectiveness: String,
    pub critical: bool,
}

/// State of the enemy slot after the turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSummary {
    pub slot_id: u32,
    pub pokedex_id: u16,
    pub ps: u32,
    pub max_ps: u32,
    pub dead: bool,
}

/// Result of one battle action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResponse {
    /// "attacker" or "defender"; absent when nobody attacked
    pub first_attacker: Option<String>,

    /// Damage dealt by the trainer's creature
    pub damage_dealt: Option<AttackSummary>,

    /// Damage received from the enemy
    pub damage_received: Option<AttackSummary>,

    /// Movement type consumed by the trainer's attack
    pub movement_consumed: Option<u32>,

    /// Remaining charges of the creature on the field
    pub movements: Vec<MovementCount>,

    /// Creature on the field after the turn
    pub pokemon_id: u64,
    pub pokemon_ps: u32,
    pub pokemon_max_ps: u32,
    pub pokemon_dead: bool,

    pub enemy: SlotSummary,

    /// "awaiting-action", "awaiting-replacement" or "encounter-resolved"
    pub phase: String,

    /// "victory", "defeat" or "surrender" once resolved
    pub outcome: Option<String>,

    /// Reward of a first clear
    pub reward: Option<u32>,

    /// Accessory or badge unlocked by a first clear, e.g. "badge:3"
    pub unlock: Option<String>,
}

impl TurnResponse {
    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Human-readable preview of a merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergePreview {
    pub lines: Vec<String>,
    pub iv_delta: u32,
    pub resulting_ps: u32,
}

/// Full state of the surviving creature after a merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPokemon {
    pub id: u64,
    pub pokedex_id: u16,
    pub name: String,
    pub ps: u32,
    pub max_ps: u32,
    pub iv_ps: u32,
    pub iv_attack: u32,
    pub iv_defense: u32,
    pub movements: Vec<MovementCount>,
}
