//! Incoming request payloads
//!
//! These types mirror the JSON bodies posted by the game front-end.

use serde::{Deserialize, Serialize};

use crate::{ArenaError, NO_MOVEMENT};

/// One battle action against an encounter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    /// Encounter (game level or league level) being fought
    pub game_id: u64,

    /// Trainer creature currently acting
    pub pokemon_id: u64,

    /// Elemental type id of the selected movement, 0 when not attacking
    #[serde(default)]
    pub movement_type_id: u32,

    /// Enemy roster slot being fought
    pub enemy_slot_id: u32,

    /// Voluntary switch target (forfeits the attack)
    #[serde(default)]
    pub pokemon_changed_id: Option<u64>,

    /// Replacement for a fainted creature (no attacks this turn)
    #[serde(default)]
    pub pokemon_change_defeat_id: Option<u64>,

    /// Whether the encounter is a league level
    #[serde(default)]
    pub league: bool,

    /// Give up the encounter
    #[serde(default)]
    pub surrender: bool,
}

impl TurnRequest {
    /// Parse a request from an already decoded JSON value
    pub fn parse(json: &serde_json::Value) -> Result<Self, ArenaError> {
        Ok(serde_json::from_value(json.clone())?)
    }

    /// Parse a request from a raw JSON body
    pub fn from_json(body: &str) -> Result<Self, ArenaError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Check if this request selects a movement to attack with
    pub fn is_attack(&self) -> bool {
        !self.surrender
            && self.pokemon_changed_id.is_none()
            && self.pokemon_change_defeat_id.is_none()
            && self.movement_type_id != NO_MOVEMENT
    }

    /// Check if this request switches creatures in any way
    pub fn is_switch(&self) -> bool {
        !self.surrender
            && (self.pokemon_changed_id.is_some() || self.pokemon_change_defeat_id.is_some())
    }
}

/// Merge `second_id` into `first_id`; the second creature is consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeRequest {
    pub first_id: u64,
    pub second_id: u64,
}

impl MergeRequest {
    pub fn from_json(body: &str) -> Result<Self, ArenaError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Reject merging a creature with itself
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.first_id == self.second_id {
            return Err(ArenaError::bad_request(
                "cannot merge a pokemon with itself",
            ));
        }
        Ok(())
    }
}
