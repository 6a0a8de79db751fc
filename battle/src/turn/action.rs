//! Decoding of turn requests into battle actions

use dojo_protocol::TurnRequest;

use super::error::BattleError;
use crate::types::{ElementType, EncounterId, EncounterKind, PokemonId, SlotId};

/// What the trainer does this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    Surrender,
    /// Bring in a replacement for a fainted creature
    ReplaceFainted { to: PokemonId },
    /// Voluntary switch; the enemy gets a free attack
    Switch { to: PokemonId },
    Attack { movement: ElementType },
}

impl TurnAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnAction::Surrender => "surrender",
            TurnAction::ReplaceFainted { .. } => "replace-fainted",
            TurnAction::Switch { .. } => "switch",
            TurnAction::Attack { .. } => "attack",
        }
    }
}

/// A decoded turn request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnCommand {
    pub encounter: EncounterId,
    pub kind: EncounterKind,
    /// Creature acting (or leaving the field)
    pub pokemon: PokemonId,
    pub slot: SlotId,
    pub action: TurnAction,
}

impl TurnCommand {
    /// Decode a request. Surrender wins over a replacement, which wins over a
    /// voluntary switch, which wins over an attack.
    pub fn from_request(request: &TurnRequest) -> Result<Self, BattleError> {
        let action = if request.surrender {
            TurnAction::Surrender
        } else if request.is_switch() {
            match (request.pokemon_change_defeat_id, request.pokemon_changed_id) {
                (Some(to), _) => TurnAction::ReplaceFainted { to },
                (None, Some(to)) => TurnAction::Switch { to },
                (None, None) => return Err(BattleError::MissingAction),
            }
        } else if request.is_attack() {
            let movement = ElementType::from_id(request.movement_type_id)
                .ok_or(BattleError::UnknownMovement(request.movement_type_id))?;
            TurnAction::Attack { movement }
        } else {
            return Err(BattleError::MissingAction);
        };

        Ok(Self {
            encounter: request.game_id,
            kind: EncounterKind::from_league_flag(request.league),
            pokemon: request.pokemon_id,
            slot: request.enemy_slot_id,
            action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TurnRequest {
        TurnRequest {
            game_id: 3,
            pokemon_id: 10,
            movement_type_id: 0,
            enemy_slot_id: 7,
            pokemon_changed_id: None,
            pokemon_change_defeat_id: None,
            league: false,
            surrender: false,
        }
    }

    #[test]
    fn test_decode_attack() {
        let mut req = request();
        req.movement_type_id = 2;
        let command = TurnCommand::from_request(&req).unwrap();

        assert_eq!(command.encounter, 3);
        assert_eq!(command.kind, EncounterKind::Game);
        assert_eq!(command.action, TurnAction::Attack { movement: ElementType::Fire });
    }

    #[test]
    fn test_decode_precedence() {
        let mut req = request();
        req.movement_type_id = 2;
        req.pokemon_changed_id = Some(11);
        assert_eq!(
            TurnCommand::from_request(&req).unwrap().action,
            TurnAction::Switch { to: 11 }
        );

        req.pokemon_change_defeat_id = Some(12);
        assert_eq!(
            TurnCommand::from_request(&req).unwrap().action,
            TurnAction::ReplaceFainted { to: 12 }
        );

        req.surrender = true;
        req.league = true;
        let command = TurnCommand::from_request(&req).unwrap();
        assert_eq!(command.action, TurnAction::Surrender);
        assert_eq!(command.kind, EncounterKind::League);
    }

    #[test]
    fn test_switch_needs_no_movement() {
        let mut req = request();
        req.pokemon_changed_id = Some(4);
        assert!(req.is_switch());
        assert_eq!(
            TurnCommand::from_request(&req).unwrap().action,
            TurnAction::Switch { to: 4 }
        );
    }

    #[test]
    fn test_decode_rejects_empty_and_unknown_movement() {
        assert_eq!(
            TurnCommand::from_request(&request()),
            Err(BattleError::MissingAction)
        );

        let mut req = request();
        req.movement_type_id = 42;
        assert_eq!(
            TurnCommand::from_request(&req),
            Err(BattleError::UnknownMovement(42))
        );
    }
}
