use dojo_protocol::ArenaError;
use thiserror::Error;

use crate::types::{EncounterId, PokemonId, SlotId};

/// Why a battle action was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("encounter {0} is blocked")]
    EncounterBlocked(EncounterId),

    #[error("pokemon {0} is not in the team")]
    UnknownPokemon(PokemonId),

    #[error("enemy slot {0} does not exist")]
    UnknownSlot(SlotId),

    #[error("species {0} is missing from the catalog")]
    UnknownSpecies(u16),

    #[error("unknown movement type id {0}")]
    UnknownMovement(u32),

    #[error("pokemon {pokemon} does not know {movement} movements")]
    MovementNotKnown { pokemon: PokemonId, movement: String },

    #[error("pokemon {pokemon} has no {movement} movements left")]
    NoMovementsLeft { pokemon: PokemonId, movement: String },

    #[error("pokemon {0} has fainted")]
    PokemonFainted(PokemonId),

    #[error("pokemon {0} has not fainted")]
    NotFainted(PokemonId),

    #[error("enemy slot {0} is already defeated")]
    SlotDefeated(SlotId),

    #[error("request selects no action")]
    MissingAction,
}

impl From<BattleError> for ArenaError {
    fn from(err: BattleError) -> Self {
        let message = err.to_string();
        match err {
            BattleError::EncounterBlocked(_) | BattleError::NoMovementsLeft { .. } => {
                ArenaError::Conflict(message)
            }
            BattleError::UnknownPokemon(_) | BattleError::UnknownSlot(_) => {
                ArenaError::NotFound(message)
            }
            BattleError::UnknownSpecies(_) => ArenaError::internal(message),
            BattleError::UnknownMovement(_)
            | BattleError::MovementNotKnown { .. }
            | BattleError::PokemonFainted(_)
            | BattleError::NotFainted(_)
            | BattleError::SlotDefeated(_)
            | BattleError::MissingAction => ArenaError::BadRequest(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let status = |err: BattleError| ArenaError::from(err).status_code();

        assert_eq!(status(BattleError::EncounterBlocked(1)), 409);
        assert_eq!(
            status(BattleError::NoMovementsLeft {
                pokemon: 1,
                movement: "Fire".to_string()
            }),
            409
        );
        assert_eq!(status(BattleError::UnknownPokemon(1)), 404);
        assert_eq!(status(BattleError::UnknownSlot(1)), 404);
        assert_eq!(status(BattleError::PokemonFainted(1)), 400);
        assert_eq!(status(BattleError::MissingAction), 400);
        assert_eq!(status(BattleError::UnknownSpecies(999)), 500);
    }
}
