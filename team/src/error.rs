use dojo_battle::{PokemonId, PowerTier};
use dojo_protocol::ArenaError;
use thiserror::Error;

/// Errors raised while generating encounters
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("tier {tier} pool has {available} species, {requested} requested")]
    PoolExhausted {
        tier: PowerTier,
        requested: usize,
        available: usize,
    },

    #[error("level {level} plans {total} slots instead of 6")]
    InvalidPlan { level: u32, total: u32 },

    #[error("species {0} is missing from the catalog")]
    UnknownSpecies(u16),

    #[error("invalid schedule data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// Errors raised by the merge calculator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("cannot merge pokemon {0} with itself")]
    SameCreature(PokemonId),

    #[error("pokemon {first} and {second} share no elemental type")]
    NoSharedType { first: PokemonId, second: PokemonId },

    #[error("species {0} is missing from the catalog")]
    UnknownSpecies(u16),
}

impl From<GenerationError> for ArenaError {
    fn from(err: GenerationError) -> Self {
        ArenaError::internal(err.to_string())
    }
}

impl From<MergeError> for ArenaError {
    fn from(err: MergeError) -> Self {
        match err {
            MergeError::UnknownSpecies(_) => ArenaError::internal(err.to_string()),
            MergeError::SameCreature(_) | MergeError::NoSharedType { .. } => {
                ArenaError::BadRequest(err.to_string())
            }
        }
    }
}
