//! Persistence contract for the arena.
//!
//! The service only talks to storage through [`ArenaRepository`]. Every
//! lookup is scoped by trainer, so a record owned by someone else is
//! indistinguishable from a missing one.

use anyhow::Result;
use async_trait::async_trait;
use dojo_battle::{Encounter, EncounterId, EncounterKind, OwnedPokemon, PokemonId};
use serde::{Deserialize, Serialize};

pub type TrainerId = u64;

/// A player of the arena
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub id: TrainerId,
    pub name: String,

    /// Lost or surrendered encounters
    #[serde(default)]
    pub defeats: u32,

    /// Equipped accessory ids
    #[serde(default)]
    pub accessories: Vec<u32>,
}

impl Trainer {
    pub fn new(id: TrainerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            defeats: 0,
            accessories: Vec::new(),
        }
    }

    pub fn with_accessory(mut self, accessory: u32) -> Self {
        self.accessories.push(accessory);
        self
    }
}

/// Storage used by the arena service
#[async_trait]
pub trait ArenaRepository: Send + Sync {
    async fn trainer(&self, id: TrainerId) -> Result<Option<Trainer>>;

    async fn save_trainer(&self, trainer: &Trainer) -> Result<()>;

    /// Load one encounter of a trainer
    async fn encounter(
        &self,
        trainer: TrainerId,
        kind: EncounterKind,
        id: EncounterId,
    ) -> Result<Option<Encounter>>;

    /// All encounters of a kind, ordered by number
    async fn encounters(&self, trainer: TrainerId, kind: EncounterKind) -> Result<Vec<Encounter>>;

    async fn save_encounter(&self, trainer: TrainerId, encounter: &Encounter) -> Result<()>;

    /// Store freshly generated encounters, assigning their ids
    async fn insert_encounters(
        &self,
        trainer: TrainerId,
        encounters: Vec<Encounter>,
    ) -> Result<Vec<EncounterId>>;

    /// Remove every encounter of a kind. Returns how many were removed.
    async fn delete_encounters(&self, trainer: TrainerId, kind: EncounterKind) -> Result<usize>;

    async fn pokemon(&self, trainer: TrainerId, id: PokemonId) -> Result<Option<OwnedPokemon>>;

    /// Insert or update creatures
    async fn save_pokemon(&self, trainer: TrainerId, pokemon: &[OwnedPokemon]) -> Result<()>;

    /// Fighting team for an encounter kind, in team order
    async fn team(&self, trainer: TrainerId, kind: EncounterKind) -> Result<Vec<OwnedPokemon>>;

    async fn set_team(
        &self,
        trainer: TrainerId,
        kind: EncounterKind,
        members: Vec<PokemonId>,
    ) -> Result<()>;

    async fn delete_team(&self, trainer: TrainerId, kind: EncounterKind) -> Result<()>;

    /// Save the surviving creature of a merge and delete the consumed one
    /// (also removing it from every team) in one step
    async fn commit_merge(
        &self,
        trainer: TrainerId,
        survivor: &OwnedPokemon,
        consumed: PokemonId,
    ) -> Result<()>;
}
