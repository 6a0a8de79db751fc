//! In-memory repository used by tests and the demo

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use dojo_battle::{Encounter, EncounterId, EncounterKind, OwnedPokemon, PokemonId};

use crate::repository::{ArenaRepository, Trainer, TrainerId};

#[derive(Debug, Default)]
struct Store {
    trainers: HashMap<TrainerId, Trainer>,
    pokemon: HashMap<PokemonId, (TrainerId, OwnedPokemon)>,
    teams: HashMap<(TrainerId, EncounterKind), Vec<PokemonId>>,
    encounters: BTreeMap<EncounterId, (TrainerId, Encounter)>,
    next_encounter_id: EncounterId,
}

/// Repository backed by hash maps behind a lock
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    store: RwLock<Store>,
    unavailable: AtomicBool,
    latency: Mutex<Option<Duration>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail, as if the database went away
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    /// Delay encounter and team calls, as a networked store would
    pub fn set_latency(&self, latency: Option<Duration>) {
        *self.latency.lock().unwrap_or_else(|e| e.into_inner()) = latency;
    }

    async fn round_trip(&self) {
        let latency = *self.latency.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Store>> {
        self.check_available()?;
        self.store.read().map_err(|_| anyhow!("store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Store>> {
        self.check_available()?;
        self.store.write().map_err(|_| anyhow!("store lock poisoned"))
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::Relaxed) {
            bail!("storage unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl ArenaRepository for InMemoryRepository {
    async fn trainer(&self, id: TrainerId) -> Result<Option<Trainer>> {
        Ok(self.read()?.trainers.get(&id).cloned())
    }

    async fn save_trainer(&self, trainer: &Trainer) -> Result<()> {
        self.write()?.trainers.insert(trainer.id, trainer.clone());
        Ok(())
    }

    async fn encounter(
        &self,
        trainer: TrainerId,
        kind: EncounterKind,
        id: EncounterId,
    ) -> Result<Option<Encounter>> {
        self.round_trip().await;
        let store = self.read()?;
        Ok(store
            .encounters
            .get(&id)
            .filter(|(owner, e)| *owner == trainer && e.kind == kind)
            .map(|(_, e)| e.clone()))
    }

    async fn encounters(&self, trainer: TrainerId, kind: EncounterKind) -> Result<Vec<Encounter>> {
        self.round_trip().await;
        let store = self.read()?;
        let mut encounters: Vec<_> = store
            .encounters
            .values()
            .filter(|(owner, e)| *owner == trainer && e.kind == kind)
            .map(|(_, e)| e.clone())
            .collect();
        encounters.sort_by_key(|e| e.number);
        Ok(encounters)
    }

    async fn save_encounter(&self, trainer: TrainerId, encounter: &Encounter) -> Result<()> {
        self.round_trip().await;
        let mut store = self.write()?;
        match store.encounters.get_mut(&encounter.id) {
            Some((owner, stored)) if *owner == trainer => {
                *stored = encounter.clone();
                Ok(())
            }
            _ => bail!("encounter {} not stored for trainer {}", encounter.id, trainer),
        }
    }

    async fn insert_encounters(
        &self,
        trainer: TrainerId,
        encounters: Vec<Encounter>,
    ) -> Result<Vec<EncounterId>> {
        let mut store = self.write()?;
        let mut ids = Vec::with_capacity(encounters.len());
        for mut encounter in encounters {
            store.next_encounter_id += 1;
            encounter.id = store.next_encounter_id;
            ids.push(encounter.id);
            store.encounters.insert(encounter.id, (trainer, encounter));
        }
        Ok(ids)
    }

    async fn delete_encounters(&self, trainer: TrainerId, kind: EncounterKind) -> Result<usize> {
        let mut store = self.write()?;
        let before = store.encounters.len();
        store
            .encounters
            .retain(|_, (owner, e)| !(*owner == trainer && e.kind == kind));
        Ok(before - store.encounters.len())
    }

    async fn pokemon(&self, trainer: TrainerId, id: PokemonId) -> Result<Option<OwnedPokemon>> {
        let store = self.read()?;
        Ok(store
            .pokemon
            .get(&id)
            .filter(|(owner, _)| *owner == trainer)
            .map(|(_, p)| p.clone()))
    }

    async fn save_pokemon(&self, trainer: TrainerId, pokemon: &[OwnedPokemon]) -> Result<()> {
        let mut store = self.write()?;
        for p in pokemon {
            if let Some((owner, _)) = store.pokemon.get(&p.id) {
                if *owner != trainer {
                    bail!("pokemon {} belongs to another trainer", p.id);
                }
            }
            store.pokemon.insert(p.id, (trainer, p.clone()));
        }
        Ok(())
    }

    async fn team(&self, trainer: TrainerId, kind: EncounterKind) -> Result<Vec<OwnedPokemon>> {
        self.round_trip().await;
        let store = self.read()?;
        let members = store
            .teams
            .get(&(trainer, kind))
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        Ok(members
            .iter()
            .filter_map(|id| store.pokemon.get(id))
            .filter(|(owner, _)| *owner == trainer)
            .map(|(_, p)| p.clone())
            .collect())
    }

    async fn set_team(
        &self,
        trainer: TrainerId,
        kind: EncounterKind,
        members: Vec<PokemonId>,
    ) -> Result<()> {
        self.write()?.teams.insert((trainer, kind), members);
        Ok(())
    }

    async fn delete_team(&self, trainer: TrainerId, kind: EncounterKind) -> Result<()> {
        self.write()?.teams.remove(&(trainer, kind));
        Ok(())
    }

    async fn commit_merge(
        &self,
        trainer: TrainerId,
        survivor: &OwnedPokemon,
        consumed: PokemonId,
    ) -> Result<()> {
        let mut store = self.write()?;
        store.pokemon.insert(survivor.id, (trainer, survivor.clone()));
        store.pokemon.remove(&consumed);
        for ((owner, _), members) in store.teams.iter_mut() {
            if *owner == trainer {
                members.retain(|id| *id != consumed);
            }
        }
        Ok(())
    }
}
