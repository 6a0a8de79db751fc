//! Request handlers of the arena

use std::sync::Mutex;

use dojo_battle::{
    resolve_turn, BattleContext, Encounter, EncounterKind, OwnedPokemon, PokemonId, Resolution,
    Species, SpeciesCatalog, TrainerGear, TurnCommand, TurnReport, TypeChart,
};
use dojo_protocol::{
    ArenaError, MergePreview, MergeRequest, MergedPokemon, TurnRequest, TurnResponse,
};
use dojo_team::{
    compute_merge, generate_league, generate_levels, merged_pokemon, LeagueRoster, LevelSchedule,
    MergeInput,
};
use rand::rngs::StdRng;

use crate::config::ServiceConfig;
use crate::locks::EncounterLocks;
use crate::repository::{ArenaRepository, Trainer, TrainerId};

/// Log a storage failure and turn it into a 500
trait Storage<T> {
    fn storage(self, operation: &'static str) -> Result<T, ArenaError>;
}

impl<T> Storage<T> for anyhow::Result<T> {
    fn storage(self, operation: &'static str) -> Result<T, ArenaError> {
        self.map_err(|e| {
            tracing::error!(operation, error = %e, "storage failure");
            ArenaError::from(e)
        })
    }
}

/// Static game data the service works with
#[derive(Debug, Clone)]
pub struct GameData {
    pub catalog: SpeciesCatalog,
    pub chart: TypeChart,
    pub schedule: LevelSchedule,
    pub roster: LeagueRoster,
}

impl GameData {
    pub fn standard() -> Self {
        Self {
            catalog: SpeciesCatalog::kanto(),
            chart: TypeChart::standard(),
            schedule: LevelSchedule::standard(),
            roster: LeagueRoster::standard(),
        }
    }
}

/// Battle, generation and merge operations over a repository
pub struct ArenaService<R> {
    repo: R,
    data: GameData,
    config: ServiceConfig,
    locks: EncounterLocks,
    rng: Mutex<StdRng>,
}

impl<R: ArenaRepository> ArenaService<R> {
    pub fn new(repo: R, config: ServiceConfig) -> Self {
        Self::with_data(repo, config, GameData::standard())
    }

    pub fn with_data(repo: R, config: ServiceConfig, data: GameData) -> Self {
        let rng = Mutex::new(config.rng());
        Self {
            repo,
            data,
            config,
            locks: EncounterLocks::new(),
            rng,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    /// Resolve one battle action of a trainer
    pub async fn resolve_turn(
        &self,
        trainer_id: TrainerId,
        request: &TurnRequest,
    ) -> Result<TurnResponse, ArenaError> {
        self.turn(trainer_id, request).await.inspect_err(|e| {
            // Storage failures are already logged where they happen.
            if e.is_client_error() {
                tracing::warn!(
                    trainer = trainer_id,
                    encounter = request.game_id,
                    status = e.status_code(),
                    error = %e,
                    "turn rejected"
                );
            }
        })
    }

    async fn turn(
        &self,
        trainer_id: TrainerId,
        request: &TurnRequest,
    ) -> Result<TurnResponse, ArenaError> {
        let command = TurnCommand::from_request(request)?;
        let mut trainer = self.trainer(trainer_id).await?;

        let _guard = self.locks.acquire((trainer_id, command.kind)).await;

        let mut encounter = self
            .repo
            .encounter(trainer_id, command.kind, command.encounter)
            .await
            .storage("load encounter")?
            .ok_or_else(|| ArenaError::not_found(format!("encounter {}", command.encounter)))?;

        if !encounter.active && !encounter.blocked {
            self.ensure_no_other_active(trainer_id, &encounter).await?;
        }

        let mut team = self
            .repo
            .team(trainer_id, command.kind)
            .await
            .storage("load team")?;

        let gear = TrainerGear::from_accessories(
            &trainer.accessories,
            self.config.critical_accessory_id,
            self.config.speed_accessory_id,
        );

        let report = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            let mut ctx = BattleContext {
                encounter: &mut encounter,
                team: &mut team,
                catalog: &self.data.catalog,
                chart: &self.data.chart,
                gear,
            };
            resolve_turn(&mut ctx, &command, &mut *rng)
        }?;

        self.repo
            .save_encounter(trainer_id, &encounter)
            .await
            .storage("save encounter")?;
        self.repo
            .save_pokemon(trainer_id, &team)
            .await
            .storage("save team")?;

        if let Some(resolution) = report.resolution {
            self.after_resolution(&mut trainer, &encounter, &report, resolution)
                .await?;
        }

        Ok(report.to_response())
    }

    /// Generate the 31 game levels of a trainer
    pub async fn generate_levels(&self, trainer_id: TrainerId) -> Result<(), ArenaError> {
        self.trainer(trainer_id).await?;

        let levels = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            generate_levels(&self.data.schedule, &self.data.catalog, &mut *rng)
        }?;

        let ids = self
            .repo
            .insert_encounters(trainer_id, levels)
            .await
            .storage("insert levels")?;
        tracing::info!(trainer = trainer_id, levels = ids.len(), "levels stored");
        Ok(())
    }

    /// Generate the five league levels of a trainer
    pub async fn generate_league(&self, trainer_id: TrainerId) -> Result<(), ArenaError> {
        self.trainer(trainer_id).await?;
        self.store_new_league(trainer_id).await
    }

    /// Describe what merging `second_id` into `first_id` would do
    pub async fn merge_preview(
        &self,
        trainer_id: TrainerId,
        request: &MergeRequest,
    ) -> Result<MergePreview, ArenaError> {
        request.validate()?;
        let (first, first_species, second, second_species) =
            self.merge_pair(trainer_id, request).await?;

        let outcome = compute_merge(
            MergeInput::new(&first, first_species),
            MergeInput::new(&second, second_species),
        )?;
        Ok(outcome.to_preview(&first_species.name, &second_species.name))
    }

    /// Merge `second_id` into `first_id`, consuming the second creature
    pub async fn merge_commit(
        &self,
        trainer_id: TrainerId,
        request: &MergeRequest,
    ) -> Result<MergedPokemon, ArenaError> {
        request.validate()?;
        let (mut first, first_species, second, second_species) =
            self.merge_pair(trainer_id, request).await?;

        let outcome = compute_merge(
            MergeInput::new(&first, first_species),
            MergeInput::new(&second, second_species),
        )
        .inspect_err(|e| {
            tracing::warn!(trainer = trainer_id, error = %e, "merge rejected");
        })?;
        outcome.apply(&mut first);

        self.repo
            .commit_merge(trainer_id, &first, second.id)
            .await
            .storage("commit merge")?;

        tracing::info!(
            trainer = trainer_id,
            survivor = first.id,
            consumed = second.id,
            iv_delta = outcome.iv_delta,
            "pokemon merged"
        );
        Ok(merged_pokemon(&first, first_species))
    }

    async fn trainer(&self, trainer_id: TrainerId) -> Result<Trainer, ArenaError> {
        self.repo
            .trainer(trainer_id)
            .await
            .storage("load trainer")?
            .ok_or_else(|| ArenaError::not_found(format!("trainer {}", trainer_id)))
    }

    /// Only one encounter per kind may be in progress
    async fn ensure_no_other_active(
        &self,
        trainer_id: TrainerId,
        encounter: &Encounter,
    ) -> Result<(), ArenaError> {
        let encounters = self
            .repo
            .encounters(trainer_id, encounter.kind)
            .await
            .storage("load encounters")?;

        if let Some(other) = encounters.iter().find(|e| e.active && e.id != encounter.id) {
            tracing::warn!(
                trainer = trainer_id,
                encounter = encounter.id,
                active = other.id,
                "another encounter is in progress"
            );
            return Err(ArenaError::conflict(format!(
                "{} level {} is already in progress",
                encounter.kind, other.number
            )));
        }
        Ok(())
    }

    /// Bookkeeping after an encounter ends
    async fn after_resolution(
        &self,
        trainer: &mut Trainer,
        encounter: &Encounter,
        report: &TurnReport,
        resolution: Resolution,
    ) -> Result<(), ArenaError> {
        if resolution.is_loss() {
            trainer.defeats += 1;
            self.repo
                .save_trainer(trainer)
                .await
                .storage("save trainer")?;

            if encounter.kind == EncounterKind::League {
                self.reset_league(trainer.id).await?;
            }
            return Ok(());
        }

        if report.is_first_clear() {
            self.unlock_next(trainer.id, encounter).await?;
        }
        Ok(())
    }

    /// Unblock whatever the first clear of `encounter` opens up
    async fn unlock_next(&self, trainer_id: TrainerId, cleared: &Encounter) -> Result<(), ArenaError> {
        let encounters = self
            .repo
            .encounters(trainer_id, cleared.kind)
            .await
            .storage("load encounters")?;

        let next = match cleared.kind {
            EncounterKind::Game => encounters
                .into_iter()
                .find(|e| e.number == cleared.number + 1 && e.blocked),
            EncounterKind::League => {
                let champion_number = self.data.roster.champion().map(|c| c.number);
                let challengers_passed = encounters
                    .iter()
                    .filter(|e| Some(e.number) != champion_number)
                    .all(|e| e.passed);
                if challengers_passed {
                    encounters
                        .into_iter()
                        .find(|e| Some(e.number) == champion_number && e.blocked)
                } else {
                    None
                }
            }
        };

        if let Some(mut next) = next {
            next.blocked = false;
            self.repo
                .save_encounter(trainer_id, &next)
                .await
                .storage("unblock encounter")?;
            tracing::info!(
                trainer = trainer_id,
                kind = %next.kind,
                number = next.number,
                "encounter unblocked"
            );
        }
        Ok(())
    }

    /// Drop the league team and start the league over
    async fn reset_league(&self, trainer_id: TrainerId) -> Result<(), ArenaError> {
        self.repo
            .delete_team(trainer_id, EncounterKind::League)
            .await
            .storage("delete league team")?;
        let removed = self
            .repo
            .delete_encounters(trainer_id, EncounterKind::League)
            .await
            .storage("delete league")?;
        tracing::info!(trainer = trainer_id, removed, "league reset");

        self.store_new_league(trainer_id).await
    }

    async fn store_new_league(&self, trainer_id: TrainerId) -> Result<(), ArenaError> {
        let league = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            generate_league(&self.data.roster, &self.data.catalog, &mut *rng)
        }?;

        let ids = self
            .repo
            .insert_encounters(trainer_id, league)
            .await
            .storage("insert league")?;
        tracing::info!(trainer = trainer_id, leaders = ids.len(), "league stored");
        Ok(())
    }

    async fn merge_pair(
        &self,
        trainer_id: TrainerId,
        request: &MergeRequest,
    ) -> Result<(OwnedPokemon, &Species, OwnedPokemon, &Species), ArenaError> {
        let first = self.owned_pokemon(trainer_id, request.first_id).await?;
        let second = self.owned_pokemon(trainer_id, request.second_id).await?;
        let first_species = self.species(first.species)?;
        let second_species = self.species(second.species)?;
        Ok((first, first_species, second, second_species))
    }

    async fn owned_pokemon(
        &self,
        trainer_id: TrainerId,
        id: PokemonId,
    ) -> Result<OwnedPokemon, ArenaError> {
        self.repo
            .pokemon(trainer_id, id)
            .await
            .storage("load pokemon")?
            .ok_or_else(|| ArenaError::not_found(format!("pokemon {}", id)))
    }

    fn species(&self, pokedex_id: u16) -> Result<&Species, ArenaError> {
        self.data
            .catalog
            .get(pokedex_id)
            .ok_or_else(|| ArenaError::internal(format!("species {} missing from catalog", pokedex_id)))
    }
}
