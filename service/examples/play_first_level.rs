//! Generate a trainer's levels and fight the first one until it resolves.
//!
//! ```text
//! RUST_LOG=dojo_battle=debug,info cargo run -p dojo-service --example play_first_level
//! ```

use dojo_battle::{ElementType, EncounterKind, Ivs, OwnedPokemon};
use dojo_protocol::TurnRequest;
use dojo_service::{ArenaRepository, ArenaService, InMemoryRepository, ServiceConfig, Trainer};
use tracing_subscriber::EnvFilter;

const TRAINER: u64 = 1;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ServiceConfig::from_path(path)?,
        None => ServiceConfig::default().with_seed(2024),
    };
    let service = ArenaService::new(InMemoryRepository::new(), config);
    let repo = service.repository();

    repo.save_trainer(&Trainer::new(TRAINER, "Red").with_accessory(3))
        .await?;

    let catalog = &service.data().catalog;
    let starters = [(1, 7, ElementType::Water), (2, 4, ElementType::Fire), (3, 1, ElementType::Grass)];
    let mut team = Vec::new();
    for (id, pokedex_id, movement) in starters {
        let species = catalog
            .get(pokedex_id)
            .ok_or_else(|| anyhow::anyhow!("species {} missing", pokedex_id))?;
        team.push(OwnedPokemon::new(id, species, Ivs::new(10, 10, 10)).with_movement(movement, 20));
    }
    repo.save_pokemon(TRAINER, &team).await?;
    repo.set_team(TRAINER, EncounterKind::Game, team.iter().map(|p| p.id).collect())
        .await?;

    service.generate_levels(TRAINER).await?;
    let level = repo
        .encounters(TRAINER, EncounterKind::Game)
        .await?
        .into_iter()
        .find(|e| !e.blocked)
        .ok_or_else(|| anyhow::anyhow!("no open level"))?;

    let mut on_field = team[0].id;
    let mut movement = ElementType::Water;
    let mut bench: Vec<_> = team[1..].iter().map(|p| (p.id, p.movements.keys().copied().next())).collect();

    for slot in &level.slots {
        loop {
            let request = TurnRequest {
                game_id: level.id,
                pokemon_id: on_field,
                movement_type_id: movement.id(),
                enemy_slot_id: slot.id,
                pokemon_changed_id: None,
                pokemon_change_defeat_id: None,
                league: false,
                surrender: false,
            };
            let response = service.resolve_turn(TRAINER, &request).await?;
            println!(
                "slot {} | {:?} | you {}/{} | enemy {}/{} | {}",
                slot.id,
                response.first_attacker,
                response.pokemon_ps,
                response.pokemon_max_ps,
                response.enemy.ps,
                response.enemy.max_ps,
                response.phase
            );

            if let Some(outcome) = &response.outcome {
                println!("level {} finished: {}", level.number, outcome);
                return Ok(());
            }
            if response.enemy.dead {
                break;
            }
            if response.phase == "awaiting-replacement" {
                let Some((next, next_movement)) = bench.pop() else {
                    return Ok(());
                };
                service
                    .resolve_turn(
                        TRAINER,
                        &TurnRequest {
                            movement_type_id: 0,
                            pokemon_change_defeat_id: Some(next),
                            ..request
                        },
                    )
                    .await?;
                on_field = next;
                movement = next_movement.unwrap_or(ElementType::Normal);
            }
        }
    }
    Ok(())
}
