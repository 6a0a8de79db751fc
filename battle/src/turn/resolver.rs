//! The battle state machine.
//!
//! A turn validates the request against the encounter and the trainer's
//! team, then mutates both in place. Nothing is written when validation
//! fails. Persisting the result is the caller's job.

use super::action::{TurnAction, TurnCommand};
use super::error::BattleError;
use super::report::{AttackReport, Resolution, TurnPhase, TurnReport};
use crate::mechanics::{
    compute_damage, penalize_on_faint, resolve_first_attacker, roll_critical, DamageInput,
    RandomSource, Side,
};
use crate::query::best_attacking_type;
use crate::types::{
    ElementType, Encounter, OwnedPokemon, PokemonId, SlotId, Species, SpeciesCatalog, TypeChart,
    Unlock,
};

/// Battle-relevant accessories the trainer has equipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrainerGear {
    /// Raises the critical chance to 15%
    pub critical_charm: bool,
    /// Re-flips a lost tie on turn order
    pub swift_charm: bool,
}

impl TrainerGear {
    /// Derive gear flags from equipped accessory ids
    pub fn from_accessories(equipped: &[u32], critical_id: u32, speed_id: u32) -> Self {
        Self {
            critical_charm: equipped.contains(&critical_id),
            swift_charm: equipped.contains(&speed_id),
        }
    }
}

/// Mutable battle state plus the static data a turn reads
#[derive(Debug)]
pub struct BattleContext<'a> {
    pub encounter: &'a mut Encounter,
    /// The trainer's team for this encounter kind
    pub team: &'a mut [OwnedPokemon],
    pub catalog: &'a SpeciesCatalog,
    pub chart: &'a TypeChart,
    pub gear: TrainerGear,
}

/// Attacks exchanged during one turn
#[derive(Debug, Default)]
struct Exchange {
    first_attacker: Option<Side>,
    dealt: Option<AttackReport>,
    received: Option<AttackReport>,
    consumed: Option<ElementType>,
}

/// Resolve one trainer action against an encounter.
pub fn resolve_turn(
    ctx: &mut BattleContext<'_>,
    command: &TurnCommand,
    rng: &mut dyn RandomSource,
) -> Result<TurnReport, BattleError> {
    let catalog = ctx.catalog;
    let encounter_id = ctx.encounter.id;

    if ctx.encounter.blocked {
        tracing::warn!(encounter = encounter_id, "action on a blocked encounter");
        return Err(BattleError::EncounterBlocked(encounter_id));
    }
    for pokemon in ctx.team.iter() {
        species_of(catalog, pokemon.species)?;
    }

    let actor = team_index(ctx.team, command.pokemon)?;
    let slot = ctx
        .encounter
        .slot(command.slot)
        .ok_or(BattleError::UnknownSlot(command.slot))?;
    species_of(catalog, slot.species)?;
    let slot_alive = slot.is_alive();
    let league = ctx.encounter.kind.is_league();

    let mut exchange = Exchange::default();
    let on_field = match command.action {
        TurnAction::Surrender => actor,

        TurnAction::ReplaceFainted { to } => {
            if !ctx.team[actor].is_fainted() {
                return Err(BattleError::NotFainted(command.pokemon));
            }
            let incoming = replacement_index(ctx.team, to)?;

            ctx.encounter.active = true;
            ctx.team[actor].on_switch_out();
            ctx.team[incoming].on_switch_in();
            incoming
        }

        TurnAction::Switch { to } => {
            let incoming = replacement_index(ctx.team, to)?;

            ctx.encounter.active = true;
            ctx.team[actor].on_switch_out();
            ctx.team[incoming].on_switch_in();
            if slot_alive {
                exchange.received = Some(enemy_strike(ctx, command.slot, incoming, rng)?);
            }
            incoming
        }

        TurnAction::Attack { movement } => {
            let pokemon = &ctx.team[actor];
            if pokemon.is_fainted() {
                return Err(BattleError::PokemonFainted(pokemon.id));
            }
            if !slot_alive {
                return Err(BattleError::SlotDefeated(command.slot));
            }
            if league {
                if !pokemon.knows_movement(movement) {
                    return Err(BattleError::MovementNotKnown {
                        pokemon: pokemon.id,
                        movement: movement.to_string(),
                    });
                }
            } else if pokemon.movement(movement) == 0 {
                tracing::warn!(
                    encounter = encounter_id,
                    pokemon = pokemon.id,
                    movement = %movement,
                    "no movements left"
                );
                return Err(BattleError::NoMovementsLeft {
                    pokemon: pokemon.id,
                    movement: movement.to_string(),
                });
            }

            ctx.encounter.active = true;
            ctx.team[actor].on_switch_in();
            attack_exchange(ctx, command.slot, actor, movement, &mut exchange, rng)?;
            actor
        }
    };

    let (phase, resolution) = if command.action == TurnAction::Surrender {
        (TurnPhase::Resolved, Some(Resolution::Surrender))
    } else if ctx.encounter.all_defeated() {
        (TurnPhase::Resolved, Some(Resolution::Victory))
    } else if ctx.team.iter().all(OwnedPokemon::is_fainted) {
        (TurnPhase::Resolved, Some(Resolution::Defeat))
    } else if ctx.team[on_field].is_fainted() {
        (TurnPhase::AwaitingReplacement, None)
    } else {
        (TurnPhase::AwaitingAction, None)
    };

    let pokemon = &ctx.team[on_field];
    let enemy = ctx
        .encounter
        .slot(command.slot)
        .cloned()
        .ok_or(BattleError::UnknownSlot(command.slot))?;
    let mut report = TurnReport {
        encounter: encounter_id,
        kind: ctx.encounter.kind,
        action: command.action,
        first_attacker: exchange.first_attacker,
        dealt: exchange.dealt,
        received: exchange.received,
        movement_consumed: exchange.consumed,
        pokemon: pokemon.id,
        pokemon_ps: pokemon.ps,
        pokemon_max_ps: pokemon.max_ps(species_of(catalog, pokemon.species)?),
        movements: pokemon.movements.iter().map(|(m, q)| (*m, *q)).collect(),
        enemy,
        phase,
        resolution,
        reward: None,
        unlock: None,
    };

    if let Some(resolution) = resolution {
        let first_clear = conclude(ctx, resolution)?;
        if let Some((reward, unlock)) = first_clear {
            report.reward = Some(reward);
            report.unlock = unlock;
        }
        tracing::info!(
            encounter = encounter_id,
            kind = %ctx.encounter.kind,
            outcome = resolution.as_str(),
            first_clear = report.reward.is_some(),
            "encounter resolved"
        );
    }

    Ok(report)
}

/// Resolve turn order and let both sides attack
fn attack_exchange(
    ctx: &mut BattleContext<'_>,
    slot_id: SlotId,
    actor: usize,
    movement: ElementType,
    exchange: &mut Exchange,
    rng: &mut dyn RandomSource,
) -> Result<(), BattleError> {
    let catalog = ctx.catalog;
    let attacker_power = species_of(catalog, ctx.team[actor].species)?.power.value();
    let defender_power = enemy_species(ctx, slot_id)?.power.value();

    let first = resolve_first_attacker(attacker_power, defender_power, ctx.gear.swift_charm, rng);
    exchange.first_attacker = Some(first);

    match first {
        Side::Attacker => {
            let dealt = trainer_strike(ctx, slot_id, actor, movement, exchange, rng)?;
            exchange.dealt = Some(dealt);
            if slot_is_alive(ctx, slot_id) {
                exchange.received = Some(enemy_strike(ctx, slot_id, actor, rng)?);
            }
        }
        Side::Defender => {
            exchange.received = Some(enemy_strike(ctx, slot_id, actor, rng)?);
            if !ctx.team[actor].is_fainted() {
                let dealt = trainer_strike(ctx, slot_id, actor, movement, exchange, rng)?;
                exchange.dealt = Some(dealt);
            }
        }
    }
    Ok(())
}

/// The trainer's creature hits the enemy slot
fn trainer_strike(
    ctx: &mut BattleContext<'_>,
    slot_id: SlotId,
    actor: usize,
    movement: ElementType,
    exchange: &mut Exchange,
    rng: &mut dyn RandomSource,
) -> Result<AttackReport, BattleError> {
    let catalog = ctx.catalog;
    let league = ctx.encounter.kind.is_league();

    if !league && ctx.team[actor].consume_movement(movement) {
        exchange.consumed = Some(movement);
    }

    let pokemon = &ctx.team[actor];
    let attacker = species_of(catalog, pokemon.species)?;
    let defender = enemy_species(ctx, slot_id)?;
    let slot = ctx
        .encounter
        .slot_mut(slot_id)
        .ok_or(BattleError::UnknownSlot(slot_id))?;

    let multiplier = ctx.chart.multiplier_against(movement, &defender.types);
    let critical = roll_critical(rng, ctx.gear.critical_charm);
    let damage = compute_damage(&DamageInput {
        attacker_power: attacker.power.value(),
        defender_power: defender.power.value(),
        attacker_iv_attack: pokemon.ivs.attack,
        defender_iv_defense: slot.ivs.defense,
        type_multiplier: multiplier,
        critical,
        league,
    });
    let knocked_out = slot.take_damage(damage);

    tracing::debug!(
        encounter = ctx.encounter.id,
        pokemon = pokemon.id,
        slot = slot_id,
        movement = %movement,
        damage,
        critical,
        knocked_out,
        "trainer strike"
    );

    Ok(AttackReport {
        side: Side::Attacker,
        movement,
        multiplier,
        damage,
        critical,
        knocked_out,
    })
}

/// The enemy slot hits a trainer creature with its best own type
fn enemy_strike(
    ctx: &mut BattleContext<'_>,
    slot_id: SlotId,
    target: usize,
    rng: &mut dyn RandomSource,
) -> Result<AttackReport, BattleError> {
    let catalog = ctx.catalog;
    let league = ctx.encounter.kind.is_league();

    let attacker = enemy_species(ctx, slot_id)?;
    let defender = species_of(catalog, ctx.team[target].species)?;
    let slot = ctx
        .encounter
        .slot(slot_id)
        .ok_or(BattleError::UnknownSlot(slot_id))?;

    let (movement, multiplier) = best_attacking_type(ctx.chart, &attacker.types, &defender.types)
        .unwrap_or((
            ElementType::Normal,
            ctx.chart.multiplier_against(ElementType::Normal, &defender.types),
        ));
    let critical = roll_critical(rng, false);
    let damage = compute_damage(&DamageInput {
        attacker_power: attacker.power.value(),
        defender_power: defender.power.value(),
        attacker_iv_attack: slot.ivs.attack,
        defender_iv_defense: ctx.team[target].ivs.defense,
        type_multiplier: multiplier,
        critical,
        league,
    });

    let pokemon = &mut ctx.team[target];
    let knocked_out = pokemon.take_damage(damage);
    if knocked_out {
        penalize_on_faint(pokemon, league);
    }

    tracing::debug!(
        encounter = ctx.encounter.id,
        slot = slot_id,
        pokemon = pokemon.id,
        movement = %movement,
        damage,
        critical,
        knocked_out,
        "enemy strike"
    );

    Ok(AttackReport {
        side: Side::Defender,
        movement,
        multiplier,
        damage,
        critical,
        knocked_out,
    })
}

/// Close the encounter: deactivate it, restore its roster and heal the team.
/// Returns the reward and unlock of a first victory.
fn conclude(
    ctx: &mut BattleContext<'_>,
    resolution: Resolution,
) -> Result<Option<(u32, Option<Unlock>)>, BattleError> {
    let catalog = ctx.catalog;

    ctx.encounter.active = false;
    ctx.encounter.reset_slots();
    for pokemon in ctx.team.iter_mut() {
        pokemon.heal(species_of(catalog, pokemon.species)?);
        pokemon.on_switch_out();
    }

    if resolution != Resolution::Victory || ctx.encounter.passed {
        return Ok(None);
    }
    ctx.encounter.passed = true;
    Ok(Some((ctx.encounter.reward, ctx.encounter.unlock)))
}

fn species_of(catalog: &SpeciesCatalog, pokedex_id: u16) -> Result<&Species, BattleError> {
    catalog
        .get(pokedex_id)
        .ok_or(BattleError::UnknownSpecies(pokedex_id))
}

fn enemy_species<'a>(ctx: &BattleContext<'a>, slot_id: SlotId) -> Result<&'a Species, BattleError> {
    let catalog = ctx.catalog;
    let slot = ctx
        .encounter
        .slot(slot_id)
        .ok_or(BattleError::UnknownSlot(slot_id))?;
    species_of(catalog, slot.species)
}

fn slot_is_alive(ctx: &BattleContext<'_>, slot_id: SlotId) -> bool {
    ctx.encounter.slot(slot_id).is_some_and(|s| s.is_alive())
}

fn team_index(team: &[OwnedPokemon], id: PokemonId) -> Result<usize, BattleError> {
    team.iter()
        .position(|p| p.id == id)
        .ok_or(BattleError::UnknownPokemon(id))
}

/// Index of a switch target, which must be able to fight
fn replacement_index(team: &[OwnedPokemon], id: PokemonId) -> Result<usize, BattleError> {
    let index = team_index(team, id)?;
    if team[index].is_fainted() {
        return Err(BattleError::PokemonFainted(id));
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::ScriptedRolls;
    use crate::types::{EncounterKind, EncounterSlot, Ivs};

    const PIKACHU: u16 = 25;
    const CHARMANDER: u16 = 4;
    const SQUIRTLE: u16 = 7;
    const GEODUDE: u16 = 74;
    const ONIX: u16 = 95;

    struct Fixture {
        encounter: Encounter,
        team: Vec<OwnedPokemon>,
        catalog: SpeciesCatalog,
        chart: TypeChart,
        gear: TrainerGear,
    }

    impl Fixture {
        fn new(kind: EncounterKind) -> Self {
            let catalog = SpeciesCatalog::kanto();

            let mut encounter = Encounter::new(1, kind, 1);
            encounter.reward = 100;
            encounter.unlock = Some(Unlock::Badge(1));
            encounter
                .slots
                .push(EncounterSlot::new(10, 1, CHARMANDER, Ivs::default(), 90));
            encounter
                .slots
                .push(EncounterSlot::new(11, 2, GEODUDE, Ivs::default(), 90));

            let team = vec![
                pokemon(&catalog, 1, SQUIRTLE).with_movement(ElementType::Water, 3),
                pokemon(&catalog, 2, PIKACHU)
                    .with_movement(ElementType::Electric, 2)
                    .with_movement(ElementType::Normal, 1),
            ];

            Self {
                encounter,
                team,
                catalog,
                chart: TypeChart::standard(),
                gear: TrainerGear::default(),
            }
        }

        fn turn(
            &mut self,
            pokemon: PokemonId,
            slot: SlotId,
            action: TurnAction,
            rng: &mut dyn RandomSource,
        ) -> Result<TurnReport, BattleError> {
            let command = TurnCommand {
                encounter: self.encounter.id,
                kind: self.encounter.kind,
                pokemon,
                slot,
                action,
            };
            let mut ctx = BattleContext {
                encounter: &mut self.encounter,
                team: &mut self.team,
                catalog: &self.catalog,
                chart: &self.chart,
                gear: self.gear,
            };
            resolve_turn(&mut ctx, &command, rng)
        }

        fn member(&self, id: PokemonId) -> &OwnedPokemon {
            self.team.iter().find(|p| p.id == id).unwrap()
        }
    }

    fn pokemon(catalog: &SpeciesCatalog, id: PokemonId, species: u16) -> OwnedPokemon {
        OwnedPokemon::new(id, catalog.get(species).unwrap(), Ivs::default())
    }

    fn water() -> TurnAction {
        TurnAction::Attack {
            movement: ElementType::Water,
        }
    }

    #[test]
    fn test_attack_exchange() {
        let mut fx = Fixture::new(EncounterKind::Game);
        // Tie on power 3: attacker wins the coin, no crits
        let mut rolls = ScriptedRolls::new().with_flips([true, false, false]);

        let report = fx.turn(1, 10, water(), &mut rolls).unwrap();

        assert_eq!(report.first_attacker, Some(Side::Attacker));
        // Water into Fire: 65 * 2 = 130, Charmander has 90 PS
        let dealt = report.dealt.unwrap();
        assert_eq!(dealt.damage, 130);
        assert!(dealt.knocked_out);
        assert_eq!(dealt.effectiveness().as_str(), "very effective");
        // Knocked out before it could answer
        assert!(report.received.is_none());

        assert_eq!(report.movement_consumed, Some(ElementType::Water));
        assert_eq!(fx.member(1).movement(ElementType::Water), 2);
        assert!(report.enemy.dead);
        assert_eq!(report.phase, TurnPhase::AwaitingAction);
        assert!(fx.encounter.active);
        assert!(fx.member(1).active);
    }

    #[test]
    fn test_defender_strikes_first() {
        let mut fx = Fixture::new(EncounterKind::Game);
        let mut rolls = ScriptedRolls::new().with_flips([false, false, false]);

        let report = fx.turn(1, 10, water(), &mut rolls).unwrap();

        assert_eq!(report.first_attacker, Some(Side::Defender));
        // Fire into Water: 65 * 0.5 = 32.5, rounds to 33
        let received = report.received.unwrap();
        assert_eq!(received.movement, ElementType::Fire);
        assert_eq!(received.damage, 33);
        assert_eq!(received.effectiveness().as_str(), "not very effective");
        assert_eq!(report.pokemon_ps, 90 - 33);
        assert!(report.dealt.unwrap().knocked_out);
    }

    #[test]
    fn test_critical_triples_damage() {
        let mut fx = Fixture::new(EncounterKind::Game);
        fx.encounter.slot_mut(10).unwrap().max_ps = 500;
        fx.encounter.reset_slots();
        // Coin to attacker, trainer crit, enemy no crit
        let mut rolls = ScriptedRolls::new().with_flips([true, true, false]);

        let report = fx.turn(1, 10, water(), &mut rolls).unwrap();

        let dealt = report.dealt.unwrap();
        assert!(dealt.critical);
        assert_eq!(dealt.damage, 390);
        assert_eq!(report.enemy.ps, 110);
        assert!(report.received.is_some());
    }

    #[test]
    fn test_zero_charges_rejected_without_changes() {
        let mut fx = Fixture::new(EncounterKind::Game);
        fx.team[0].movements.insert(ElementType::Water, 0);
        let before = fx.team.clone();

        let err = fx.turn(1, 10, water(), &mut ScriptedRolls::new()).unwrap_err();

        assert!(matches!(err, BattleError::NoMovementsLeft { .. }));
        assert_eq!(fx.team, before);
        assert!(!fx.encounter.active);
    }

    #[test]
    fn test_league_does_not_consume_charges() {
        let mut fx = Fixture::new(EncounterKind::League);
        fx.team[0].movements.insert(ElementType::Water, 0);
        let mut rolls = ScriptedRolls::new().with_flips([true, false, false]);

        let report = fx.turn(1, 10, water(), &mut rolls).unwrap();

        assert!(report.movement_consumed.is_none());
        assert_eq!(fx.member(1).movement(ElementType::Water), 0);

        // Unknown key is still rejected
        let err = fx
            .turn(
                1,
                11,
                TurnAction::Attack {
                    movement: ElementType::Fire,
                },
                &mut rolls,
            )
            .unwrap_err();
        assert!(matches!(err, BattleError::MovementNotKnown { .. }));
    }

    #[test]
    fn test_league_damage_ignores_power_tiers() {
        let mut fx = Fixture::new(EncounterKind::League);
        let mut rolls = ScriptedRolls::new();

        // Pikachu (4) on Charmander (3), neutral Electric
        let report = fx
            .turn(
                2,
                10,
                TurnAction::Attack {
                    movement: ElementType::Electric,
                },
                &mut rolls,
            )
            .unwrap();

        let dealt = report.dealt.unwrap();
        assert_eq!(dealt.multiplier, 1.0);
        assert!(!dealt.critical);
        assert_eq!(dealt.damage, compute_damage(&DamageInput::new(10, 10)));
        assert_eq!(dealt.damage, 100);
        assert!(dealt.knocked_out);
    }

    #[test]
    fn test_blocked_encounter() {
        let mut fx = Fixture::new(EncounterKind::Game);
        fx.encounter.blocked = true;

        let err = fx.turn(1, 10, water(), &mut ScriptedRolls::new()).unwrap_err();
        assert_eq!(err, BattleError::EncounterBlocked(1));
    }

    #[test]
    fn test_unknown_ids() {
        let mut fx = Fixture::new(EncounterKind::Game);
        let mut rolls = ScriptedRolls::new();

        assert_eq!(
            fx.turn(99, 10, water(), &mut rolls).unwrap_err(),
            BattleError::UnknownPokemon(99)
        );
        assert_eq!(
            fx.turn(1, 99, water(), &mut rolls).unwrap_err(),
            BattleError::UnknownSlot(99)
        );
        assert_eq!(
            fx.turn(1, 10, TurnAction::Switch { to: 42 }, &mut rolls)
                .unwrap_err(),
            BattleError::UnknownPokemon(42)
        );
    }

    #[test]
    fn test_dead_slot_and_fainted_actor() {
        let mut fx = Fixture::new(EncounterKind::Game);
        fx.encounter.slot_mut(10).unwrap().take_damage(500);
        let mut rolls = ScriptedRolls::new();

        assert_eq!(
            fx.turn(1, 10, water(), &mut rolls).unwrap_err(),
            BattleError::SlotDefeated(10)
        );

        fx.team[0].ps = 0;
        assert_eq!(
            fx.turn(1, 11, water(), &mut rolls).unwrap_err(),
            BattleError::PokemonFainted(1)
        );
    }

    #[test]
    fn test_switch_takes_free_hit() {
        let mut fx = Fixture::new(EncounterKind::Game);
        let mut rolls = ScriptedRolls::new();

        let report = fx
            .turn(1, 10, TurnAction::Switch { to: 2 }, &mut rolls)
            .unwrap();

        assert!(report.dealt.is_none());
        assert!(report.first_attacker.is_none());
        // Charmander (3) into Pikachu (4) with Fire: 65 * 0.96 = 62.4
        let received = report.received.unwrap();
        assert_eq!(received.damage, 62);
        assert_eq!(report.pokemon, 2);
        assert_eq!(report.pokemon_ps, 120 - 62);
        assert!(!fx.member(1).active);
        assert!(fx.member(2).active);
    }

    #[test]
    fn test_faint_then_replacement() {
        let mut fx = Fixture::new(EncounterKind::Game);
        fx.team[1].ps = 10;
        let mut rolls = ScriptedRolls::new().with_flips([false, false]);

        // Pikachu (4) outranks Geodude (3), but Electric does nothing to Ground
        let report = fx
            .turn(
                2,
                11,
                TurnAction::Attack {
                    movement: ElementType::Electric,
                },
                &mut rolls,
            )
            .unwrap();

        assert_eq!(report.first_attacker, Some(Side::Attacker));
        let dealt = report.dealt.unwrap();
        assert_eq!(dealt.damage, 0);
        assert_eq!(dealt.effectiveness().as_str(), "not very effective");

        // Geodude answers with Ground: 65 * 2 * 0.96 = 124.8
        let received = report.received.unwrap();
        assert_eq!(received.movement, ElementType::Ground);
        assert_eq!(received.damage, 125);
        assert!(received.knocked_out);
        assert_eq!(report.phase, TurnPhase::AwaitingReplacement);
        assert!(report.to_response().pokemon_dead);

        // Two types had charges left: one lost from each
        assert_eq!(fx.member(2).movement(ElementType::Electric), 0);
        assert_eq!(fx.member(2).movement(ElementType::Normal), 0);

        // A healthy creature cannot be "replaced"
        assert_eq!(
            fx.turn(1, 11, TurnAction::ReplaceFainted { to: 2 }, &mut rolls)
                .unwrap_err(),
            BattleError::NotFainted(1)
        );
        // Nor can a fainted one come in
        assert_eq!(
            fx.turn(1, 11, TurnAction::Switch { to: 2 }, &mut rolls)
                .unwrap_err(),
            BattleError::PokemonFainted(2)
        );

        let report = fx
            .turn(2, 11, TurnAction::ReplaceFainted { to: 1 }, &mut rolls)
            .unwrap();
        assert!(report.received.is_none());
        assert_eq!(report.pokemon, 1);
        assert_eq!(report.phase, TurnPhase::AwaitingAction);
    }

    #[test]
    fn test_victory_restores_and_reports_first_clear() {
        let mut fx = Fixture::new(EncounterKind::Game);
        fx.encounter.slot_mut(11).unwrap().take_damage(500);
        fx.team[1].ps = 5;
        let mut rolls = ScriptedRolls::new().with_flips([true, false]);

        let report = fx.turn(1, 10, water(), &mut rolls).unwrap();

        assert_eq!(report.resolution, Some(Resolution::Victory));
        assert_eq!(report.phase, TurnPhase::Resolved);
        assert_eq!(report.reward, Some(100));
        assert_eq!(report.unlock, Some(Unlock::Badge(1)));
        assert!(report.is_first_clear());

        assert!(fx.encounter.passed);
        assert!(!fx.encounter.active);
        assert!(fx.encounter.slots.iter().all(|s| !s.dead && s.ps == s.max_ps));
        assert_eq!(fx.member(2).ps, 120);
        // Charges are not restored
        assert_eq!(fx.member(1).movement(ElementType::Water), 2);

        let response = report.to_response();
        assert_eq!(response.outcome.as_deref(), Some("victory"));
        assert_eq!(response.unlock.as_deref(), Some("badge:1"));
        assert_eq!(response.phase, "encounter-resolved");
    }

    #[test]
    fn test_second_victory_has_no_reward() {
        let mut fx = Fixture::new(EncounterKind::Game);
        fx.encounter.passed = true;
        fx.encounter.slot_mut(11).unwrap().take_damage(500);
        let mut rolls = ScriptedRolls::new().with_flips([true, false]);

        let report = fx.turn(1, 10, water(), &mut rolls).unwrap();

        assert_eq!(report.resolution, Some(Resolution::Victory));
        assert!(report.reward.is_none());
        assert!(!report.is_first_clear());
    }

    #[test]
    fn test_defeat_when_whole_team_faints() {
        let mut fx = Fixture::new(EncounterKind::Game);
        fx.team[0].ps = 0;
        fx.team[1].ps = 1;
        let mut rolls = ScriptedRolls::new().with_flips([false, false]);

        let report = fx
            .turn(
                2,
                11,
                TurnAction::Attack {
                    movement: ElementType::Electric,
                },
                &mut rolls,
            )
            .unwrap();

        assert_eq!(report.resolution, Some(Resolution::Defeat));
        assert!(report.reward.is_none());
        assert!(fx.team.iter().all(|p| !p.is_fainted()));
        assert!(!fx.encounter.passed);
    }

    #[test]
    fn test_surrender_heals_team() {
        let mut fx = Fixture::new(EncounterKind::Game);
        fx.team[0].ps = 3;
        fx.encounter.active = true;
        fx.encounter.slot_mut(10).unwrap().take_damage(40);

        let report = fx
            .turn(1, 10, TurnAction::Surrender, &mut ScriptedRolls::new())
            .unwrap();

        assert_eq!(report.resolution, Some(Resolution::Surrender));
        assert!(report.dealt.is_none() && report.received.is_none());
        assert_eq!(fx.member(1).ps, 90);
        assert!(!fx.encounter.active);
        assert_eq!(fx.encounter.slot(10).unwrap().ps, 90);
    }

    #[test]
    fn test_stronger_species_strikes_first() {
        let mut fx = Fixture::new(EncounterKind::League);
        fx.encounter
            .slots
            .push(EncounterSlot::new(12, 3, ONIX, Ivs::new(31, 31, 31), 362));
        let mut rolls = ScriptedRolls::new().with_flips([false, false, false]);

        let report = fx.turn(1, 12, water(), &mut rolls).unwrap();

        // Onix (5) outranks Squirtle (3) on turn order
        assert_eq!(report.first_attacker, Some(Side::Defender));
        assert!(report.received.is_some());
    }

    #[test]
    fn test_gear_from_accessories() {
        let gear = TrainerGear::from_accessories(&[1, 3], 3, 4);
        assert!(gear.critical_charm);
        assert!(!gear.swift_charm);
    }
}
