//! Game level generation

use dojo_battle::{Encounter, EncounterKind, EncounterSlot, RandomSource, SpeciesCatalog};

use crate::error::GenerationError;
use crate::iv::distribute_iv;
use crate::pools::TierPools;
use crate::schedule::{LevelPlan, LevelSchedule};

/// Generate every level of a schedule.
///
/// Encounter ids are left at 0 for the store to assign; slot ids follow the
/// switch-in order. Level 1 starts unblocked, every later level blocked.
/// Either every level is returned or none.
pub fn generate_levels(
    schedule: &LevelSchedule,
    catalog: &SpeciesCatalog,
    rng: &mut dyn RandomSource,
) -> Result<Vec<Encounter>, GenerationError> {
    schedule.validate()?;
    let pools = TierPools::from_catalog(catalog);

    let levels = schedule
        .levels
        .iter()
        .map(|plan| generate_level(plan, &pools, catalog, rng))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(levels = levels.len(), "game levels generated");
    Ok(levels)
}

fn generate_level(
    plan: &LevelPlan,
    pools: &TierPools,
    catalog: &SpeciesCatalog,
    rng: &mut dyn RandomSource,
) -> Result<Encounter, GenerationError> {
    let mut encounter = Encounter::new(0, EncounterKind::Game, plan.number);
    encounter.reward = plan.reward;
    encounter.unlock = plan.unlock;
    encounter.blocked = plan.number > 1;

    let (low, high) = plan.iv_budget();
    let mut order = 0;
    for (tier, count) in plan.tiers() {
        for pokedex_id in pools.draw(tier, count, rng)? {
            let species = catalog
                .get(pokedex_id)
                .ok_or(GenerationError::UnknownSpecies(pokedex_id))?;
            order += 1;

            let ivs = distribute_iv(rng.between(low, high), rng);
            let max_ps = species.base_ps + ivs.ps * 2;
            encounter
                .slots
                .push(EncounterSlot::new(order, order, pokedex_id, ivs, max_ps));
        }
    }

    tracing::debug!(level = plan.number, slots = encounter.slots.len(), "level generated");
    Ok(encounter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dojo_battle::{ElementType, PowerTier, Species};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate(seed: u64) -> Vec<Encounter> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_levels(&LevelSchedule::standard(), &SpeciesCatalog::kanto(), &mut rng).unwrap()
    }

    #[test]
    fn test_only_first_level_unblocked() {
        let levels = generate(1);
        assert_eq!(levels.len(), 31);
        assert!(!levels[0].blocked);
        assert!(levels[1..].iter().all(|l| l.blocked));
        assert!(levels.iter().all(|l| !l.passed && !l.active));
        assert_eq!(levels[0].kind, EncounterKind::Game);
    }

    #[test]
    fn test_slots_follow_plan() {
        let schedule = LevelSchedule::standard();
        let catalog = SpeciesCatalog::kanto();
        let levels = generate(2);

        for (level, plan) in levels.iter().zip(&schedule.levels) {
            assert_eq!(level.number, plan.number);
            assert_eq!(level.slots.len(), 6);

            let mut species: Vec<_> = level.slots.iter().map(|s| s.species).collect();
            species.sort_unstable();
            species.dedup();
            assert_eq!(species.len(), 6, "duplicate species in level {}", plan.number);

            // Weakest first
            let powers: Vec<_> = level
                .slots
                .iter()
                .map(|s| catalog.get(s.species).unwrap().power)
                .collect();
            assert!(powers.windows(2).all(|w| w[0] <= w[1]));

            let mut counts = [0u8; 6];
            for power in powers {
                let index = PowerTier::ALL.iter().position(|t| *t == power).unwrap();
                counts[index] += 1;
            }
            assert_eq!(counts, plan.tier_counts);
        }
    }

    #[test]
    fn test_slot_stats() {
        let catalog = SpeciesCatalog::kanto();
        let schedule = LevelSchedule::standard();
        let levels = generate(3);

        for (level, plan) in levels.iter().zip(&schedule.levels) {
            let (low, high) = plan.iv_budget();
            for (i, slot) in level.slots.iter().enumerate() {
                let species = catalog.get(slot.species).unwrap();
                assert_eq!(slot.order, i as u32 + 1);
                assert_eq!(slot.id, slot.order);
                assert_eq!(slot.max_ps, species.base_ps + slot.ivs.ps * 2);
                assert_eq!(slot.ps, slot.max_ps);
                assert!(!slot.dead);
                assert!(slot.ivs.total() <= high.min(93));
                if high <= 31 {
                    assert!(slot.ivs.total() >= low);
                }
            }
        }
    }

    #[test]
    fn test_rewards_and_unlocks_copied() {
        let levels = generate(4);
        assert_eq!(levels[0].reward, 100);
        assert_eq!(levels[2].unlock, Some(dojo_battle::Unlock::Accessory(3)));
        assert_eq!(levels[30].unlock, Some(dojo_battle::Unlock::Badge(7)));
    }

    #[test]
    fn test_small_catalog_fails_fast() {
        let catalog: SpeciesCatalog = (1..=5u16)
            .map(|id| Species::new(id, format!("Mon{}", id), PowerTier::Three, &[ElementType::Normal]))
            .collect();
        let mut rng = StdRng::seed_from_u64(5);

        let err = generate_levels(&LevelSchedule::standard(), &catalog, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::PoolExhausted {
                tier: PowerTier::Three,
                requested: 6,
                available: 5
            }
        ));
    }
}
