//! Creature merges.
//!
//! Merging consumes the second creature and strengthens the first:
//!
//! - for every elemental type both species share, part of the second
//!   creature's charges move over (between 0 and 12 per type)
//! - every IV of the first rises by 2 if the second is of a stronger tier,
//!   by 1 otherwise (capped at 31)
//! - the first creature's PS resets to its new maximum

use dojo_battle::{ElementType, Ivs, OwnedPokemon, Species};
use dojo_protocol::{MergePreview, MergedPokemon, MovementCount};

use crate::error::MergeError;

/// Most charges one type can gain from a merge
pub const MAX_TRANSFER: u32 = 12;

/// Largest bonus a stronger second creature adds per type
pub const MAX_POWER_BONUS: u32 = 5;

/// A creature together with its catalog entry
#[derive(Debug, Clone, Copy)]
pub struct MergeInput<'a> {
    pub pokemon: &'a OwnedPokemon,
    pub species: &'a Species,
}

impl<'a> MergeInput<'a> {
    pub fn new(pokemon: &'a OwnedPokemon, species: &'a Species) -> Self {
        Self { pokemon, species }
    }
}

/// Computed effect of merging `second` into `first`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Charges gained per shared type
    pub movement_deltas: Vec<(ElementType, u32)>,
    pub iv_delta: u32,
    pub resulting_ivs: Ivs,
    pub resulting_ps: u32,
}

/// Compute a merge without changing either creature.
pub fn compute_merge(first: MergeInput<'_>, second: MergeInput<'_>) -> Result<MergeOutcome, MergeError> {
    if first.pokemon.id == second.pokemon.id {
        return Err(MergeError::SameCreature(first.pokemon.id));
    }

    let shared = first.species.shared_types(second.species);
    if shared.is_empty() {
        return Err(MergeError::NoSharedType {
            first: first.pokemon.id,
            second: second.pokemon.id,
        });
    }

    let first_power = first.species.power.value();
    let second_power = second.species.power.value();

    let movement_deltas = shared
        .into_iter()
        .filter_map(|t| {
            let quantity = second.pokemon.movement(t);
            (quantity > 0).then(|| (t, transferred(quantity, first_power, second_power)))
        })
        .collect();

    let iv_delta = if second_power > first_power { 2 } else { 1 };
    let mut resulting_ivs = first.pokemon.ivs;
    resulting_ivs.raise_all(iv_delta);
    let resulting_ps = first.species.power.base_ps() + resulting_ivs.ps * 2;

    Ok(MergeOutcome {
        movement_deltas,
        iv_delta,
        resulting_ivs,
        resulting_ps,
    })
}

/// Charges of one type carried over from `quantity`
fn transferred(quantity: u32, first_power: u32, second_power: u32) -> u32 {
    let half = quantity / 2;
    let (bonus, penalty) = if second_power == first_power {
        (quantity * 3 / 10, 0)
    } else if second_power > first_power {
        ((second_power - first_power).min(MAX_POWER_BONUS), 0)
    } else {
        (0, (first_power - second_power).min(1))
    };
    (half + bonus).saturating_sub(penalty).min(MAX_TRANSFER)
}

impl MergeOutcome {
    /// Apply the outcome to the surviving creature
    pub fn apply(&self, first: &mut OwnedPokemon) {
        for &(movement, quantity) in &self.movement_deltas {
            first.add_movement(movement, quantity);
        }
        first.ivs = self.resulting_ivs;
        first.ps = self.resulting_ps;
    }

    /// Human-readable summary lines
    pub fn describe(&self, first_name: &str, second_name: &str) -> Vec<String> {
        let mut lines = vec![format!("{} will absorb {}", first_name, second_name)];
        for (movement, quantity) in &self.movement_deltas {
            lines.push(format!("+{} {} movements", quantity, movement));
        }
        lines.push(format!("+{} to every IV (max 31)", self.iv_delta));
        lines.push(format!(
            "IVs become PS {} / Attack {} / Defense {}",
            self.resulting_ivs.ps, self.resulting_ivs.attack, self.resulting_ivs.defense
        ));
        lines.push(format!("PS restored to {}", self.resulting_ps));
        lines
    }

    pub fn to_preview(&self, first_name: &str, second_name: &str) -> MergePreview {
        MergePreview {
            lines: self.describe(first_name, second_name),
            iv_delta: self.iv_delta,
            resulting_ps: self.resulting_ps,
        }
    }
}

/// Full state of a creature after a merge
pub fn merged_pokemon(pokemon: &OwnedPokemon, species: &Species) -> MergedPokemon {
    MergedPokemon {
        id: pokemon.id,
        pokedex_id: species.pokedex_id,
        name: species.name.clone(),
        ps: pokemon.ps,
        max_ps: pokemon.max_ps(species),
        iv_ps: pokemon.ivs.ps,
        iv_attack: pokemon.ivs.attack,
        iv_defense: pokemon.ivs.defense,
        movements: pokemon
            .movements
            .iter()
            .map(|(movement, quantity)| MovementCount {
                type_id: movement.id(),
                name: movement.as_str().to_string(),
                quantity: *quantity,
            })
            .collect(),
    }
}
