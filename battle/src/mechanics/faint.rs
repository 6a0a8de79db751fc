//! Movement penalty for a trainer creature that faints

use crate::types::OwnedPokemon;

/// Charges lost when a single movement type survives
pub const SOLE_MOVEMENT_PENALTY: u32 = 2;

/// Charges lost per movement type otherwise
pub const MOVEMENT_PENALTY: u32 = 1;

/// Strip movement charges from a fainted creature.
///
/// No-op in league mode or while the creature still has PS. With exactly one
/// movement type left it loses two charges from it, otherwise one charge from
/// every type that has any. Returns whether a penalty was applied.
pub fn penalize_on_faint(pokemon: &mut OwnedPokemon, league: bool) -> bool {
    if league || !pokemon.is_fainted() {
        return false;
    }

    let surviving: Vec<_> = pokemon.surviving_movements().collect();
    if surviving.is_empty() {
        return false;
    }

    let penalty = if surviving.len() == 1 {
        SOLE_MOVEMENT_PENALTY
    } else {
        MOVEMENT_PENALTY
    };

    for movement in surviving {
        if let Some(qty) = pokemon.movements.get_mut(&movement) {
            *qty = qty.saturating_sub(penalty);
        }
    }

    tracing::debug!(pokemon = pokemon.id, penalty, "faint penalty applied");
    true
}
