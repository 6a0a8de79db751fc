//! Owned creature state

use std::collections::BTreeMap;

use super::element::ElementType;
use super::species::Species;

pub type PokemonId = u64;

/// Highest value a single IV can reach
pub const MAX_IV: u32 = 31;

/// Individual values (0-31 each)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ivs {
    pub ps: u32,
    pub attack: u32,
    pub defense: u32,
}

impl Ivs {
    /// Create IVs, clamping every stat to 31
    pub fn new(ps: u32, attack: u32, defense: u32) -> Self {
        Self {
            ps: ps.min(MAX_IV),
            attack: attack.min(MAX_IV),
            defense: defense.min(MAX_IV),
        }
    }

    pub fn total(&self) -> u32 {
        self.ps + self.attack + self.defense
    }

    /// Raise every stat by `amount`, capped at 31
    pub fn raise_all(&mut self, amount: u32) {
        self.ps = (self.ps + amount).min(MAX_IV);
        self.attack = (self.attack + amount).min(MAX_IV);
        self.defense = (self.defense + amount).min(MAX_IV);
    }

    /// Mutable access by stat index (0 = PS, 1 = attack, 2 = defense)
    pub fn stat_mut(&mut self, index: usize) -> Option<&mut u32> {
        match index {
            0 => Some(&mut self.ps),
            1 => Some(&mut self.attack),
            2 => Some(&mut self.defense),
            _ => None,
        }
    }
}

/// A creature owned by a trainer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnedPokemon {
    pub id: PokemonId,

    /// Pokedex id of the species
    pub species: u16,

    /// Current PS (0..=max)
    pub ps: u32,

    pub ivs: Ivs,

    /// Remaining movement charges per elemental type
    pub movements: BTreeMap<ElementType, u32>,

    /// Whether this creature is the one currently fighting
    pub active: bool,
}

impl OwnedPokemon {
    /// Create a fully healed creature of `species`
    pub fn new(id: PokemonId, species: &Species, ivs: Ivs) -> Self {
        Self {
            id,
            species: species.pokedex_id,
            ps: species.base_ps + ivs.ps * 2,
            ivs,
            movements: BTreeMap::new(),
            active: false,
        }
    }

    /// Builder-style movement setter
    pub fn with_movement(mut self, movement: ElementType, quantity: u32) -> Self {
        self.movements.insert(movement, quantity);
        self
    }

    pub fn max_ps(&self, species: &Species) -> u32 {
        species.base_ps + self.ivs.ps * 2
    }

    pub fn heal(&mut self, species: &Species) {
        self.ps = self.max_ps(species);
    }

    pub fn is_fainted(&self) -> bool {
        self.ps == 0
    }

    /// Remaining charges for a movement type (0 if unknown)
    pub fn movement(&self, movement: ElementType) -> u32 {
        self.movements.get(&movement).copied().unwrap_or(0)
    }

    pub fn knows_movement(&self, movement: ElementType) -> bool {
        self.movements.contains_key(&movement)
    }

    /// Movement types that still have charges
    pub fn surviving_movements(&self) -> impl Iterator<Item = ElementType> + '_ {
        self.movements
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(t, _)| *t)
    }

    /// Spend one charge. Returns false if none were left.
    pub fn consume_movement(&mut self, movement: ElementType) -> bool {
        match self.movements.get_mut(&movement) {
            Some(qty) if *qty > 0 => {
                *qty -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn add_movement(&mut self, movement: ElementType, quantity: u32) {
        *self.movements.entry(movement).or_insert(0) += quantity;
    }

    /// Apply damage, clamping at 0. Returns true if this hit fainted it.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        let was_standing = self.ps > 0;
        self.ps = self.ps.saturating_sub(damage);
        was_standing && self.ps == 0
    }

    pub fn on_switch_out(&mut self) {
        self.active = false;
    }

    pub fn on_switch_in(&mut self) {
        self.active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PowerTier;

    fn charmander() -> Species {
        Species::new(4, "Charmander", PowerTier::Three, &[ElementType::Fire])
    }

    #[test]
    fn test_ivs_clamp_and_raise() {
        let mut ivs = Ivs::new(40, 30, 5);
        assert_eq!(ivs, Ivs { ps: 31, attack: 30, defense: 5 });

        ivs.raise_all(2);
        assert_eq!(ivs, Ivs { ps: 31, attack: 31, defense: 7 });
        assert_eq!(ivs.total(), 69);
    }

    #[test]
    fn test_new_pokemon_is_healed() {
        let species = charmander();
        let pokemon = OwnedPokemon::new(1, &species, Ivs::new(10, 0, 0));

        assert_eq!(pokemon.ps, 110);
        assert_eq!(pokemon.max_ps(&species), 110);
        assert!(!pokemon.is_fainted());
        assert!(!pokemon.active);
    }

    #[test]
    fn test_consume_movement() {
        let mut pokemon = OwnedPokemon::new(1, &charmander(), Ivs::default())
            .with_movement(ElementType::Fire, 1);

        assert!(pokemon.consume_movement(ElementType::Fire));
        assert_eq!(pokemon.movement(ElementType::Fire), 0);
        assert!(!pokemon.consume_movement(ElementType::Fire));
        assert!(!pokemon.consume_movement(ElementType::Water));
        assert!(pokemon.knows_movement(ElementType::Fire));
        assert!(!pokemon.knows_movement(ElementType::Water));
    }

    #[test]
    fn test_surviving_movements() {
        let pokemon = OwnedPokemon::new(1, &charmander(), Ivs::default())
            .with_movement(ElementType::Fire, 3)
            .with_movement(ElementType::Normal, 0)
            .with_movement(ElementType::Dragon, 1);

        let surviving: Vec<_> = pokemon.surviving_movements().collect();
        assert_eq!(surviving, vec![ElementType::Fire, ElementType::Dragon]);
    }

    #[test]
    fn test_take_damage() {
        let species = charmander();
        let mut pokemon = OwnedPokemon::new(1, &species, Ivs::default());

        assert!(!pokemon.take_damage(50));
        assert_eq!(pokemon.ps, 40);
        assert!(pokemon.take_damage(500));
        assert_eq!(pokemon.ps, 0);
        // Already down
        assert!(!pokemon.take_damage(10));

        pokemon.heal(&species);
        assert_eq!(pokemon.ps, 90);
    }

    #[test]
    fn test_switch_flags() {
        let mut pokemon = OwnedPokemon::new(1, &charmander(), Ivs::default());
        pokemon.on_switch_in();
        assert!(pokemon.active);
        pokemon.on_switch_out();
        assert!(!pokemon.active);
    }
}
