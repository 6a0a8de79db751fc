//! Species catalog entries and power tiers

use std::collections::BTreeMap;

use super::catalog::KANTO;
use super::element::ElementType;

/// Power tier of a species. Drives combat math and generation pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerTier {
    Three,
    Four,
    Five,
    Six,
    Eight,
    Ten,
}

impl PowerTier {
    /// All tiers, weakest first
    pub const ALL: [PowerTier; 6] = [
        PowerTier::Three,
        PowerTier::Four,
        PowerTier::Five,
        PowerTier::Six,
        PowerTier::Eight,
        PowerTier::Ten,
    ];

    pub fn value(&self) -> u32 {
        match self {
            PowerTier::Three => 3,
            PowerTier::Four => 4,
            PowerTier::Five => 5,
            PowerTier::Six => 6,
            PowerTier::Eight => 8,
            PowerTier::Ten => 10,
        }
    }

    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.value() == value)
    }

    /// Base max PS for the tier (30 per power point)
    pub fn base_ps(&self) -> u32 {
        match self {
            PowerTier::Three => 90,
            PowerTier::Four => 120,
            PowerTier::Five => 150,
            PowerTier::Six => 180,
            PowerTier::Eight => 240,
            PowerTier::Ten => 300,
        }
    }
}

impl std::fmt::Display for PowerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Species {
    pub pokedex_id: u16,
    pub name: String,
    pub base_ps: u32,
    pub power: PowerTier,
    /// One or two elemental types
    pub types: Vec<ElementType>,
}

impl Species {
    /// Create a species whose base PS comes from its tier
    pub fn new(pokedex_id: u16, name: impl Into<String>, power: PowerTier, types: &[ElementType]) -> Self {
        Self {
            pokedex_id,
            name: name.into(),
            base_ps: power.base_ps(),
            power,
            types: types.to_vec(),
        }
    }

    pub fn has_type(&self, t: ElementType) -> bool {
        self.types.contains(&t)
    }

    /// Types shared with another species, in this species' order
    pub fn shared_types(&self, other: &Species) -> Vec<ElementType> {
        self.types
            .iter()
            .copied()
            .filter(|t| other.has_type(*t))
            .collect()
    }
}

/// Lookup of species by pokedex id
#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    species: BTreeMap<u16, Species>,
}

impl SpeciesCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The 151 Kanto species
    pub fn kanto() -> Self {
        KANTO
            .iter()
            .map(|&(id, name, power, types)| Species::new(id, name, power, types))
            .collect()
    }

    pub fn insert(&mut self, species: Species) {
        self.species.insert(species.pokedex_id, species);
    }

    pub fn get(&self, pokedex_id: u16) -> Option<&Species> {
        self.species.get(&pokedex_id)
    }

    pub fn contains(&self, pokedex_id: u16) -> bool {
        self.species.contains_key(&pokedex_id)
    }

    /// Species ordered by pokedex id
    pub fn iter(&self) -> impl Iterator<Item = &Species> {
        self.species.values()
    }

    /// Pokedex ids of every species in a tier, ascending
    pub fn ids_in_tier(&self, tier: PowerTier) -> Vec<u16> {
        self.iter()
            .filter(|s| s.power == tier)
            .map(|s| s.pokedex_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl FromIterator<Species> for SpeciesCatalog {
    fn from_iter<I: IntoIterator<Item = Species>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for species in iter {
            catalog.insert(species);
        }
        catalog
    }
}
