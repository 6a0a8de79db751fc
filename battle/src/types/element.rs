//! Elemental types and the type effectiveness table

use std::collections::HashMap;

/// Elemental types (18, chart order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ElementType {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl ElementType {
    pub const ALL: [ElementType; 18] = [
        ElementType::Normal,
        ElementType::Fire,
        ElementType::Water,
        ElementType::Electric,
        ElementType::Grass,
        ElementType::Ice,
        ElementType::Fighting,
        ElementType::Poison,
        ElementType::Ground,
        ElementType::Flying,
        ElementType::Psychic,
        ElementType::Bug,
        ElementType::Rock,
        ElementType::Ghost,
        ElementType::Dragon,
        ElementType::Dark,
        ElementType::Steel,
        ElementType::Fairy,
    ];

    pub fn all() -> &'static [ElementType] {
        &Self::ALL
    }

    /// Wire id (1-18). 0 is reserved for "no movement".
    pub fn id(&self) -> u32 {
        *self as u32 + 1
    }

    /// Resolve a wire id
    pub fn from_id(id: u32) -> Option<Self> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    /// Parse a type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Normal => "Normal",
            ElementType::Fire => "Fire",
            ElementType::Water => "Water",
            ElementType::Electric => "Electric",
            ElementType::Grass => "Grass",
            ElementType::Ice => "Ice",
            ElementType::Fighting => "Fighting",
            ElementType::Poison => "Poison",
            ElementType::Ground => "Ground",
            ElementType::Flying => "Flying",
            ElementType::Psychic => "Psychic",
            ElementType::Bug => "Bug",
            ElementType::Rock => "Rock",
            ElementType::Ghost => "Ghost",
            ElementType::Dragon => "Dragon",
            ElementType::Dark => "Dark",
            ElementType::Steel => "Steel",
            ElementType::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored (attacking, defending) interaction
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeEdge {
    pub attacking: ElementType,
    pub defending: ElementType,
    pub multiplier: f64,
}

/// Type effectiveness lookup.
///
/// Only non-neutral interactions are stored; every pair without an edge
/// has a multiplier of 1.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeChart {
    edges: HashMap<(ElementType, ElementType), f64>,
}

impl TypeChart {
    /// Empty chart (everything neutral)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an explicit edge list. Later edges override earlier ones.
    pub fn from_edges(edges: impl IntoIterator<Item = TypeEdge>) -> Self {
        let mut chart = Self::new();
        for edge in edges {
            chart.set(edge.attacking, edge.defending, edge.multiplier);
        }
        chart
    }

    /// The standard 18-type chart
    pub fn standard() -> Self {
        let mut chart = Self::new();
        for (attacking, strong, weak, immune) in STANDARD_CHART {
            for &defending in *strong {
                chart.set(*attacking, defending, 2.0);
            }
            for &defending in *weak {
                chart.set(*attacking, defending, 0.5);
            }
            for &defending in *immune {
                chart.set(*attacking, defending, 0.0);
            }
        }
        chart
    }

    pub fn set(&mut self, attacking: ElementType, defending: ElementType, multiplier: f64) {
        self.edges.insert((attacking, defending), multiplier);
    }

    /// Multiplier for one attacking type against one defending type
    pub fn multiplier(&self, attacking: ElementType, defending: ElementType) -> f64 {
        self.edges
            .get(&(attacking, defending))
            .copied()
            .unwrap_or(1.0)
    }

    /// Product of the multipliers against every defending type
    pub fn multiplier_against(&self, attacking: ElementType, defending: &[ElementType]) -> f64 {
        defending
            .iter()
            .map(|t| self.multiplier(attacking, *t))
            .product()
    }

    /// Stored edges, in no particular order
    pub fn edges(&self) -> impl Iterator<Item = TypeEdge> + '_ {
        self.edges
            .iter()
            .map(|(&(attacking, defending), &multiplier)| TypeEdge {
                attacking,
                defending,
                multiplier,
            })
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

type ChartRow = (
    ElementType,
    &'static [ElementType],
    &'static [ElementType],
    &'static [ElementType],
);

/// Attacking type, then the defenders it hits for 2x, 0.5x and 0x
#[rustfmt::skip]
static STANDARD_CHART: &[ChartRow] = {
    use ElementType::*;
    &[
        (Normal,   &[],                                      &[Rock, Steel],                                          &[Ghost]),
        (Fire,     &[Grass, Ice, Bug, Steel],                &[Fire, Water, Rock, Dragon],                            &[]),
        (Water,    &[Fire, Ground, Rock],                    &[Water, Grass, Dragon],                                 &[]),
        (Electric, &[Water, Flying],                         &[Electric, Grass, Dragon],                              &[Ground]),
        (Grass,    &[Water, Ground, Rock],                   &[Fire, Grass, Poison, Flying, Bug, Dragon, Steel],      &[]),
        (Ice,      &[Grass, Ground, Flying, Dragon],         &[Fire, Water, Ice, Steel],                              &[]),
        (Fighting, &[Normal, Ice, Rock, Dark, Steel],        &[Poison, Flying, Psychic, Bug, Fairy],                  &[Ghost]),
        (Poison,   &[Grass, Fairy],                          &[Poison, Ground, Rock, Ghost],                          &[Steel]),
        (Ground,   &[Fire, Electric, Poison, Rock, Steel],   &[Grass, Bug],                                           &[Flying]),
        (Flying,   &[Grass, Fighting, Bug],                  &[Electric, Rock, Steel],                                &[]),
        (Psychic,  &[Fighting, Poison],                      &[Psychic, Steel],                                       &[Dark]),
        (Bug,      &[Grass, Psychic, Dark],                  &[Fire, Fighting, Poison, Flying, Ghost, Steel, Fairy],  &[]),
        (Rock,     &[Fire, Ice, Flying, Bug],                &[Fighting, Ground, Steel],                              &[]),
        (Ghost,    &[Psychic, Ghost],                        &[Dark],                                                 &[Normal]),
        (Dragon,   &[Dragon],                                &[Steel],                                                &[Fairy]),
        (Dark,     &[Psychic, Ghost],                        &[Fighting, Dark, Fairy],                                &[]),
        (Steel,    &[Ice, Rock, Fairy],                      &[Fire, Water, Electric, Steel],                         &[]),
        (Fairy,    &[Fighting, Dragon, Dark],                &[Fire, Poison, Steel],                                  &[]),
    ]
};
