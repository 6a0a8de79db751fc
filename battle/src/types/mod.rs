//! Domain types shared by the mechanics, the turn resolver and the generators

mod catalog;
mod element;
mod encounter;
mod pokemon;
mod species;

pub use element::{ElementType, TypeChart, TypeEdge};
pub use encounter::{Encounter, EncounterId, EncounterKind, EncounterSlot, SlotId, Unlock};
pub use pokemon::{Ivs, OwnedPokemon, PokemonId, MAX_IV};
pub use species::{PowerTier, Species, SpeciesCatalog};
