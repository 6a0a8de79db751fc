//! Battle domain types and turn resolution for the dojo arena.
//!
//! # Overview
//!
//! `dojo-battle` sits between `dojo-protocol` (request/response contracts)
//! and the generators and service that drive it:
//!
//! ```text
//! dojo-protocol (wire contracts + ArenaError)
//!        │
//!        ▼
//! dojo-battle (domain types + mechanics + turn resolver) ← THIS CRATE
//!        │
//!        ├─> dojo-team (level / league generation, merges)
//!        └─> dojo-service (async orchestration)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`ElementType`] and [`TypeChart`] - the 18 elemental types and their
//!   effectiveness edges
//! - [`Species`], [`PowerTier`] and [`SpeciesCatalog`] - the Kanto catalog
//! - [`OwnedPokemon`] and [`Ivs`] - a trainer's creature
//! - [`Encounter`] and [`EncounterSlot`] - game levels and league levels
//!
//! ## Mechanics
//! - [`compute_damage`], [`roll_critical`], [`resolve_first_attacker`],
//!   [`penalize_on_faint`]
//! - [`RandomSource`] - every random draw goes through this trait
//!
//! ## Turn Resolution
//! - [`resolve_turn`] - validate and apply one [`TurnCommand`]
//!
//! # Example Usage
//!
//! ```ignore
//! use dojo_battle::{resolve_turn, BattleContext, TurnCommand};
//!
//! let command = TurnCommand::from_request(&request)?;
//! let mut ctx = BattleContext {
//!     encounter: &mut encounter,
//!     team: &mut team,
//!     catalog: &catalog,
//!     chart: &chart,
//!     gear,
//! };
//! let report = resolve_turn(&mut ctx, &command, &mut rng)?;
//! println!("{}", report.to_response().phase);
//! ```

pub mod mechanics;
pub mod query;
pub mod turn;
pub mod types;

// Re-export main types at crate root for convenience
pub use mechanics::{
    compute_damage, penalize_on_faint, resolve_first_attacker, roll_critical, DamageInput,
    RandomSource, ScriptedRolls, Side,
};
pub use query::{best_attacking_type, Effectiveness};
pub use turn::{
    resolve_turn, AttackReport, BattleContext, BattleError, Resolution, TrainerGear, TurnAction,
    TurnCommand, TurnPhase, TurnReport,
};
pub use types::{
    ElementType, Encounter, EncounterId, EncounterKind, EncounterSlot, Ivs, OwnedPokemon,
    PokemonId, PowerTier, SlotId, Species, SpeciesCatalog, TypeChart, TypeEdge, Unlock, MAX_IV,
};

// Re-export commonly used protocol types
pub use dojo_protocol::{ArenaError, TurnRequest, TurnResponse};
