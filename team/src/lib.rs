//! Roster generation and creature merges for the dojo arena.
//!
//! - [`generate_levels`] builds the 31 game levels from a [`LevelSchedule`]
//! - [`generate_league`] builds the five league levels from a [`LeagueRoster`]
//! - [`compute_merge`] previews what merging two creatures would do
//!
//! Schedules and rosters are plain data with `standard()` constructors and
//! can also be loaded from JSON.

mod error;
mod iv;
mod league;
mod levels;
mod merge;
mod pools;
mod schedule;

pub use error::{GenerationError, MergeError};
pub use iv::distribute_iv;
pub use league::{generate_league, LeagueLeader, LeagueRoster, LEAGUE_POWER, LEAGUE_WEAK_IV};
pub use levels::generate_levels;
pub use merge::{compute_merge, merged_pokemon, MergeInput, MergeOutcome, MAX_TRANSFER};
pub use pools::TierPools;
pub use schedule::{LevelPlan, LevelSchedule, TEAM_SIZE};
