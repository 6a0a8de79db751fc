//! Battle turn resolution

mod action;
mod error;
mod report;
mod resolver;

pub use action::{TurnAction, TurnCommand};
pub use error::BattleError;
pub use report::{AttackReport, Resolution, TurnPhase, TurnReport};
pub use resolver::{resolve_turn, BattleContext, TrainerGear};
