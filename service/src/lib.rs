//! Async orchestration for the dojo arena.
//!
//! [`ArenaService`] ties the battle resolver and the roster generators to a
//! storage backend behind [`ArenaRepository`]. Turns of one trainer against
//! one encounter kind are serialized through [`EncounterLocks`]; everything
//! else runs concurrently.
//!
//! ```ignore
//! use dojo_service::{ArenaService, InMemoryRepository, ServiceConfig};
//!
//! let service = ArenaService::new(InMemoryRepository::new(), ServiceConfig::default());
//! service.generate_levels(trainer_id).await?;
//! let response = service.resolve_turn(trainer_id, &request).await?;
//! ```

mod config;
mod locks;
mod memory;
mod repository;
mod service;


pub use config::ServiceConfig;
pub use locks::{EncounterLocks, LockKey};
pub use memory::InMemoryRepository;
pub use repository::{ArenaRepository, Trainer, TrainerId};
pub use service::{ArenaService, GameData};
