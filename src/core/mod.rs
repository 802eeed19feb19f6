//! Core building blocks shared by every game: RNG, error taxonomy,
//! undo/redo timeline, and the key-value persistence collaborator.

pub mod error;
pub mod history;
pub mod rng;
pub mod store;

pub use error::RuleViolation;
pub use history::Timeline;
pub use rng::{seed_from_str, GameRng, Seed};
pub use store::{MemoryStore, ScoreStore};
