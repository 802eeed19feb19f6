//! Rules contract and game catalog.
//!
//! Games implement [`Rules`] to define:
//! - Legal moves for each game state
//! - How moves produce new states
//! - Win/loss/draw conditions
//!
//! The shared layer never interprets game-specific concepts directly.

pub mod catalog;
pub mod engine;

pub use catalog::GameKind;
pub use engine::{uniform_move, Difficulty, Rules};
