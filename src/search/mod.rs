//! Adversarial search shared by the Hard bot tiers.

pub mod minimax;

pub use minimax::{best_move, best_move_among, score, Adversarial};
