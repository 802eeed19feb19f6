//! Shared rules contract for the board game engines.
//!
//! Each engine implements `Rules` to define:
//! - What moves are legal in a state
//! - How a move produces the next state
//! - Whether the game has ended
//!
//! The engines are structurally similar but behaviorally independent;
//! associated types keep each game's state and move vocabulary its own
//! instead of forcing a common base representation.

use crate::core::{GameRng, RuleViolation};

/// Bot strength tier.
///
/// Maps only to an AI strategy; never to board-size or rule changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Rules contract implemented by each board game engine.
///
/// States are immutable values: `apply` validates its input and returns a
/// new state, never mutating the previous one. A rejected move surfaces a
/// [`RuleViolation`] and leaves the input state usable.
pub trait Rules {
    /// Per-game configuration consumed when creating the initial state.
    type Config;
    /// Complete game state, an immutable value owned by the caller.
    type State: Clone;
    /// Game-specific move record.
    type Move: Clone;
    /// In-progress / terminal classification.
    type Status;

    /// Create the starting state for a new game.
    fn initial_state(&self, config: Self::Config) -> Self::State;

    /// Enumerate every legal move for the side to move.
    fn legal_moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Apply a move, producing the next state or a named rejection.
    fn apply(&self, state: &Self::State, mv: &Self::Move)
        -> Result<Self::State, RuleViolation>;

    /// Classify the state as in-progress or terminal.
    fn status(&self, state: &Self::State) -> Self::Status;
}

/// Pick uniformly among the legal moves of a state.
///
/// The shared Easy-tier behavior: one RNG draw, `None` when the side to
/// move has no legal move.
pub fn uniform_move<R: Rules>(
    rules: &R,
    state: &R::State,
    rng: &mut GameRng,
) -> Option<R::Move> {
    let moves = rules.legal_moves(state);
    rng.pick(&moves).cloned()
}
