//! # parlor
//!
//! A catalog of turn-based game engines with heuristic and search-based
//! opponents: three-in-a-row, checkers, a chess variant delegated to an
//! external rules oracle, a territory game on a 9x9 grid, a Sudoku
//! generator/solver, and a number-range guessing game.
//!
//! ## Design Principles
//!
//! 1. **Immutable state, threaded explicitly.** Every transition validates
//!    its input and returns a new state value; the caller is the sole
//!    owner. No engine holds state across calls.
//!
//! 2. **Deterministic randomness.** All bot randomness and puzzle
//!    generation flows through an explicitly-passed [`core::GameRng`];
//!    a seed reproduces every decision.
//!
//! 3. **Named rejections, never silent ones.** Transitions fail with a
//!    [`core::RuleViolation`] and leave the input state untouched.
//!
//! 4. **External collaborators are injected.** The chess rules oracle and
//!    the best-score store arrive through constructors, never as ambient
//!    globals.
//!
//! ## Modules
//!
//! - `core`: RNG, error taxonomy, undo/redo timeline, score store
//! - `rules`: the shared `Rules` trait, `Difficulty`, the game catalog
//! - `search`: depth-limited minimax with alpha-beta pruning
//! - `games`: the six engines

pub mod core;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{GameRng, MemoryStore, RuleViolation, ScoreStore, Seed, Timeline};

pub use crate::rules::{uniform_move, Difficulty, GameKind, Rules};

pub use crate::search::Adversarial;

pub use crate::games::checkers::Checkers;
pub use crate::games::chess::ChessGame;
pub use crate::games::go::Go;
pub use crate::games::number_guess::NumberGuess;
pub use crate::games::tictactoe::TicTacToe;
