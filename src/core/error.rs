//! Error taxonomy shared by every engine.
//!
//! All variants are local, recoverable conditions: a transition function
//! validates its input before constructing a new state, so a rejected move
//! leaves the caller's state untouched. Callers surface these as
//! user-facing validation messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rejected move or placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum RuleViolation {
    /// The move violates the game's rules (including moving after the
    /// game has ended).
    #[error("move violates the game rules")]
    IllegalMove,
    /// The move's player does not match the side to move.
    #[error("not your turn")]
    NotYourTurn,
    /// The target cell already holds a mark or piece.
    #[error("cell is already occupied")]
    CellOccupied,
    /// A coordinate or value lies outside the valid range.
    #[error("target is out of bounds")]
    OutOfBounds,
    /// The placement would leave the placing group with no liberties.
    #[error("placement would be suicide")]
    Suicide,
    /// The placement would recreate the board position from immediately
    /// before the opponent's last move.
    #[error("placement violates the ko rule")]
    KoViolation,
}
