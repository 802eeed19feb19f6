//! Chess game state layered over the external rules oracle.
//!
//! This engine owns only what the oracle does not: FEN serialization
//! round-trips, undo/redo stacks of that notation, and the bot. Every
//! rules question is delegated.

use serde::{Deserialize, Serialize};

use crate::core::{RuleViolation, Timeline};
use crate::rules::Rules;

use super::oracle::{ChessColor, ChessMove, ChessPosition, ChessRules, ChessStatus, Promotion};

/// Game setup options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessConfig {
    /// The side the human plays; the bot takes the other one.
    pub human_color: ChessColor,
}

impl Default for ChessConfig {
    fn default() -> Self {
        Self {
            human_color: ChessColor::White,
        }
    }
}

/// Full game state: the current position in FEN plus undo/redo stacks of
/// previous FENs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub fen: String,
    pub human_color: ChessColor,
    timeline: Timeline<String>,
}

impl GameState {
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.timeline.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.timeline.can_redo()
    }
}

/// The chess engine, generic over the injected rules oracle.
#[derive(Clone, Debug)]
pub struct ChessGame<R: ChessRules> {
    rules: R,
}

impl<R: ChessRules> ChessGame<R> {
    #[must_use]
    pub fn new(rules: R) -> Self {
        Self { rules }
    }

    /// Rehydrate the state's position through the oracle.
    #[must_use]
    pub fn position(&self, state: &GameState) -> R::Position {
        self.rules.load(&state.fen)
    }

    /// Legal moves from one origin square.
    #[must_use]
    pub fn legal_moves_from(&self, state: &GameState, square: &str) -> Vec<ChessMove> {
        self.position(state).legal_moves_from(square)
    }

    /// Step back one move; unchanged when there is nothing to undo.
    #[must_use]
    pub fn undo(&self, state: &GameState) -> GameState {
        let mut next = state.clone();
        if let Some(previous) = next.timeline.undo(next.fen.clone()) {
            next.fen = previous;
        }
        next
    }

    /// Step forward again; unchanged when there is nothing to redo.
    #[must_use]
    pub fn redo(&self, state: &GameState) -> GameState {
        let mut next = state.clone();
        if let Some(restored) = next.timeline.redo(next.fen.clone()) {
            next.fen = restored;
        }
        next
    }
}

impl<R: ChessRules> Rules for ChessGame<R> {
    type Config = ChessConfig;
    type State = GameState;
    type Move = ChessMove;
    type Status = ChessStatus;

    fn initial_state(&self, config: ChessConfig) -> GameState {
        GameState {
            fen: self.rules.start().fen(),
            human_color: config.human_color,
            timeline: Timeline::new(),
        }
    }

    fn legal_moves(&self, state: &GameState) -> Vec<ChessMove> {
        self.position(state).legal_moves()
    }

    fn apply(&self, state: &GameState, mv: &ChessMove) -> Result<GameState, RuleViolation> {
        let position = self.position(state);
        // Promotion defaults to queen when the caller leaves it open.
        let normalized = ChessMove {
            from: mv.from.clone(),
            to: mv.to.clone(),
            promotion: mv.promotion.or(Some(Promotion::Queen)),
        };
        let next_position = position.apply(&normalized)?;

        let mut next = state.clone();
        next.fen = next_position.fen();
        next.timeline.record(state.fen.clone());
        Ok(next)
    }

    fn status(&self, state: &GameState) -> ChessStatus {
        self.position(state).status()
    }
}
