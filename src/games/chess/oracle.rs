//! The external chess rules oracle, consumed as a black box.
//!
//! Board legality, move generation, and check/checkmate/draw detection
//! all live behind these traits; this crate never implements chess rules
//! itself. The engine exchanges state with the oracle exclusively through
//! FEN strings, which double as the undo/redo serialization format.
//!
//! ## Contracts
//!
//! - `load` accepts only notation previously produced by `start` or
//!   [`ChessPosition::fen`]; implementations may panic on garbage.
//! - [`ChessPosition::apply`] rejects illegal moves with
//!   [`RuleViolation::IllegalMove`] and must accept every move returned
//!   by its own move generators.
//! - The `promotion` field is ignored for non-promoting moves.

use serde::{Deserialize, Serialize};

use crate::core::RuleViolation;

/// Side color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChessColor {
    White,
    Black,
}

impl ChessColor {
    #[must_use]
    pub fn opponent(self) -> ChessColor {
        match self {
            ChessColor::White => ChessColor::Black,
            ChessColor::Black => ChessColor::White,
        }
    }
}

/// Piece kind, with the material value used by the bot evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Material value in centipawns. The king carries none; mate is
    /// scored by the search, not the evaluation.
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            PieceType::Pawn => 100,
            PieceType::Knight => 320,
            PieceType::Bishop => 330,
            PieceType::Rook => 500,
            PieceType::Queen => 900,
            PieceType::King => 0,
        }
    }
}

/// A piece on the board, as reported by the oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessPiece {
    pub color: ChessColor,
    pub kind: PieceType,
}

/// Promotion choice for a pawn reaching the last rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

/// A move in coordinate form: origin and destination squares in algebraic
/// naming (`"e2"`, `"e4"`), plus an optional promotion choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessMove {
    pub from: String,
    pub to: String,
    pub promotion: Option<Promotion>,
}

impl ChessMove {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            promotion: None,
        }
    }

    #[must_use]
    pub fn with_promotion(mut self, promotion: Promotion) -> Self {
        self.promotion = Some(promotion);
        self
    }
}

/// Why a drawn game is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    Repetition,
    FiftyMove,
    Other,
}

/// Game classification as reported by the oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChessStatus {
    InProgress { turn: ChessColor, in_check: bool },
    Checkmate { winner: ChessColor },
    Draw { reason: DrawReason },
}

/// Factory half of the oracle: produces positions from notation.
pub trait ChessRules {
    type Position: ChessPosition;

    /// The standard starting position.
    fn start(&self) -> Self::Position;

    /// Restore a position from notation this oracle produced earlier.
    fn load(&self, fen: &str) -> Self::Position;
}

/// One immutable position under the oracle's rules.
pub trait ChessPosition: Sized {
    /// Serialize the position; feeds [`ChessRules::load`] round-trips.
    fn fen(&self) -> String;

    /// Side to move.
    fn turn(&self) -> ChessColor;

    /// Every legal move in the position.
    fn legal_moves(&self) -> Vec<ChessMove>;

    /// Legal moves from one origin square.
    fn legal_moves_from(&self, square: &str) -> Vec<ChessMove>;

    /// Apply a move, producing the successor position.
    fn apply(&self, mv: &ChessMove) -> Result<Self, RuleViolation>;

    /// Classify the position.
    fn status(&self) -> ChessStatus;

    /// Every piece on the board, for material evaluation.
    fn pieces(&self) -> Vec<ChessPiece>;
}
