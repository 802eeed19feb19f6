//! Chess, with rules and move generation delegated to an external oracle.

mod bot;
mod game;
mod oracle;

pub use game::{ChessConfig, ChessGame, GameState};
pub use oracle::{
    ChessColor, ChessMove, ChessPiece, ChessPosition, ChessRules, ChessStatus, DrawReason,
    PieceType, Promotion,
};
