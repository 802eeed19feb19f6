//! Checkers on the standard 8x8 board.

mod bot;
mod game;

pub use bot::evaluate_board;
pub use game::{
    apply_on_board, compute_winner, moves_for_player, moves_from, Board, Checkers, GameState,
    Move, Piece, PieceColor, PieceKind, Pos, Position, Status,
};
