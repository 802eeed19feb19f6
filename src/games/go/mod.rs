//! Territory game (go-like) on a fixed 9x9 board.

mod bot;
mod game;

pub use game::{
    find_group, is_legal_placement, placement_outcome, score_board, Board, GameState, Go,
    GoConfig, Group, Move, Position, Score, Status, StoneColor, SIZE,
};
