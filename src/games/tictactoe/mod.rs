//! Three-in-a-row on a 3x3 grid.

mod bot;
mod game;

pub use bot::find_immediate_win;
pub use game::{Cell, GameConfig, GameState, Mark, Move, Position, Status, TicTacToe};
