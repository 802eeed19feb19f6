//! The game engines, one module per catalog entry.
//!
//! Each engine is a pure state model: move generation, a validating
//! transition function, and a terminal-status oracle, plus its bot where
//! the game has one. The caller owns all state and threads it explicitly;
//! no engine holds anything across calls.

pub mod checkers;
pub mod chess;
pub mod go;
pub mod number_guess;
pub mod sudoku;
pub mod tictactoe;
