//! The game catalog: a tagged union over every playable game.
//!
//! Used only where a single caller must branch over all games (menus,
//! routing); the engines themselves never depend on it.

use serde::{Deserialize, Serialize};

/// One entry in the game catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    NumberGuess,
    TicTacToe,
    Chess,
    Sudoku,
    Checkers,
    Go,
}

impl GameKind {
    /// Every catalog entry, in display order.
    pub const ALL: [GameKind; 6] = [
        GameKind::NumberGuess,
        GameKind::TicTacToe,
        GameKind::Chess,
        GameKind::Sudoku,
        GameKind::Checkers,
        GameKind::Go,
    ];

    /// Stable identifier, suitable for routes and storage keys.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            GameKind::NumberGuess => "number-guess",
            GameKind::TicTacToe => "tic-tac-toe",
            GameKind::Chess => "chess",
            GameKind::Sudoku => "sudoku",
            GameKind::Checkers => "checkers",
            GameKind::Go => "go",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            GameKind::NumberGuess => "Number Guess",
            GameKind::TicTacToe => "Tic-Tac-Toe",
            GameKind::Chess => "Chess",
            GameKind::Sudoku => "Sudoku",
            GameKind::Checkers => "Checkers",
            GameKind::Go => "Go",
        }
    }

    /// One-line description for catalog listings.
    #[must_use]
    pub fn tagline(self) -> &'static str {
        match self {
            GameKind::NumberGuess => {
                "Guess the secret number with warmer/colder guidance from the second guess."
            }
            GameKind::TicTacToe => "Classic 3x3 tic-tac-toe against a heuristic bot.",
            GameKind::Chess => "Chess against a search-based AI with three difficulties.",
            GameKind::Sudoku => "Unique-solution Sudoku puzzles with optional seeds.",
            GameKind::Checkers => "Classic 8x8 checkers with mandatory captures and kings.",
            GameKind::Go => "Territory play on a 9x9 board with a simple ko rule.",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<_> = GameKind::ALL.iter().map(|k| k.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), GameKind::ALL.len());
    }

    #[test]
    fn test_display_uses_title() {
        assert_eq!(GameKind::TicTacToe.to_string(), "Tic-Tac-Toe");
    }
}
