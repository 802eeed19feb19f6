//! Heuristic opponents for three-in-a-row.
//!
//! - **Hard**: take an immediate win, else block, else play the best
//!   remaining cell by a fixed preference order. Fully deterministic.
//! - **Medium**: takes wins, blocks with probability 0.7, otherwise
//!   samples among the top preferred open cells.
//! - **Easy**: notices a winning move 30% of the time, otherwise plays a
//!   uniformly random empty cell.

use crate::core::GameRng;
use crate::rules::{uniform_move, Difficulty};

use super::game::{GameState, Mark, Move, Position, Status, TicTacToe};

/// Cells in strategic preference order: center, then corners, then edges.
const PREFERENCES: [(usize, usize); 9] = [
    (1, 1),
    (0, 0),
    (0, 2),
    (2, 0),
    (2, 2),
    (0, 1),
    (1, 0),
    (1, 2),
    (2, 1),
];

/// Find a cell that wins the game for `player` immediately, if any.
#[must_use]
pub fn find_immediate_win(position: &Position, player: Mark) -> Option<(usize, usize)> {
    position
        .empty_cells()
        .into_iter()
        .find(|&(row, col)| position.with_mark(row, col, player).outcome() == Status::Won(player))
}

impl TicTacToe {
    /// Choose the bot's move, or `None` when the game is over.
    pub fn choose_bot_move(
        &self,
        state: &GameState,
        bot: Mark,
        difficulty: Difficulty,
        rng: &mut GameRng,
    ) -> Option<Move> {
        let position = &state.position;
        if position.outcome() != Status::InProgress {
            return None;
        }

        let cell = match difficulty {
            Difficulty::Hard => self.best_cell(position, bot),
            Difficulty::Medium => self.medium_cell(state, bot, rng),
            Difficulty::Easy => self.easy_cell(state, bot, rng),
        };
        cell.map(|(row, col)| Move {
            row,
            col,
            player: bot,
        })
    }

    /// Deterministic strongest choice: win, block, then preference order.
    fn best_cell(&self, position: &Position, bot: Mark) -> Option<(usize, usize)> {
        if let Some(win) = find_immediate_win(position, bot) {
            return Some(win);
        }
        if let Some(block) = find_immediate_win(position, bot.opponent()) {
            return Some(block);
        }
        PREFERENCES
            .into_iter()
            .find(|&(row, col)| position.cell(row, col).is_none())
    }

    fn medium_cell(
        &self,
        state: &GameState,
        bot: Mark,
        rng: &mut GameRng,
    ) -> Option<(usize, usize)> {
        let position = &state.position;
        if let Some(win) = find_immediate_win(position, bot) {
            return Some(win);
        }
        if let Some(block) = find_immediate_win(position, bot.opponent()) {
            // Blocks 70% of the time; an occasional lapse is the tier.
            if rng.next() < 0.7 {
                return Some(block);
            }
        }
        let open_preferences: Vec<(usize, usize)> = PREFERENCES
            .into_iter()
            .filter(|&(row, col)| position.cell(row, col).is_none())
            .collect();
        if !open_preferences.is_empty() {
            let top = open_preferences.len().min(3);
            let index = rng.next_int(top as u32) as usize;
            return Some(open_preferences[index]);
        }
        uniform_move(self, state, rng).map(|mv| (mv.row, mv.col))
    }

    fn easy_cell(
        &self,
        state: &GameState,
        bot: Mark,
        rng: &mut GameRng,
    ) -> Option<(usize, usize)> {
        if let Some(win) = find_immediate_win(&state.position, bot) {
            // Only notices the win 30% of the time.
            if rng.next() < 0.3 {
                return Some(win);
            }
        }
        uniform_move(self, state, rng).map(|mv| (mv.row, mv.col))
    }
}
