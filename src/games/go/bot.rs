//! Territory-game opponents.
//!
//! - **Easy**: uniform among legal placements, passing when none exist.
//! - **Medium**: maximizes the immediate capture count.
//! - **Hard**: maximizes the one-ply stones-plus-territory differential,
//!   passing only when no placement is legal.

use crate::core::GameRng;
use crate::rules::{Difficulty, Rules};

use super::game::{placement_outcome, score_board, Board, GameState, Go, Move, StoneColor};

/// Score differential from `perspective`, on the raw stones-plus-territory
/// count.
fn evaluate(board: &Board, perspective: StoneColor) -> f64 {
    let score = score_board(board);
    let diff = f64::from(score.black) - f64::from(score.white);
    match perspective {
        StoneColor::Black => diff,
        StoneColor::White => -diff,
    }
}

impl Go {
    /// Choose the bot's move, or `None` once the game is over.
    ///
    /// Always returns a move for a live game; a position with no legal
    /// placement yields a pass.
    pub fn choose_bot_move(
        &self,
        state: &GameState,
        bot_color: StoneColor,
        difficulty: Difficulty,
        rng: &mut GameRng,
    ) -> Option<Move> {
        if state.position.is_over() {
            return None;
        }

        let placements: Vec<Move> = self
            .legal_moves(state)
            .into_iter()
            .filter(|mv| matches!(mv, Move::Place { .. }))
            .collect();

        match difficulty {
            Difficulty::Easy => Some(rng.pick(&placements).copied().unwrap_or(Move::Pass)),
            Difficulty::Medium => {
                let mut best = None;
                let mut best_captures = -1i64;
                for mv in &placements {
                    let Move::Place { row, col } = *mv else {
                        continue;
                    };
                    let captured =
                        match placement_outcome(&state.position.board, bot_color, row, col) {
                            Ok((_, captured)) => captured as i64,
                            Err(_) => continue,
                        };
                    if captured > best_captures {
                        best_captures = captured;
                        best = Some(*mv);
                    }
                }
                Some(best.unwrap_or(Move::Pass))
            }
            Difficulty::Hard => {
                let mut best = None;
                let mut best_score = f64::NEG_INFINITY;
                for mv in &placements {
                    let Move::Place { row, col } = *mv else {
                        continue;
                    };
                    let next_board =
                        match placement_outcome(&state.position.board, bot_color, row, col) {
                            Ok((board, _)) => board,
                            Err(_) => continue,
                        };
                    let score = evaluate(&next_board, bot_color);
                    if score > best_score {
                        best_score = score;
                        best = Some(*mv);
                    }
                }
                Some(best.unwrap_or(Move::Pass))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::go::GoConfig;

    const W: Option<StoneColor> = Some(StoneColor::White);
    const B: Option<StoneColor> = Some(StoneColor::Black);

    fn state_with_board(board: Board, turn: StoneColor) -> GameState {
        let mut state = Go.initial_state(GoConfig::default());
        state.position.board = board;
        state.position.turn = turn;
        state
    }

    #[test]
    fn test_medium_takes_the_capture() {
        // White at (0,0) is in atari; black captures by playing (1,0).
        let mut board = Board::empty();
        board.set(0, 0, W);
        board.set(0, 1, B);
        let state = state_with_board(board, StoneColor::Black);

        let mut rng = GameRng::seeded(1u32);
        let mv = Go
            .choose_bot_move(&state, StoneColor::Black, Difficulty::Medium, &mut rng)
            .unwrap();
        assert_eq!(mv, Move::Place { row: 1, col: 0 });
    }

    #[test]
    fn test_hard_prefers_capture_over_quiet_move() {
        let mut board = Board::empty();
        board.set(0, 0, W);
        board.set(0, 1, B);
        let state = state_with_board(board, StoneColor::Black);

        let mut rng = GameRng::seeded(1u32);
        let mv = Go
            .choose_bot_move(&state, StoneColor::Black, Difficulty::Hard, &mut rng)
            .unwrap();
        assert_eq!(mv, Move::Place { row: 1, col: 0 });
    }

    #[test]
    fn test_easy_picks_a_legal_placement() {
        let state = Go.initial_state(GoConfig::default());
        let mut rng = GameRng::seeded(9u32);
        let mv = Go
            .choose_bot_move(&state, StoneColor::Black, Difficulty::Easy, &mut rng)
            .unwrap();
        assert!(matches!(mv, Move::Place { .. }));
    }

    #[test]
    fn test_bot_is_silent_once_over() {
        let game = Go;
        let state = game.initial_state(GoConfig::default());
        let state = game.apply(&state, &Move::Pass).unwrap();
        let state = game.apply(&state, &Move::Pass).unwrap();
        let mut rng = GameRng::seeded(1u32);
        assert_eq!(
            game.choose_bot_move(&state, StoneColor::Black, Difficulty::Easy, &mut rng),
            None
        );
    }
}
