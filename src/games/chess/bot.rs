//! Chess opponents over the delegated move generator.
//!
//! Evaluation is material plus a small mobility bonus (two points per
//! legal reply of the side to move). The Hard tier searches three plies
//! with alpha-beta pruning, scoring detected checkmate at one million and
//! detected draws at zero.

use std::marker::PhantomData;

use crate::core::GameRng;
use crate::rules::{uniform_move, Difficulty};
use crate::search::{self, Adversarial};

use super::game::{ChessGame, GameState};
use super::oracle::{ChessColor, ChessMove, ChessPosition, ChessRules, ChessStatus};

const MATE_SCORE: f64 = 1_000_000.0;
const MOBILITY_WEIGHT: i64 = 2;

/// Material from `perspective` plus the mobility bonus.
fn evaluate<P: ChessPosition>(position: &P, perspective: ChessColor) -> f64 {
    let mut score: i64 = 0;
    for piece in position.pieces() {
        let value = piece.kind.value();
        score += if piece.color == perspective {
            value
        } else {
            -value
        };
    }
    score += MOBILITY_WEIGHT * position.legal_moves().len() as i64;
    score as f64
}

/// Alpha-beta adapter over oracle positions.
struct ChessSearch<P: ChessPosition> {
    perspective: ChessColor,
    _position: PhantomData<P>,
}

impl<P: ChessPosition> Adversarial for ChessSearch<P> {
    type State = P;
    type Move = ChessMove;

    fn moves(&self, position: &P) -> Vec<ChessMove> {
        position.legal_moves()
    }

    fn apply(&self, position: &P, mv: &ChessMove) -> P {
        // The oracle must accept moves from its own generator.
        position
            .apply(mv)
            .expect("oracle rejected a move from its own legal move list")
    }

    fn is_maximizing(&self, position: &P) -> bool {
        position.turn() == self.perspective
    }

    fn terminal_score(&self, position: &P) -> Option<f64> {
        match position.status() {
            ChessStatus::Checkmate { winner } => Some(if winner == self.perspective {
                MATE_SCORE
            } else {
                -MATE_SCORE
            }),
            ChessStatus::Draw { .. } => Some(0.0),
            ChessStatus::InProgress { .. } => None,
        }
    }

    fn evaluate(&self, position: &P) -> f64 {
        evaluate(position, self.perspective)
    }

    fn stuck_score(&self, position: &P) -> f64 {
        evaluate(position, self.perspective)
    }
}

impl<R: ChessRules> ChessGame<R> {
    /// Choose the bot's move, or `None` when it is not the bot's turn or
    /// no move exists.
    pub fn choose_bot_move(
        &self,
        state: &GameState,
        bot_color: ChessColor,
        difficulty: Difficulty,
        rng: &mut GameRng,
    ) -> Option<ChessMove> {
        let position = self.position(state);
        if position.turn() != bot_color {
            return None;
        }

        match difficulty {
            Difficulty::Easy => uniform_move(self, state, rng),
            Difficulty::Medium => {
                let mut best: Option<(ChessMove, f64)> = None;
                for mv in position.legal_moves() {
                    let next = position
                        .apply(&mv)
                        .expect("oracle rejected a move from its own legal move list");
                    let score = evaluate(&next, bot_color);
                    if best.as_ref().map_or(true, |(_, s)| score > *s) {
                        best = Some((mv, score));
                    }
                }
                best.map(|(mv, _)| mv)
            }
            Difficulty::Hard => {
                let adv = ChessSearch::<R::Position> {
                    perspective: bot_color,
                    _position: PhantomData,
                };
                // Three plies total: the root expansion plus a two-ply
                // horizon beneath each candidate.
                search::best_move(&adv, &position, 2)
            }
        }
    }
}
