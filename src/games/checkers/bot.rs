//! Checkers opponents.
//!
//! - **Easy**: uniform among legal moves (captures mandatory as always).
//! - **Medium**: greedy one-ply material-and-position evaluation.
//! - **Hard**: depth-4 minimax with alpha-beta pruning. The search flips
//!   the mover every ply and does not model chain continuation; the chain
//!   rules bind real transitions only.

use crate::core::GameRng;
use crate::rules::Difficulty;
use crate::search::{self, Adversarial};

use super::game::{
    apply_on_board, compute_winner, moves_for_player, Board, Checkers, GameState, Move,
    PieceColor, PieceKind, Pos,
};

const WEIGHT_MAN: f64 = 1.0;
const WEIGHT_KING: f64 = 1.7;
const WEIGHT_ADVANCE: f64 = 0.05;

/// Material plus advancement, positive when `perspective` is ahead.
///
/// Men count 1, kings 1.7, and each man adds 0.05 per row advanced toward
/// its promotion rank.
#[must_use]
pub fn evaluate_board(board: &Board, perspective: PieceColor) -> f64 {
    let mut red = 0.0;
    let mut black = 0.0;
    for row in 0..8 {
        for col in 0..8 {
            let Some(piece) = board.get(Pos::new(row, col)) else {
                continue;
            };
            let (score, advance) = match piece.color {
                PieceColor::Red => (&mut red, (7 - row) as f64),
                PieceColor::Black => (&mut black, row as f64),
            };
            *score += match piece.kind {
                PieceKind::King => WEIGHT_KING,
                PieceKind::Man => WEIGHT_MAN + advance * WEIGHT_ADVANCE,
            };
        }
    }
    let diff = red - black;
    match perspective {
        PieceColor::Red => diff,
        PieceColor::Black => -diff,
    }
}

/// Search node: board plus side to move.
struct Node {
    board: Board,
    turn: PieceColor,
}

/// Alpha-beta adapter for the Hard tier.
struct CheckersSearch {
    perspective: PieceColor,
}

impl Adversarial for CheckersSearch {
    type State = Node;
    type Move = Move;

    fn moves(&self, node: &Node) -> Vec<Move> {
        moves_for_player(&node.board, node.turn, None)
    }

    fn apply(&self, node: &Node, mv: &Move) -> Node {
        Node {
            board: apply_on_board(&node.board, mv),
            turn: node.turn.opponent(),
        }
    }

    fn is_maximizing(&self, node: &Node) -> bool {
        node.turn == self.perspective
    }

    fn terminal_score(&self, node: &Node) -> Option<f64> {
        compute_winner(&node.board).map(|winner| {
            if winner == self.perspective {
                10_000.0
            } else {
                -10_000.0
            }
        })
    }

    fn evaluate(&self, node: &Node) -> f64 {
        evaluate_board(&node.board, self.perspective)
    }

    fn stuck_score(&self, node: &Node) -> f64 {
        if node.turn == self.perspective {
            -9_999.0
        } else {
            9_999.0
        }
    }
}

impl Checkers {
    /// Choose the bot's move, or `None` when the side has no legal move.
    pub fn choose_bot_move(
        &self,
        state: &GameState,
        side: PieceColor,
        difficulty: Difficulty,
        rng: &mut GameRng,
    ) -> Option<Move> {
        let position = &state.position;
        let moves = moves_for_player(&position.board, side, position.forced_from);
        if moves.is_empty() {
            return None;
        }

        match difficulty {
            Difficulty::Easy => rng.pick(&moves).copied(),
            Difficulty::Medium => {
                let mut best = moves[0];
                let mut best_score = f64::NEG_INFINITY;
                for mv in &moves {
                    let next = apply_on_board(&position.board, mv);
                    let score = evaluate_board(&next, side);
                    if score > best_score {
                        best_score = score;
                        best = *mv;
                    }
                }
                Some(best)
            }
            Difficulty::Hard => {
                let adv = CheckersSearch { perspective: side };
                let root = Node {
                    board: position.board,
                    turn: side,
                };
                search::best_move_among(&adv, &root, moves, 4)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::checkers::Piece;

    fn empty_board() -> Board {
        Board([[None; 8]; 8])
    }

    fn man(color: PieceColor) -> Option<Piece> {
        Some(Piece {
            color,
            kind: PieceKind::Man,
        })
    }

    #[test]
    fn test_evaluation_counts_material() {
        let mut board = empty_board();
        board.set(Pos::new(4, 3), man(PieceColor::Red));
        board.set(Pos::new(3, 2), man(PieceColor::Black));
        board.set(Pos::new(3, 4), man(PieceColor::Black));
        assert!(evaluate_board(&board, PieceColor::Black) > 0.0);
        assert!(evaluate_board(&board, PieceColor::Red) < 0.0);
    }

    #[test]
    fn test_evaluation_rewards_advancement() {
        let mut near = empty_board();
        near.set(Pos::new(1, 2), man(PieceColor::Red));
        let mut far = empty_board();
        far.set(Pos::new(6, 1), man(PieceColor::Red));
        assert!(
            evaluate_board(&near, PieceColor::Red) > evaluate_board(&far, PieceColor::Red)
        );
    }

    #[test]
    fn test_kings_outweigh_men() {
        let mut kings = empty_board();
        kings.set(
            Pos::new(4, 3),
            Some(Piece {
                color: PieceColor::Red,
                kind: PieceKind::King,
            }),
        );
        let mut men = empty_board();
        men.set(Pos::new(4, 3), man(PieceColor::Red));
        assert!(
            evaluate_board(&kings, PieceColor::Red) > evaluate_board(&men, PieceColor::Red)
        );
    }
}
