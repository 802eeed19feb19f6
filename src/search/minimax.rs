//! Depth-limited minimax with alpha-beta pruning.
//!
//! Generic over an [`Adversarial`] adapter so each game supplies its own
//! evaluation and terminal scoring while sharing one search loop. The
//! search is a single bounded call that always terminates; there is no
//! iterative deepening, no transposition table, and no time control.

use log::trace;

/// Adapter a game implements to run under the shared alpha-beta search.
///
/// `State` here is the search node, which may be a reduced view of the
/// engine's full state (the checkers search tracks only board and mover,
/// ignoring capture-chain bookkeeping the way its evaluation requires).
pub trait Adversarial {
    type State;
    type Move: Clone;

    /// Moves available to the side to move.
    fn moves(&self, state: &Self::State) -> Vec<Self::Move>;

    /// Successor state for a move taken from [`Adversarial::moves`].
    fn apply(&self, state: &Self::State, mv: &Self::Move) -> Self::State;

    /// Whether the side to move is the searching perspective.
    fn is_maximizing(&self, state: &Self::State) -> bool;

    /// Score for a decided state, `None` while the game is undecided.
    /// Probed before the depth cutoff at every node.
    fn terminal_score(&self, state: &Self::State) -> Option<f64>;

    /// Heuristic value of an undecided state from the searching
    /// perspective.
    fn evaluate(&self, state: &Self::State) -> f64;

    /// Score when the side to move has no legal move and the game is not
    /// otherwise decided.
    fn stuck_score(&self, state: &Self::State) -> f64;
}

/// Alpha-beta score of a state, searched `depth` plies deep.
pub fn score<A: Adversarial>(
    adv: &A,
    state: &A::State,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
) -> f64 {
    if let Some(decided) = adv.terminal_score(state) {
        return decided;
    }
    if depth == 0 {
        return adv.evaluate(state);
    }
    let moves = adv.moves(state);
    if moves.is_empty() {
        return adv.stuck_score(state);
    }

    if adv.is_maximizing(state) {
        let mut value = f64::NEG_INFINITY;
        for mv in &moves {
            let next = adv.apply(state, mv);
            value = value.max(score(adv, &next, depth - 1, alpha, beta));
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        value
    } else {
        let mut value = f64::INFINITY;
        for mv in &moves {
            let next = adv.apply(state, mv);
            value = value.min(score(adv, &next, depth - 1, alpha, beta));
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        value
    }
}

/// Best move at the root, searching each successor `horizon` plies deep.
///
/// Ties keep the first move in generation order, so results are stable
/// for a given move ordering.
pub fn best_move<A: Adversarial>(adv: &A, state: &A::State, horizon: u32) -> Option<A::Move> {
    best_move_among(adv, state, adv.moves(state), horizon)
}

/// [`best_move`] over an explicit root move list.
///
/// Roots sometimes carry constraints interior nodes do not (a forced
/// capture chain restricts the checkers root); the caller supplies the
/// constrained list and the search below stays unconstrained.
pub fn best_move_among<A: Adversarial>(
    adv: &A,
    state: &A::State,
    moves: Vec<A::Move>,
    horizon: u32,
) -> Option<A::Move> {
    let mut best: Option<A::Move> = None;
    let mut best_score = f64::NEG_INFINITY;
    for mv in moves {
        let next = adv.apply(state, &mv);
        let value = score(adv, &next, horizon, f64::NEG_INFINITY, f64::INFINITY);
        if best.is_none() || value > best_score {
            best_score = value;
            best = Some(mv);
        }
    }
    if best.is_some() {
        trace!("minimax root chose value {best_score} at horizon {horizon}");
    }
    best
}
