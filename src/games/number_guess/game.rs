//! Number-range guessing game.
//!
//! A secret integer is drawn uniformly from a difficulty-sized range.
//! Guesses classify as too-low, too-high, or correct; from the second
//! guess onward a warmer/colder/same trend compares the absolute distance
//! to the target against the previous guess's distance.
//!
//! Scoring rewards few attempts and wide ranges: `max(1, attempts * 100 -
//! floor(log2(range size)))`, lower is better. The best score persists
//! through the injected [`ScoreStore`] under [`BEST_SCORE_KEY`].

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, RuleViolation, ScoreStore};

/// Fixed store key for the persisted best score.
pub const BEST_SCORE_KEY: &str = "number-guess:best-score";

/// Guessing-game difficulty; selects only the secret's range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessDifficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Inclusive integer range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: i64,
    pub max: i64,
}

impl Range {
    /// Number of values in the range.
    #[must_use]
    pub fn span(&self) -> i64 {
        self.max - self.min + 1
    }

    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// The secret's range for a difficulty.
#[must_use]
pub fn range_for(difficulty: GuessDifficulty) -> Range {
    match difficulty {
        GuessDifficulty::Easy => Range { min: 1, max: 50 },
        GuessDifficulty::Normal => Range { min: 1, max: 100 },
        GuessDifficulty::Hard => Range { min: 1, max: 500 },
    }
}

/// Score for finishing in `attempts` guesses; lower is better. Wider
/// ranges earn a `floor(log2(span))` discount.
#[must_use]
pub fn compute_score(attempts: u32, range: Range) -> i64 {
    let bonus = i64::from((range.span() as u64).ilog2());
    (i64::from(attempts) * 100 - bonus).max(1)
}

/// Guess classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    Correct,
}

/// Distance trend versus the previous guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Warmer,
    Colder,
    Same,
}

/// One round's state; an immutable value owned by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessState {
    pub difficulty: GuessDifficulty,
    pub range: Range,
    pub secret: i64,
    pub attempts: u32,
    pub previous_distance: Option<i64>,
    /// Best score as of the last finished round, lower is better.
    pub best_score: Option<i64>,
    /// False once the secret has been found.
    pub running: bool,
}

/// Outcome of one guess: classification, trend, and the updated state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    pub trend: Option<Trend>,
    pub state: GuessState,
    /// Set on a correct guess.
    pub score: Option<i64>,
    pub is_new_best: bool,
}

/// The guessing-game engine, holding the injected best-score store.
#[derive(Clone, Debug)]
pub struct NumberGuess<S: ScoreStore> {
    store: S,
}

impl<S: ScoreStore> NumberGuess<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted best score, `None` when no round has finished or the
    /// stored value is unreadable.
    #[must_use]
    pub fn best_score(&self) -> Option<i64> {
        self.store
            .get(BEST_SCORE_KEY)
            .and_then(|raw| raw.parse().ok())
    }

    /// Start a fresh game at a difficulty, drawing the secret from `rng`.
    #[must_use]
    pub fn new_game(&self, difficulty: GuessDifficulty, rng: &mut GameRng) -> GuessState {
        let range = range_for(difficulty);
        GuessState {
            difficulty,
            range,
            secret: rng.int(range.min, range.max),
            attempts: 0,
            previous_distance: None,
            best_score: None,
            running: true,
        }
    }

    /// Re-draw the secret for another round, keeping difficulty and best
    /// score.
    #[must_use]
    pub fn start_new_round(&self, state: &GuessState, rng: &mut GameRng) -> GuessState {
        GuessState {
            secret: rng.int(state.range.min, state.range.max),
            attempts: 0,
            previous_distance: None,
            running: true,
            ..*state
        }
    }

    /// Apply one guess.
    ///
    /// Rejects guesses outside the round's range (`OutOfBounds`) and
    /// guesses after the round has finished (`IllegalMove`).
    pub fn apply_guess(
        &mut self,
        state: &GuessState,
        guess: i64,
    ) -> Result<GuessReport, RuleViolation> {
        if !state.running {
            return Err(RuleViolation::IllegalMove);
        }
        if !state.range.contains(guess) {
            return Err(RuleViolation::OutOfBounds);
        }

        let distance = (state.secret - guess).abs();
        let outcome = match guess.cmp(&state.secret) {
            std::cmp::Ordering::Less => GuessOutcome::TooLow,
            std::cmp::Ordering::Greater => GuessOutcome::TooHigh,
            std::cmp::Ordering::Equal => GuessOutcome::Correct,
        };

        let mut updated = *state;
        updated.attempts = state.attempts + 1;

        if outcome != GuessOutcome::Correct {
            let trend = state.previous_distance.map(|previous| {
                match distance.cmp(&previous) {
                    std::cmp::Ordering::Less => Trend::Warmer,
                    std::cmp::Ordering::Greater => Trend::Colder,
                    std::cmp::Ordering::Equal => Trend::Same,
                }
            });
            updated.previous_distance = Some(distance);
            return Ok(GuessReport {
                outcome,
                trend,
                state: updated,
                score: None,
                is_new_best: false,
            });
        }

        // Found it: score the round and reconcile the persisted best.
        let score = compute_score(updated.attempts, state.range);
        let current_best = self.best_score();
        let is_new_best = current_best.map_or(true, |best| score < best);
        let best = if is_new_best {
            self.store.set(BEST_SCORE_KEY, score.to_string());
            score
        } else {
            current_best.unwrap_or(score)
        };

        updated.best_score = Some(best);
        updated.running = false;
        Ok(GuessReport {
            outcome,
            trend: None,
            state: updated,
            score: Some(score),
            is_new_best,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_per_difficulty() {
        assert_eq!(range_for(GuessDifficulty::Easy), Range { min: 1, max: 50 });
        assert_eq!(
            range_for(GuessDifficulty::Normal),
            Range { min: 1, max: 100 }
        );
        assert_eq!(range_for(GuessDifficulty::Hard), Range { min: 1, max: 500 });
    }

    #[test]
    fn test_score_formula() {
        // floor(log2(100)) = 6, floor(log2(50)) = 5, floor(log2(500)) = 8.
        assert_eq!(compute_score(1, Range { min: 1, max: 100 }), 94);
        assert_eq!(compute_score(3, Range { min: 1, max: 100 }), 294);
        assert_eq!(compute_score(1, Range { min: 1, max: 50 }), 95);
        assert_eq!(compute_score(1, Range { min: 1, max: 500 }), 92);
    }

    #[test]
    fn test_score_never_below_one() {
        assert_eq!(compute_score(0, Range { min: 1, max: 100 }), 1);
    }
}
