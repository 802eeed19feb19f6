//! Number-range guessing game with warmer/colder guidance.

mod game;

pub use game::{
    compute_score, range_for, GuessDifficulty, GuessOutcome, GuessReport, GuessState,
    NumberGuess, Range, Trend, BEST_SCORE_KEY,
};
