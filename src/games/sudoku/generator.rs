//! Puzzle generation with a guaranteed-unique solution.
//!
//! ## Two phases
//!
//! 1. **Solved grid synthesis, without search.** Start from a canonical
//!    Latin-square-derived pattern and apply independent random
//!    permutations of the digit labels, the three row bands and the rows
//!    within each band, and the three column stacks and the columns
//!    within each stack. Every output is a valid solved grid.
//! 2. **Clue removal.** Visit cells in a shuffled order, provisionally
//!    clearing each one and keeping the removal only while the bounded
//!    solution counter still reports exactly one solution. Stop at the
//!    difficulty's clue floor.
//!
//! The RNG draw order in phase 1 is part of the seed contract: a given
//! seed reproduces the same grid everywhere this generator is hosted.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Seed};
use crate::rules::Difficulty;

use super::board::{empty_board, Board};
use super::solver::count_solutions;

/// Fewest clues the generator will leave for each difficulty.
fn clue_floor(difficulty: Difficulty) -> usize {
    match difficulty {
        Difficulty::Easy => 36,
        Difficulty::Medium => 30,
        Difficulty::Hard => 24,
    }
}

/// A generated puzzle, its solution, and the inputs that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    pub puzzle: Board,
    pub solution: Board,
    pub difficulty: Difficulty,
    pub seed: Option<Seed>,
}

/// Synthesize a fully solved grid by permuting a canonical pattern.
#[must_use]
pub fn generate_solved_board(rng: &mut GameRng) -> Board {
    // Canonical solved grid from a Latin pattern.
    let mut base = empty_board();
    for (r, row) in base.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = ((r * 3 + r / 3 + c) % 9 + 1) as u8;
        }
    }

    // Digit relabeling.
    let digits = rng.shuffle(&[1u8, 2, 3, 4, 5, 6, 7, 8, 9]);

    // Row permutation: bands, then rows within each band.
    let band_order = rng.shuffle(&[0usize, 1, 2]);
    let rows_within_bands = [
        rng.shuffle(&[0usize, 1, 2]),
        rng.shuffle(&[0usize, 1, 2]),
        rng.shuffle(&[0usize, 1, 2]),
    ];
    let mut row_map = Vec::with_capacity(9);
    for &band in &band_order {
        for &row in &rows_within_bands[band] {
            row_map.push(band * 3 + row);
        }
    }

    // Column permutation: stacks, then columns within each stack.
    let stack_order = rng.shuffle(&[0usize, 1, 2]);
    let cols_within_stacks = [
        rng.shuffle(&[0usize, 1, 2]),
        rng.shuffle(&[0usize, 1, 2]),
        rng.shuffle(&[0usize, 1, 2]),
    ];
    let mut col_map = Vec::with_capacity(9);
    for &stack in &stack_order {
        for &col in &cols_within_stacks[stack] {
            col_map.push(stack * 3 + col);
        }
    }

    let mut out = empty_board();
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            let base_value = base[row_map[r]][col_map[c]];
            *cell = digits[usize::from(base_value) - 1];
        }
    }
    out
}

/// Generate a puzzle with exactly one solution.
#[must_use]
pub fn generate_puzzle(difficulty: Difficulty, seed: Option<Seed>) -> GeneratedPuzzle {
    let mut rng = GameRng::new(seed.clone());
    let solution = generate_solved_board(&mut rng);
    let mut puzzle = solution;

    let cell_indices: Vec<usize> = (0..81).collect();
    let removal_order = rng.shuffle(&cell_indices);
    let floor = clue_floor(difficulty);
    let mut clues = 81;

    for index in removal_order {
        if clues <= floor {
            break;
        }
        let row = index / 9;
        let col = index % 9;
        let removed = puzzle[row][col];
        if removed == 0 {
            continue;
        }
        puzzle[row][col] = 0;
        if count_solutions(&puzzle, 2) == 1 {
            clues -= 1;
        } else {
            // The removal broke uniqueness; put the clue back.
            puzzle[row][col] = removed;
        }
    }

    debug!("generated {difficulty:?} puzzle with {clues} clues");
    GeneratedPuzzle {
        puzzle,
        solution,
        difficulty,
        seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::sudoku::board::{is_complete, is_valid_placement};
    use crate::games::sudoku::solver::solve;

    fn assert_valid_solved_grid(board: &Board) {
        assert!(is_complete(board));
        for row in 0..9 {
            for col in 0..9 {
                assert!(is_valid_placement(board, row, col, board[row][col]));
            }
        }
    }

    #[test]
    fn test_solved_grid_is_valid() {
        for seed in [0u32, 1, 42, 1234] {
            let mut rng = GameRng::seeded(seed);
            assert_valid_solved_grid(&generate_solved_board(&mut rng));
        }
    }

    #[test]
    fn test_solved_grid_is_seed_deterministic() {
        let mut a = GameRng::seeded(1234u32);
        let mut b = GameRng::seeded(1234u32);
        assert_eq!(generate_solved_board(&mut a), generate_solved_board(&mut b));
    }

    #[test]
    fn test_different_seeds_give_different_grids() {
        let mut a = GameRng::seeded(1u32);
        let mut b = GameRng::seeded(2u32);
        assert_ne!(generate_solved_board(&mut a), generate_solved_board(&mut b));
    }

    #[test]
    fn test_generated_puzzle_is_unique_and_matches_solution() {
        let generated = generate_puzzle(Difficulty::Medium, Some(Seed::Number(42)));
        assert_eq!(count_solutions(&generated.puzzle, 2), 1);
        assert_eq!(solve(&generated.puzzle), Some(generated.solution));
        assert_valid_solved_grid(&generated.solution);
    }

    #[test]
    fn test_clue_floor_respected() {
        for (difficulty, floor) in [
            (Difficulty::Easy, 36),
            (Difficulty::Medium, 30),
            (Difficulty::Hard, 24),
        ] {
            let generated = generate_puzzle(difficulty, Some(Seed::Number(7)));
            let clues = generated
                .puzzle
                .iter()
                .flatten()
                .filter(|&&v| v != 0)
                .count();
            assert!(clues >= floor, "{difficulty:?}: {clues} clues < {floor}");
        }
    }

    #[test]
    fn test_generation_is_seed_deterministic() {
        let a = generate_puzzle(Difficulty::Hard, Some(Seed::Number(99)));
        let b = generate_puzzle(Difficulty::Hard, Some(Seed::Number(99)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_text_seed_generation() {
        let a = generate_puzzle(Difficulty::Easy, Some(Seed::Text("daily".into())));
        let b = generate_puzzle(Difficulty::Easy, Some(Seed::Text("daily".into())));
        assert_eq!(a.puzzle, b.puzzle);
    }
}
