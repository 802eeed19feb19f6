//! Sudoku integration tests.

use parlor::games::sudoku::{
    count_solutions, empty_board, generate_puzzle, is_complete, is_valid_placement, solve, Board,
};
use parlor::{Difficulty, Seed};
use proptest::prelude::*;

/// A classic easy puzzle with a unique solution.
fn easy_puzzle() -> Board {
    let mut b = empty_board();
    let givens: &[(usize, usize, u8)] = &[
        (0, 0, 5),
        (0, 1, 3),
        (0, 4, 7),
        (1, 0, 6),
        (1, 3, 1),
        (1, 4, 9),
        (1, 5, 5),
        (2, 1, 9),
        (2, 2, 8),
        (2, 7, 6),
        (3, 0, 8),
        (3, 4, 6),
        (3, 8, 3),
        (4, 0, 4),
        (4, 3, 8),
        (4, 5, 3),
        (4, 8, 1),
        (5, 0, 7),
        (5, 4, 2),
        (5, 8, 6),
        (6, 1, 6),
        (6, 6, 2),
        (6, 7, 8),
        (7, 3, 4),
        (7, 4, 1),
        (7, 5, 9),
        (7, 8, 5),
        (8, 4, 8),
        (8, 7, 7),
        (8, 8, 9),
    ];
    for &(r, c, v) in givens {
        b[r][c] = v;
    }
    b
}

fn assert_valid_solved_grid(board: &Board) {
    assert!(is_complete(board));
    for row in 0..9 {
        for col in 0..9 {
            assert!(is_valid_placement(board, row, col, board[row][col]));
        }
    }
}

// =============================================================================
// Solver
// =============================================================================

#[test]
fn test_solves_a_known_puzzle() {
    let solved = solve(&easy_puzzle()).expect("solvable");
    assert_valid_solved_grid(&solved);
}

#[test]
fn test_known_puzzle_is_unique() {
    assert_eq!(count_solutions(&easy_puzzle(), 2), 1);
}

#[test]
fn test_one_cleared_cell_solves_back_to_the_solution() {
    let solution = solve(&easy_puzzle()).unwrap();
    for (row, col) in [(0, 0), (4, 4), (8, 8)] {
        let mut puzzle = solution;
        puzzle[row][col] = 0;
        assert_eq!(solve(&puzzle), Some(solution));
        assert_eq!(count_solutions(&puzzle, 2), 1);
    }
}

// =============================================================================
// Generator
// =============================================================================

#[test]
fn test_generated_puzzles_are_unique_and_consistent() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let generated = generate_puzzle(difficulty, Some(Seed::Number(42)));
        assert_eq!(count_solutions(&generated.puzzle, 2), 1);
        assert_eq!(solve(&generated.puzzle), Some(generated.solution));
        assert_valid_solved_grid(&generated.solution);

        // The puzzle is the solution with clues removed, never altered.
        for row in 0..9 {
            for col in 0..9 {
                let clue = generated.puzzle[row][col];
                assert!(clue == 0 || clue == generated.solution[row][col]);
            }
        }
    }
}

#[test]
fn test_generation_reproducible_for_text_seed() {
    let a = generate_puzzle(Difficulty::Medium, Some(Seed::Text("tournament".into())));
    let b = generate_puzzle(Difficulty::Medium, Some(Seed::Text("tournament".into())));
    assert_eq!(a, b);
}

#[test]
fn test_unseeded_generation_still_produces_a_valid_puzzle() {
    let generated = generate_puzzle(Difficulty::Easy, None);
    assert_eq!(count_solutions(&generated.puzzle, 2), 1);
    assert_eq!(solve(&generated.puzzle), Some(generated.solution));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// Every seed yields a unique-solution puzzle that solves back to the
    /// recorded solution.
    #[test]
    fn prop_generated_puzzle_is_always_unique(seed in any::<u32>()) {
        let generated = generate_puzzle(Difficulty::Medium, Some(Seed::Number(seed)));
        prop_assert_eq!(count_solutions(&generated.puzzle, 2), 1);
        prop_assert_eq!(solve(&generated.puzzle), Some(generated.solution));
    }
}
