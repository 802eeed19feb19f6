//! Backtracking solver and bounded solution counter.
//!
//! Both searches branch on the most constrained cell: scan every empty
//! cell, compute its remaining candidates, and pick the cell with the
//! fewest. A cell with a single candidate short-circuits the scan; a cell
//! with none fails the branch immediately. This ordering, not raw
//! backtracking, is what keeps solving and uniqueness checking fast.

use smallvec::SmallVec;

use super::board::{is_valid_placement, Board};

/// An empty cell and its remaining candidate values.
struct CellChoice {
    row: usize,
    col: usize,
    candidates: SmallVec<[u8; 9]>,
}

/// The empty cell with the fewest candidates, or `None` when the board is
/// complete. A returned cell with zero candidates marks a dead end.
fn most_constrained_cell(board: &Board) -> Option<CellChoice> {
    let mut best: Option<CellChoice> = None;
    for row in 0..9 {
        for col in 0..9 {
            if board[row][col] != 0 {
                continue;
            }
            let candidates: SmallVec<[u8; 9]> = (1..=9)
                .filter(|&v| is_valid_placement(board, row, col, v))
                .collect();
            if candidates.is_empty() {
                return Some(CellChoice {
                    row,
                    col,
                    candidates,
                });
            }
            let better = best
                .as_ref()
                .map_or(true, |b| candidates.len() < b.candidates.len());
            if better {
                let single = candidates.len() == 1;
                best = Some(CellChoice {
                    row,
                    col,
                    candidates,
                });
                if single {
                    return best;
                }
            }
        }
    }
    best
}

/// Solve by backtracking; `None` when the board has no solution.
#[must_use]
pub fn solve(board: &Board) -> Option<Board> {
    let mut working = *board;
    if backtrack(&mut working) {
        Some(working)
    } else {
        None
    }
}

fn backtrack(working: &mut Board) -> bool {
    let Some(cell) = most_constrained_cell(working) else {
        return true;
    };
    for value in cell.candidates {
        working[cell.row][cell.col] = value;
        if backtrack(working) {
            return true;
        }
        working[cell.row][cell.col] = 0;
    }
    false
}

/// Count solutions, stopping as soon as `limit` is reached.
///
/// `count_solutions(board, 2) == 1` is the cheap uniqueness probe used by
/// the generator.
#[must_use]
pub fn count_solutions(board: &Board, limit: usize) -> usize {
    let mut working = *board;
    let mut found = 0;
    count_backtrack(&mut working, limit, &mut found);
    found
}

fn count_backtrack(working: &mut Board, limit: usize, found: &mut usize) -> bool {
    if *found >= limit {
        return true;
    }
    let Some(cell) = most_constrained_cell(working) else {
        *found += 1;
        return *found >= limit;
    };
    for value in cell.candidates {
        working[cell.row][cell.col] = value;
        if count_backtrack(working, limit, found) {
            working[cell.row][cell.col] = 0;
            return true;
        }
        working[cell.row][cell.col] = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::sudoku::board::{empty_board, is_complete};

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

    #[test]
    fn test_solves_easy_puzzle() {
        let solved = solve(&easy_puzzle()).expect("puzzle is solvable");
        assert!(is_complete(&solved));
        for row in 0..9 {
            for col in 0..9 {
                assert!(is_valid_placement(&solved, row, col, solved[row][col]));
            }
        }
    }

    #[test]
    fn test_solver_preserves_givens() {
        let puzzle = easy_puzzle();
        let solved = solve(&puzzle).unwrap();
        for row in 0..9 {
            for col in 0..9 {
                if puzzle[row][col] != 0 {
                    assert_eq!(solved[row][col], puzzle[row][col]);
                }
            }
        }
    }

    #[test]
    fn test_contradiction_is_unsolvable() {
        let mut board = empty_board();
        board[0][0] = 1;
        board[0][1] = 1;
        assert_eq!(solve(&board), None);
        assert_eq!(count_solutions(&board, 2), 0);
    }

    #[test]
    fn test_count_solutions_unique() {
        assert_eq!(count_solutions(&easy_puzzle(), 2), 1);
    }

    #[test]
    fn test_count_solutions_respects_limit() {
        // An empty board has a vast number of solutions; the counter must
        // stop at the limit rather than enumerate them.
        let board = empty_board();
        assert_eq!(count_solutions(&board, 2), 2);
        assert_eq!(count_solutions(&board, 5), 5);
    }

    #[test]
    fn test_solved_board_counts_once() {
        let solved = solve(&easy_puzzle()).unwrap();
        assert_eq!(count_solutions(&solved, 2), 1);
    }
}
