//! Three-in-a-row board model and transitions.
//!
//! A 3x3 grid of marks. States are immutable values; every transition
//! returns a new state and the previous one stays valid. The embedded
//! [`Timeline`] provides undo/redo over complete position snapshots.

use serde::{Deserialize, Serialize};

use crate::core::{RuleViolation, Timeline};
use crate::rules::Rules;

/// Player mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[must_use]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// One cell: empty or marked.
pub type Cell = Option<Mark>;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Board plus side to move; the unit recorded for undo/redo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Row-major cells.
    pub cells: [Cell; 9],
    /// Side to move.
    pub turn: Mark,
}

impl Position {
    #[must_use]
    pub fn new(starting_player: Mark) -> Self {
        Self {
            cells: [None; 9],
            turn: starting_player,
        }
    }

    #[must_use]
    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < 3 && col < 3
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(Self::in_bounds(row, col), "cell out of bounds");
        self.cells[row * 3 + col]
    }

    /// All empty coordinates, row-major.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .filter(|&(r, c)| self.cell(r, c).is_none())
            .collect()
    }

    /// Place a mark without flipping the turn, for hypothetical
    /// evaluation by the bot.
    pub(crate) fn with_mark(&self, row: usize, col: usize, mark: Mark) -> Position {
        let mut next = *self;
        next.cells[row * 3 + col] = Some(mark);
        next
    }

    /// Classify the board: won, drawn, or still in progress.
    #[must_use]
    pub fn outcome(&self) -> Status {
        for line in &LINES {
            if let Some(mark) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(mark) && self.cells[line[2]] == Some(mark) {
                    return Status::Won(mark);
                }
            }
        }
        if self.cells.iter().all(Option::is_some) {
            Status::Draw
        } else {
            Status::InProgress
        }
    }
}

/// A placement by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Mark,
}

/// Terminal classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won(Mark),
    Draw,
}

/// Game setup options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub starting_player: Mark,
    /// The side the human plays; the bot takes the other one.
    pub human_player: Mark,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_player: Mark::X,
            human_player: Mark::X,
        }
    }
}

/// Full game state: current position, setup, and undo/redo stacks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub position: Position,
    pub config: GameConfig,
    timeline: Timeline<Position>,
}

impl GameState {
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.timeline.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.timeline.can_redo()
    }
}

/// The three-in-a-row rules engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicTacToe;

impl Rules for TicTacToe {
    type Config = GameConfig;
    type State = GameState;
    type Move = Move;
    type Status = Status;

    fn initial_state(&self, config: GameConfig) -> GameState {
        GameState {
            position: Position::new(config.starting_player),
            config,
            timeline: Timeline::new(),
        }
    }

    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        if state.position.outcome() != Status::InProgress {
            return Vec::new();
        }
        state
            .position
            .empty_cells()
            .into_iter()
            .map(|(row, col)| Move {
                row,
                col,
                player: state.position.turn,
            })
            .collect()
    }

    fn apply(&self, state: &GameState, mv: &Move) -> Result<GameState, RuleViolation> {
        if !Position::in_bounds(mv.row, mv.col) {
            return Err(RuleViolation::OutOfBounds);
        }
        if state.position.turn != mv.player {
            return Err(RuleViolation::NotYourTurn);
        }
        if state.position.cell(mv.row, mv.col).is_some() {
            return Err(RuleViolation::CellOccupied);
        }

        let mut next = state.clone();
        next.position = Position {
            cells: state.position.with_mark(mv.row, mv.col, mv.player).cells,
            turn: mv.player.opponent(),
        };
        next.timeline.record(state.position);
        Ok(next)
    }

    fn status(&self, state: &GameState) -> Status {
        state.position.outcome()
    }
}

impl TicTacToe {
    /// Step back one move; returns the state unchanged when there is
    /// nothing to undo.
    #[must_use]
    pub fn undo(&self, state: &GameState) -> GameState {
        let mut next = state.clone();
        if let Some(previous) = next.timeline.undo(next.position) {
            next.position = previous;
        }
        next
    }

    /// Step forward again after an undo; returns the state unchanged when
    /// there is nothing to redo.
    #[must_use]
    pub fn redo(&self, state: &GameState) -> GameState {
        let mut next = state.clone();
        if let Some(restored) = next.timeline.redo(next.position) {
            next.position = restored;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(position: Position, row: usize, col: usize, player: Mark) -> Position {
        let game = TicTacToe;
        let state = GameState {
            position,
            config: GameConfig::default(),
            timeline: Timeline::new(),
        };
        game.apply(&state, &Move { row, col, player }).unwrap().position
    }

    #[test]
    fn test_initial_position() {
        let position = Position::new(Mark::X);
        assert_eq!(position.empty_cells().len(), 9);
        assert_eq!(position.outcome(), Status::InProgress);
    }

    #[test]
    fn test_turn_alternates() {
        let p = Position::new(Mark::X);
        let p = place(p, 0, 0, Mark::X);
        assert_eq!(p.turn, Mark::O);
        let p = place(p, 1, 1, Mark::O);
        assert_eq!(p.turn, Mark::X);
    }

    #[test]
    fn test_row_column_and_diagonal_wins() {
        // Top row for X.
        let mut p = Position::new(Mark::X);
        for (r, c, m) in [
            (0, 0, Mark::X),
            (1, 0, Mark::O),
            (0, 1, Mark::X),
            (1, 1, Mark::O),
            (0, 2, Mark::X),
        ] {
            p = place(p, r, c, m);
        }
        assert_eq!(p.outcome(), Status::Won(Mark::X));

        // Anti-diagonal for O.
        let mut p = Position::new(Mark::X);
        for (r, c, m) in [
            (0, 0, Mark::X),
            (0, 2, Mark::O),
            (1, 0, Mark::X),
            (1, 1, Mark::O),
            (2, 2, Mark::X),
            (2, 0, Mark::O),
        ] {
            p = place(p, r, c, m);
        }
        assert_eq!(p.outcome(), Status::Won(Mark::O));
    }

    #[test]
    fn test_draw_on_full_board() {
        // X O X / X O O / O X X has no line.
        let cells = [
            Some(Mark::X),
            Some(Mark::O),
            Some(Mark::X),
            Some(Mark::X),
            Some(Mark::O),
            Some(Mark::O),
            Some(Mark::O),
            Some(Mark::X),
            Some(Mark::X),
        ];
        let position = Position {
            cells,
            turn: Mark::X,
        };
        assert_eq!(position.outcome(), Status::Draw);
    }

    #[test]
    fn test_apply_rejections() {
        let game = TicTacToe;
        let state = game.initial_state(GameConfig::default());

        let oob = Move {
            row: 3,
            col: 0,
            player: Mark::X,
        };
        assert_eq!(game.apply(&state, &oob), Err(RuleViolation::OutOfBounds));

        let wrong_turn = Move {
            row: 0,
            col: 0,
            player: Mark::O,
        };
        assert_eq!(
            game.apply(&state, &wrong_turn),
            Err(RuleViolation::NotYourTurn)
        );

        let state = game
            .apply(
                &state,
                &Move {
                    row: 0,
                    col: 0,
                    player: Mark::X,
                },
            )
            .unwrap();
        let occupied = Move {
            row: 0,
            col: 0,
            player: Mark::O,
        };
        assert_eq!(
            game.apply(&state, &occupied),
            Err(RuleViolation::CellOccupied)
        );
    }

    #[test]
    fn test_legal_moves_empty_once_won() {
        let game = TicTacToe;
        let mut p = Position::new(Mark::X);
        for (r, c, m) in [
            (0, 0, Mark::X),
            (1, 0, Mark::O),
            (0, 1, Mark::X),
            (1, 1, Mark::O),
            (0, 2, Mark::X),
        ] {
            p = place(p, r, c, m);
        }
        let state = GameState {
            position: p,
            config: GameConfig::default(),
            timeline: Timeline::new(),
        };
        assert!(game.legal_moves(&state).is_empty());
    }
}
