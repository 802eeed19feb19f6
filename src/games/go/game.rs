//! Territory game on a fixed 9x9 board.
//!
//! ## Placement
//!
//! Placing a stone first removes any adjacent opponent group left without
//! liberties, then rejects the placement as suicide if the placing group
//! itself has none. A simplified ko rule forbids recreating the board
//! exactly as it stood immediately before the opponent's last move; full
//! positional superko is intentionally not enforced.
//!
//! ## Ending and scoring
//!
//! Two consecutive passes end the game. Score is stones plus territory,
//! where an empty region counts for a color only when every stone
//! bordering it is that color. Ties have no winner.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{RuleViolation, Timeline};
use crate::rules::Rules;

/// Board side length.
pub const SIZE: usize = 9;

/// Stone color. Black moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoneColor {
    Black,
    White,
}

impl StoneColor {
    #[must_use]
    pub fn opponent(self) -> StoneColor {
        match self {
            StoneColor::Black => StoneColor::White,
            StoneColor::White => StoneColor::Black,
        }
    }
}

/// The 9x9 board, indexed `[row][col]`; `None` is an empty intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board(pub [[Option<StoneColor>; SIZE]; SIZE]);

impl Board {
    #[must_use]
    pub fn empty() -> Self {
        Board([[None; SIZE]; SIZE])
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<StoneColor> {
        self.0[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, stone: Option<StoneColor>) {
        self.0[row][col] = stone;
    }
}

/// Place a stone or pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Place { row: usize, col: usize },
    Pass,
}

/// Final stones-plus-territory count per color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

/// Board, side to move, and the consecutive-pass counter; the unit
/// recorded for undo/redo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,
    pub turn: StoneColor,
    pub passes: u8,
}

impl Position {
    #[must_use]
    pub fn initial() -> Self {
        Self {
            board: Board::empty(),
            turn: StoneColor::Black,
            passes: 0,
        }
    }

    /// Two consecutive passes end the game.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.passes >= 2
    }
}

/// Terminal classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress {
        turn: StoneColor,
    },
    /// Ended by two consecutive passes.
    Over {
        score: Score,
        winner: Option<StoneColor>,
    },
}

/// Game setup options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoConfig {
    /// The side the human plays; the bot takes the other one.
    pub human_color: StoneColor,
}

impl Default for GoConfig {
    fn default() -> Self {
        Self {
            human_color: StoneColor::Black,
        }
    }
}

/// Full game state: current position, setup, and undo/redo stacks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub position: Position,
    pub config: GoConfig,
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

    /// The board as it stood before the most recent move, the reference
    /// position for the simple ko rule.
    #[must_use]
    pub(crate) fn ko_reference(&self) -> Option<&Position> {
        self.timeline.last_past()
    }
}

fn neighbors(row: usize, col: usize) -> SmallVec<[(usize, usize); 4]> {
    let mut points = SmallVec::new();
    if row > 0 {
        points.push((row - 1, col));
    }
    if row + 1 < SIZE {
        points.push((row + 1, col));
    }
    if col > 0 {
        points.push((row, col - 1));
    }
    if col + 1 < SIZE {
        points.push((row, col + 1));
    }
    points
}

/// A connected same-color group and its liberties.
pub struct Group {
    pub stones: Vec<(usize, usize)>,
    pub liberties: FxHashSet<(usize, usize)>,
}

/// Flood-fill the group containing `start` (4-neighbor connectivity).
///
/// An empty start yields an empty group.
#[must_use]
pub fn find_group(board: &Board, start: (usize, usize)) -> Group {
    let Some(color) = board.get(start.0, start.1) else {
        return Group {
            stones: Vec::new(),
            liberties: FxHashSet::default(),
        };
    };

    let mut visited: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut stones = Vec::new();
    let mut liberties = FxHashSet::default();
    let mut stack = vec![start];
    while let Some((row, col)) = stack.pop() {
        if !visited.insert((row, col)) {
            continue;
        }
        stones.push((row, col));
        for (nr, nc) in neighbors(row, col) {
            match board.get(nr, nc) {
                None => {
                    liberties.insert((nr, nc));
                }
                Some(c) if c == color && !visited.contains(&(nr, nc)) => {
                    stack.push((nr, nc));
                }
                Some(_) => {}
            }
        }
    }
    Group { stones, liberties }
}

/// Resolve a placement: the resulting board and the number of opponent
/// stones captured. Does not consider ko; that needs the previous board.
pub fn placement_outcome(
    board: &Board,
    color: StoneColor,
    row: usize,
    col: usize,
) -> Result<(Board, usize), RuleViolation> {
    if row >= SIZE || col >= SIZE {
        return Err(RuleViolation::OutOfBounds);
    }
    if board.get(row, col).is_some() {
        return Err(RuleViolation::CellOccupied);
    }

    let mut next = *board;
    next.set(row, col, Some(color));

    // Opponent groups lose their stones first, then suicide is judged.
    let opponent = color.opponent();
    let mut captured = 0;
    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
    for (nr, nc) in neighbors(row, col) {
        if next.get(nr, nc) != Some(opponent) || seen.contains(&(nr, nc)) {
            continue;
        }
        let group = find_group(&next, (nr, nc));
        seen.extend(group.stones.iter().copied());
        if group.liberties.is_empty() {
            captured += group.stones.len();
            for (sr, sc) in group.stones {
                next.set(sr, sc, None);
            }
        }
    }

    let own = find_group(&next, (row, col));
    if own.liberties.is_empty() {
        return Err(RuleViolation::Suicide);
    }
    Ok((next, captured))
}

/// Whether a placement is legal against a board and the simple-ko
/// reference position.
#[must_use]
pub fn is_legal_placement(
    board: &Board,
    color: StoneColor,
    row: usize,
    col: usize,
    previous: Option<&Board>,
) -> bool {
    match placement_outcome(board, color, row, col) {
        Ok((next, _)) => previous != Some(&next),
        Err(_) => false,
    }
}

/// Stones plus territory for each color.
///
/// Territory: flood-fill each maximal empty region; it counts for a color
/// only when every bordering stone is that color.
#[must_use]
pub fn score_board(board: &Board) -> Score {
    let mut black = 0;
    let mut white = 0;
    for row in 0..SIZE {
        for col in 0..SIZE {
            match board.get(row, col) {
                Some(StoneColor::Black) => black += 1,
                Some(StoneColor::White) => white += 1,
                None => {}
            }
        }
    }

    let mut visited = [[false; SIZE]; SIZE];
    for row in 0..SIZE {
        for col in 0..SIZE {
            if visited[row][col] || board.get(row, col).is_some() {
                continue;
            }
            let mut region = 0u32;
            let mut touches_black = false;
            let mut touches_white = false;
            let mut stack = vec![(row, col)];
            visited[row][col] = true;
            while let Some((r, c)) = stack.pop() {
                region += 1;
                for (nr, nc) in neighbors(r, c) {
                    match board.get(nr, nc) {
                        None => {
                            if !visited[nr][nc] {
                                visited[nr][nc] = true;
                                stack.push((nr, nc));
                            }
                        }
                        Some(StoneColor::Black) => touches_black = true,
                        Some(StoneColor::White) => touches_white = true,
                    }
                }
            }
            if touches_black && !touches_white {
                black += region;
            } else if touches_white && !touches_black {
                white += region;
            }
        }
    }
    Score { black, white }
}

/// The territory-game rules engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Go;

impl Rules for Go {
    type Config = GoConfig;
    type State = GameState;
    type Move = Move;
    type Status = Status;

    fn initial_state(&self, config: GoConfig) -> GameState {
        GameState {
            position: Position::initial(),
            config,
            timeline: Timeline::new(),
        }
    }

    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        if state.position.is_over() {
            return Vec::new();
        }
        let previous = state.ko_reference().map(|p| &p.board);
        let mut moves = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if is_legal_placement(&state.position.board, state.position.turn, row, col, previous)
                {
                    moves.push(Move::Place { row, col });
                }
            }
        }
        moves.push(Move::Pass);
        moves
    }

    fn apply(&self, state: &GameState, mv: &Move) -> Result<GameState, RuleViolation> {
        let position = &state.position;
        if position.is_over() {
            return Err(RuleViolation::IllegalMove);
        }

        let next_position = match *mv {
            Move::Pass => Position {
                board: position.board,
                turn: position.turn.opponent(),
                passes: position.passes + 1,
            },
            Move::Place { row, col } => {
                let (next_board, _) =
                    placement_outcome(&position.board, position.turn, row, col)?;
                if state.ko_reference().map(|p| &p.board) == Some(&next_board) {
                    return Err(RuleViolation::KoViolation);
                }
                Position {
                    board: next_board,
                    turn: position.turn.opponent(),
                    passes: 0,
                }
            }
        };

        let mut next = state.clone();
        next.position = next_position;
        next.timeline.record(*position);
        Ok(next)
    }

    fn status(&self, state: &GameState) -> Status {
        let position = &state.position;
        if !position.is_over() {
            return Status::InProgress {
                turn: position.turn,
            };
        }
        let score = score_board(&position.board);
        let winner = match score.black.cmp(&score.white) {
            std::cmp::Ordering::Greater => Some(StoneColor::Black),
            std::cmp::Ordering::Less => Some(StoneColor::White),
            std::cmp::Ordering::Equal => None,
        };
        Status::Over { score, winner }
    }
}

impl Go {
    /// Step back one transition; unchanged when there is nothing to undo.
    #[must_use]
    pub fn undo(&self, state: &GameState) -> GameState {
        let mut next = state.clone();
        if let Some(previous) = next.timeline.undo(next.position) {
            next.position = previous;
        }
        next
    }

    /// Step forward again; unchanged when there is nothing to redo.
    #[must_use]
    pub fn redo(&self, state: &GameState) -> GameState {
        let mut next = state.clone();
        if let Some(restored) = next.timeline.redo(next.position) {
            next.position = restored;
        }
        next
    }
}
