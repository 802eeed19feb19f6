//! Checkers board model, move generation, and transitions.
//!
//! 8x8 board with play restricted to the dark squares ((row + col) odd).
//! Black men start on rows 0-2 and advance toward row 7; red men start on
//! rows 5-7 and advance toward row 0. Red moves first.
//!
//! ## Capture rules
//!
//! - A capture jumps diagonally over an adjacent enemy piece onto the
//!   empty square beyond, removing it.
//! - When any capture exists anywhere for the side to move, only capture
//!   moves are legal.
//! - After a capture, further captures from the landing square must be
//!   taken by the same player from exactly that square (`forced_from`).
//! - Crowning ends the turn: promotion is checked before chain
//!   continuation, and a freshly crowned piece does not keep jumping.

use serde::{Deserialize, Serialize};

use crate::core::{RuleViolation, Timeline};
use crate::rules::Rules;

/// Side color. Red moves first and advances toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    Red,
    Black,
}

impl PieceColor {
    #[must_use]
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::Red => PieceColor::Black,
            PieceColor::Black => PieceColor::Red,
        }
    }
}

/// Piece rank: men advance only; kings move both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceKind,
}

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step by a signed offset, `None` when it leaves the board.
    fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

/// The 8x8 board, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board(pub [[Option<Piece>; 8]; 8]);

impl Board {
    /// The standard starting setup.
    #[must_use]
    pub fn initial() -> Self {
        let mut squares = [[None; 8]; 8];
        for (row, squares_row) in squares.iter_mut().enumerate() {
            for (col, square) in squares_row.iter_mut().enumerate() {
                if (row + col) % 2 == 1 {
                    if row < 3 {
                        *square = Some(Piece {
                            color: PieceColor::Black,
                            kind: PieceKind::Man,
                        });
                    } else if row >= 5 {
                        *square = Some(Piece {
                            color: PieceColor::Red,
                            kind: PieceKind::Man,
                        });
                    }
                }
            }
        }
        Board(squares)
    }

    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        self.0[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Pos, piece: Option<Piece>) {
        self.0[pos.row][pos.col] = piece;
    }

    /// Count pieces of one color.
    #[must_use]
    pub fn count(&self, color: PieceColor) -> usize {
        self.0
            .iter()
            .flatten()
            .filter(|square| square.map(|p| p.color) == Some(color))
            .count()
    }
}

/// A move: origin, destination, and the captured square if the move is a
/// jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    pub captured: Option<Pos>,
}

impl Move {
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Board, side to move, and the capture-chain bookkeeping; the unit
/// recorded for undo/redo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,
    pub turn: PieceColor,
    pub winner: Option<PieceColor>,
    /// When a capture chain is in progress, the square the mover must
    /// continue jumping from.
    pub forced_from: Option<Pos>,
}

impl Position {
    #[must_use]
    pub fn initial() -> Self {
        Self {
            board: Board::initial(),
            turn: PieceColor::Red,
            winner: None,
            forced_from: None,
        }
    }
}

/// Terminal classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress { turn: PieceColor },
    Won(PieceColor),
}

/// Full game state: current position plus undo/redo stacks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub position: Position,
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

/// Rows a piece may step toward, in generation order.
fn forward_rows(piece: Piece) -> &'static [i32] {
    match (piece.kind, piece.color) {
        (PieceKind::King, _) => &[1, -1],
        (PieceKind::Man, PieceColor::Red) => &[-1],
        (PieceKind::Man, PieceColor::Black) => &[1],
    }
}

/// Advances and captures available from one square, ignoring the
/// mandatory-capture rule (applied at the player level).
#[must_use]
pub fn moves_from(board: &Board, from: Pos) -> Vec<Move> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    for &dr in forward_rows(piece) {
        for dc in [-1, 1] {
            if let Some(to) = from.offset(dr, dc) {
                if board.get(to).is_none() {
                    moves.push(Move {
                        from,
                        to,
                        captured: None,
                    });
                }
            }
        }
    }
    for &dr in forward_rows(piece) {
        for dc in [-1, 1] {
            let (Some(mid), Some(to)) = (from.offset(dr, dc), from.offset(dr * 2, dc * 2)) else {
                continue;
            };
            let jumped = board.get(mid);
            if jumped.is_some_and(|p| p.color != piece.color) && board.get(to).is_none() {
                moves.push(Move {
                    from,
                    to,
                    captured: Some(mid),
                });
            }
        }
    }
    moves
}

/// Every legal move for a player: capture-chain restriction first, then
/// the mandatory-capture rule.
#[must_use]
pub fn moves_for_player(
    board: &Board,
    player: PieceColor,
    forced_from: Option<Pos>,
) -> Vec<Move> {
    if let Some(origin) = forced_from {
        return moves_from(board, origin)
            .into_iter()
            .filter(Move::is_capture)
            .collect();
    }

    let mut all = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let from = Pos::new(row, col);
            if board.get(from).map(|p| p.color) == Some(player) {
                all.extend(moves_from(board, from));
            }
        }
    }
    if all.iter().any(Move::is_capture) {
        all.retain(Move::is_capture);
    }
    all
}

/// Apply a move to a board alone: relocate, remove the captured piece,
/// crown on the far rank. Used by transitions and by the bot's search.
#[must_use]
pub fn apply_on_board(board: &Board, mv: &Move) -> Board {
    let mut next = *board;
    let Some(piece) = board.get(mv.from) else {
        return next;
    };
    next.set(mv.from, None);
    next.set(mv.to, Some(piece));
    if let Some(captured) = mv.captured {
        next.set(captured, None);
    }
    if piece.kind == PieceKind::Man && reaches_far_rank(piece.color, mv.to) {
        next.set(
            mv.to,
            Some(Piece {
                color: piece.color,
                kind: PieceKind::King,
            }),
        );
    }
    next
}

fn reaches_far_rank(color: PieceColor, to: Pos) -> bool {
    match color {
        PieceColor::Red => to.row == 0,
        PieceColor::Black => to.row == 7,
    }
}

/// The winner by piece elimination, if either side has nothing left.
#[must_use]
pub fn compute_winner(board: &Board) -> Option<PieceColor> {
    if board.count(PieceColor::Red) == 0 {
        Some(PieceColor::Black)
    } else if board.count(PieceColor::Black) == 0 {
        Some(PieceColor::Red)
    } else {
        None
    }
}

/// The checkers rules engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Checkers;

impl Rules for Checkers {
    type Config = ();
    type State = GameState;
    type Move = Move;
    type Status = Status;

    fn initial_state(&self, _config: ()) -> GameState {
        GameState {
            position: Position::initial(),
            timeline: Timeline::new(),
        }
    }

    fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        let position = &state.position;
        if position.winner.is_some() {
            return Vec::new();
        }
        moves_for_player(&position.board, position.turn, position.forced_from)
    }

    fn apply(&self, state: &GameState, mv: &Move) -> Result<GameState, RuleViolation> {
        let position = &state.position;
        if !in_bounds(mv.from) || !in_bounds(mv.to) {
            return Err(RuleViolation::OutOfBounds);
        }
        if position.winner.is_some() {
            return Err(RuleViolation::IllegalMove);
        }
        let piece = position.board.get(mv.from).ok_or(RuleViolation::IllegalMove)?;
        if piece.color != position.turn {
            return Err(RuleViolation::NotYourTurn);
        }
        // Resolve against the engine's own move list so the captured
        // square cannot be forged and the mandatory-capture and chain
        // rules always hold.
        let legal = self
            .legal_moves(state)
            .into_iter()
            .find(|m| m.from == mv.from && m.to == mv.to)
            .ok_or(RuleViolation::IllegalMove)?;

        let next_board = apply_on_board(&position.board, &legal);
        let crowned = piece.kind == PieceKind::Man && reaches_far_rank(piece.color, legal.to);

        // A capture chain continues from the landing square unless the
        // piece was just crowned.
        let mut next_turn = position.turn.opponent();
        let mut forced_from = None;
        if legal.is_capture() && !crowned {
            let more_captures = moves_from(&next_board, legal.to)
                .into_iter()
                .any(|m| m.is_capture());
            if more_captures {
                next_turn = position.turn;
                forced_from = Some(legal.to);
            }
        }

        let mut winner = compute_winner(&next_board);
        if winner.is_none() && forced_from.is_none() {
            // A side left without a legal move loses.
            if moves_for_player(&next_board, next_turn, None).is_empty() {
                winner = Some(position.turn);
            }
        }

        let mut next = state.clone();
        next.position = Position {
            board: next_board,
            turn: if winner.is_some() {
                position.turn
            } else {
                next_turn
            },
            winner,
            forced_from,
        };
        next.timeline.record(*position);
        Ok(next)
    }

    fn status(&self, state: &GameState) -> Status {
        match state.position.winner {
            Some(winner) => Status::Won(winner),
            None => Status::InProgress {
                turn: state.position.turn,
            },
        }
    }
}

fn in_bounds(pos: Pos) -> bool {
    pos.row < 8 && pos.col < 8
}

impl Checkers {
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
