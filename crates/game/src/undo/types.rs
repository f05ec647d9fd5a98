//! Snapshot and error types for the undo system.

use std::fmt;

use crate::board::{Board, Cell};
use crate::hand::Hand;
use crate::piece::Piece;
use crate::scorer::Scorer;

/// Copy of score, board cells and hand slots at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub score: u32,
    /// Row-major, `cell_count²` entries.
    pub cells: Vec<Cell>,
    /// One entry per hand slot; `None` for slots already played.
    pub pieces: Vec<Option<Piece>>,
}

impl Snapshot {
    /// Deep copy of the live collaborators.
    pub fn capture(board: &Board, hand: &Hand, scorer: &Scorer) -> Self {
        Self {
            score: scorer.current_score,
            cells: board.cells().to_vec(),
            pieces: hand.slots().to_vec(),
        }
    }
}

/// Misuse of the undo stack by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoError {
    /// `discard_last_state` or `restore_last` was called with no history.
    EmptyHistory,
}

impl fmt::Display for UndoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoError::EmptyHistory => write!(f, "undo history is empty"),
        }
    }
}

impl std::error::Error for UndoError {}
