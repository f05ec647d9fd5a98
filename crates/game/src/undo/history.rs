//! Undo history resource and the events around it.

use bevy::prelude::*;

use super::types::{Snapshot, UndoError};
use crate::board::Board;
use crate::hand::Hand;
use crate::scorer::Scorer;

// ---------------------------------------------------------------------------
// UndoHistory resource
// ---------------------------------------------------------------------------

/// Stack of snapshots taken since the hand was last refilled, bottom first.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct UndoHistory {
    snapshots: Vec<Snapshot>,
}

impl UndoHistory {
    /// True while at least one piece of the current hand has been played.
    pub fn can_undo(hand: &Hand) -> bool {
        hand.available_count() < hand.capacity()
    }

    /// Snapshot the state a move is about to change. Must run before the
    /// move is applied. A full hand means a refill just happened, so the
    /// previous hand's history is dropped first.
    pub fn record_state(&mut self, board: &Board, hand: &Hand, scorer: &Scorer) {
        if !Self::can_undo(hand) {
            self.clear();
        }
        self.snapshots.push(Snapshot::capture(board, hand, scorer));
    }

    /// Drop the most recent snapshot without applying it.
    pub fn discard_last_state(&mut self) -> Result<Snapshot, UndoError> {
        self.snapshots.pop().ok_or(UndoError::EmptyHistory)
    }

    /// Pop the most recent snapshot and write it back into the live state.
    /// Only the first `hand.capacity()` slots are written.
    pub fn restore_last(
        &mut self,
        board: &mut Board,
        hand: &mut Hand,
        scorer: &mut Scorer,
    ) -> Result<(), UndoError> {
        let snapshot = self.snapshots.pop().ok_or(UndoError::EmptyHistory)?;
        scorer.current_score = snapshot.score;
        board.replace_cells(snapshot.cells);
        for (slot, piece) in hand.slots_mut().iter_mut().zip(snapshot.pieces) {
            *slot = piece;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Snapshots in push order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Append an already built snapshot. Used when loading a saved history.
    pub fn push_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// The player wants to undo the last move.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct UndoRequested;

/// An undo was applied; carries the score it rewound to.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoPerformed {
    pub restored_score: u32,
}
