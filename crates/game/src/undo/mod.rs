//! Undo for the current hand.
//!
//! An `UndoHistory` resource keeps a LIFO stack of `Snapshot`s (score, board
//! cells, hand slots). A snapshot is recorded before every committed move and
//! the whole stack is dropped when a record is taken while the hand is full,
//! so undo never reaches back across a refill. `UndoRequested` restores the
//! most recent snapshot when undo is actionable.

pub mod history;
pub mod systems;
pub mod types;


pub use history::{UndoHistory, UndoPerformed, UndoRequested};
pub use systems::{process_undo, UndoPlugin};
pub use types::{Snapshot, UndoError};
