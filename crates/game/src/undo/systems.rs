//! Bevy systems and plugin for the undo system.

use bevy::prelude::*;

use super::history::{UndoHistory, UndoPerformed, UndoRequested};
use crate::board::Board;
use crate::hand::Hand;
use crate::scorer::Scorer;

/// Applies `UndoRequested` events. A request is ignored unless a piece of the
/// current hand has been played and a snapshot is available.
pub fn process_undo(
    mut events: EventReader<UndoRequested>,
    mut history: ResMut<UndoHistory>,
    mut board: ResMut<Board>,
    mut hand: ResMut<Hand>,
    mut scorer: ResMut<Scorer>,
    mut performed: EventWriter<UndoPerformed>,
) {
    for _ in events.read() {
        if !UndoHistory::can_undo(&hand) || history.is_empty() {
            debug!("Undo requested but nothing to undo");
            continue;
        }
        match history.restore_last(&mut board, &mut hand, &mut scorer) {
            Ok(()) => {
                info!(
                    "Undo restored score {} ({} snapshots left)",
                    scorer.current_score,
                    history.len()
                );
                performed.send(UndoPerformed {
                    restored_score: scorer.current_score,
                });
            }
            Err(e) => warn!("Undo failed: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct UndoPlugin;

impl Plugin for UndoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UndoHistory>()
            .add_event::<UndoRequested>()
            .add_event::<UndoPerformed>()
            .add_systems(Update, process_undo);
    }
}
