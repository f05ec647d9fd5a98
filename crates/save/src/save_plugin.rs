use std::path::Path;

use bevy::prelude::*;
use game::board::Board;
use game::config::GameConfig;
use game::hand::Hand;
use game::scorer::Scorer;
use game::undo::UndoHistory;

use crate::atomic_write::atomic_write;
use crate::game_file::{decode_game, encode_game};
use crate::save_error::SaveError;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Event)]
pub struct SaveGameEvent;

#[derive(Event)]
pub struct LoadGameEvent;

/// Result of the last save or load, for UI feedback.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum SaveLoadOutcome {
    Saved { bytes: usize },
    Loaded,
    Failed(String),
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SaveGameEvent>()
            .add_event::<LoadGameEvent>()
            .add_event::<SaveLoadOutcome>()
            .add_systems(Update, (handle_save, handle_load.after(handle_save)));
    }
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

/// Encode the game and write it atomically to `path`. Returns the file size.
pub fn save_to_file(
    path: &Path,
    board: &Board,
    hand: &Hand,
    scorer: &Scorer,
    history: &UndoHistory,
    compress: bool,
) -> Result<usize, SaveError> {
    let bytes = encode_game(board, hand, scorer, history, compress)?;
    atomic_write(path, &bytes)?;
    Ok(bytes.len())
}

/// Read and decode the save at `path`, then apply it. The live game is only
/// modified when the whole file decoded successfully.
pub fn load_from_file(
    path: &Path,
    board: &mut Board,
    hand: &mut Hand,
    scorer: &mut Scorer,
    history: &mut UndoHistory,
) -> Result<(), SaveError> {
    let bytes = std::fs::read(path)?;
    let loaded = decode_game(&bytes, board, hand)?;
    loaded.apply(board, hand, scorer, history);
    Ok(())
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

fn handle_save(
    mut events: EventReader<SaveGameEvent>,
    config: Res<GameConfig>,
    board: Res<Board>,
    hand: Res<Hand>,
    scorer: Res<Scorer>,
    history: Res<UndoHistory>,
    mut outcomes: EventWriter<SaveLoadOutcome>,
) {
    if events.read().next().is_none() {
        return;
    }
    // Only one save per frame.
    events.read().for_each(drop);

    let path = Path::new(&config.save_path);
    match save_to_file(
        path,
        &board,
        &hand,
        &scorer,
        &history,
        config.compress_saves,
    ) {
        Ok(bytes) => {
            info!("Saved {} bytes to {}", bytes, path.display());
            outcomes.send(SaveLoadOutcome::Saved { bytes });
        }
        Err(e) => {
            error!("Failed to save to {}: {e}", path.display());
            outcomes.send(SaveLoadOutcome::Failed(e.to_string()));
        }
    }
}

/// A failed load keeps the game that is currently running.
fn handle_load(
    mut events: EventReader<LoadGameEvent>,
    config: Res<GameConfig>,
    mut board: ResMut<Board>,
    mut hand: ResMut<Hand>,
    mut scorer: ResMut<Scorer>,
    mut history: ResMut<UndoHistory>,
    mut outcomes: EventWriter<SaveLoadOutcome>,
) {
    if events.read().next().is_none() {
        return;
    }
    events.read().for_each(drop);

    let path = Path::new(&config.save_path);
    match load_from_file(path, &mut board, &mut hand, &mut scorer, &mut history) {
        Ok(()) => {
            info!(
                "Loaded {} (score {}, {} undo snapshots)",
                path.display(),
                scorer.current_score,
                history.len()
            );
            outcomes.send(SaveLoadOutcome::Loaded);
        }
        Err(e) => {
            warn!("Failed to load {}: {e}; keeping current game", path.display());
            outcomes.send(SaveLoadOutcome::Failed(e.to_string()));
        }
    }
}
