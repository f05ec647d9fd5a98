//! Committing a piece from the hand to the board.
//!
//! Every attempt records an undo snapshot first; a rejected drop discards
//! it again, so history depth only grows for moves that actually happened.
//! Playing the last piece of a hand deals a new one.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::config::GameConfig;
use crate::hand::Hand;
use crate::scorer::Scorer;
use crate::undo::{process_undo, UndoHistory};

/// Seeded source for dealing pieces.
#[derive(Resource)]
pub struct GameRng(pub ChaCha8Rng);

impl GameRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl FromWorld for GameRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world
            .get_resource::<GameConfig>()
            .map(|c| c.seed)
            .unwrap_or(crate::config::DEFAULT_SEED);
        Self::from_seed(seed)
    }
}

/// The player dropped the piece in `slot` with its top-left cell at
/// `(row, col)`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacePieceRequested {
    pub slot: usize,
    pub row: usize,
    pub col: usize,
}

/// A piece was committed to the board.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecePlaced {
    pub slot: usize,
    pub points: u32,
    /// The hand ran out and was dealt again.
    pub refilled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    Placed { points: u32, refilled: bool },
    /// The piece does not fit at the requested position.
    Rejected,
    /// The slot holds no piece.
    EmptySlot,
}

/// Try to play one piece. See the module docs for the undo bookkeeping.
pub fn try_place_piece(
    history: &mut UndoHistory,
    board: &mut Board,
    hand: &mut Hand,
    scorer: &mut Scorer,
    rng: &mut ChaCha8Rng,
    request: PlacePieceRequested,
) -> PlacementOutcome {
    let Some(piece) = hand.piece(request.slot).cloned() else {
        return PlacementOutcome::EmptySlot;
    };

    history.record_state(board, hand, scorer);
    if !board.put_piece(&piece, request.row, request.col) {
        if let Err(e) = history.discard_last_state() {
            warn!("Could not discard speculative snapshot: {e}");
        }
        return PlacementOutcome::Rejected;
    }

    hand.take(request.slot);
    let points = piece.cell_count() as u32;
    scorer.add(points);

    let refilled = hand.is_empty();
    if refilled {
        hand.refill(rng);
    }
    PlacementOutcome::Placed { points, refilled }
}

pub fn process_placement(
    mut events: EventReader<PlacePieceRequested>,
    mut history: ResMut<UndoHistory>,
    mut board: ResMut<Board>,
    mut hand: ResMut<Hand>,
    mut scorer: ResMut<Scorer>,
    mut rng: ResMut<GameRng>,
    mut placed: EventWriter<PiecePlaced>,
) {
    for request in events.read() {
        match try_place_piece(
            &mut history,
            &mut board,
            &mut hand,
            &mut scorer,
            &mut rng.0,
            *request,
        ) {
            PlacementOutcome::Placed { points, refilled } => {
                placed.send(PiecePlaced {
                    slot: request.slot,
                    points,
                    refilled,
                });
            }
            PlacementOutcome::Rejected => {
                debug!(
                    "Piece in slot {} does not fit at ({}, {})",
                    request.slot, request.row, request.col
                );
            }
            PlacementOutcome::EmptySlot => {
                warn!("Placement requested from empty slot {}", request.slot);
            }
        }
    }
}

pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameRng>()
            .add_event::<PlacePieceRequested>()
            .add_event::<PiecePlaced>()
            .add_systems(Update, process_placement.before(process_undo));
    }
}
