//! # TestGame — headless integration test harness
//!
//! Wraps `bevy::app::App` + `GamePlugin` so integration tests can send
//! events, tick, and inspect resources without a window.

use bevy::app::App;
use bevy::prelude::*;

use crate::board::Board;
use crate::config::GameConfig;
use crate::hand::Hand;
use crate::piece::Piece;
use crate::placement::PlacePieceRequested;
use crate::scorer::Scorer;
use crate::undo::{UndoHistory, UndoPerformed, UndoRequested};
use crate::GamePlugin;

pub struct TestGame {
    app: App,
}

impl TestGame {
    /// A 10x10 board with a freshly dealt hand of three pieces.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(config);
        app.add_plugins(GamePlugin);
        let mut game = Self { app };
        game.tick(1);
        game
    }

    /// Replace every hand slot with `piece`.
    pub fn with_hand_of(mut self, piece: Piece) -> Self {
        for slot in self.app.world_mut().resource_mut::<Hand>().slots_mut() {
            *slot = Some(piece.clone());
        }
        self
    }

    pub fn tick(&mut self, n: usize) {
        for _ in 0..n {
            self.app.update();
        }
    }

    pub fn place(&mut self, slot: usize, row: usize, col: usize) {
        self.app
            .world_mut()
            .send_event(PlacePieceRequested { slot, row, col });
        self.tick(1);
    }

    pub fn undo(&mut self) {
        self.app.world_mut().send_event(UndoRequested);
        self.tick(1);
    }

    pub fn board(&self) -> &Board {
        self.app.world().resource::<Board>()
    }

    pub fn hand(&self) -> &Hand {
        self.app.world().resource::<Hand>()
    }

    pub fn scorer(&self) -> &Scorer {
        self.app.world().resource::<Scorer>()
    }

    pub fn history(&self) -> &UndoHistory {
        self.app.world().resource::<UndoHistory>()
    }

    /// Drain `UndoPerformed` events sent since the last call.
    pub fn undo_performed(&mut self) -> Vec<UndoPerformed> {
        self.app
            .world_mut()
            .resource_mut::<Events<UndoPerformed>>()
            .drain()
            .collect()
    }
}
