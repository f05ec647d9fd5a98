use bevy::prelude::*;

pub mod board;
pub mod config;
pub mod hand;
pub mod piece;
pub mod placement;
pub mod scorer;
pub mod undo;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub(crate) mod test_harness;

use config::GameConfig;

/// Wires the collaborators, placement and undo together. Board, hand and
/// scorer are built from `GameConfig` unless already present.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>();
        let config = app.world().resource::<GameConfig>().clone();

        if !app.world().contains_resource::<board::Board>() {
            app.insert_resource(config.build_board());
        }
        if !app.world().contains_resource::<hand::Hand>() {
            app.insert_resource(config.build_hand());
        }
        app.init_resource::<scorer::Scorer>();

        app.add_plugins((undo::UndoPlugin, placement::PlacementPlugin))
            .add_systems(Startup, deal_first_hand);
    }
}

/// Fill an empty hand at startup. A hand restored from a save is left alone.
fn deal_first_hand(mut hand: ResMut<hand::Hand>, mut rng: ResMut<placement::GameRng>) {
    if hand.is_empty() {
        hand.refill(&mut rng.0);
        info!("Dealt first hand of {} pieces", hand.capacity());
    }
}
