use bevy::prelude::*;

pub mod action_icons;

pub use action_icons::{Action, ActionIcons, PauseRequested};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionIcons>()
            .add_event::<PauseRequested>()
            .add_systems(
                Update,
                action_icons::press_action_icons.before(game::undo::process_undo),
            );
    }
}
