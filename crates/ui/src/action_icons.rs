//! Undo and pause icons.
//!
//! The icons sit in the top band of the screen. The undo icon is only shown
//! and only reacts while undo is actionable; the pause icon is optional and
//! always live. Drawing is left to the host: it asks [`ActionIcons::visible`]
//! what to draw and where. Coordinates are window logical pixels with the
//! origin at the top-left, as reported by `Window::cursor_position`.

use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use game::hand::Hand;
use game::undo::{UndoHistory, UndoRequested};

/// Icon side as a fraction of the band height.
const ICON_SCALE: f32 = 0.75;

const DEFAULT_BAND: Rect = Rect {
    min: Vec2::new(0.0, 0.0),
    max: Vec2::new(480.0, 96.0),
};

/// What a press on the icon band did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Undo,
    Pause,
}

/// The player pressed the pause icon.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct PauseRequested;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ActionIcons {
    pub undo_area: Rect,
    pub pause_area: Option<Rect>,
}

impl Default for ActionIcons {
    fn default() -> Self {
        Self::layout(DEFAULT_BAND, true)
    }
}

impl ActionIcons {
    pub fn undo_only(undo_area: Rect) -> Self {
        Self {
            undo_area,
            pause_area: None,
        }
    }

    pub fn with_pause(undo_area: Rect, pause_area: Rect) -> Self {
        Self {
            undo_area,
            pause_area: Some(pause_area),
        }
    }

    /// Square icons vertically centred in `band`: undo against the right
    /// edge, pause against the left.
    pub fn layout(band: Rect, with_pause: bool) -> Self {
        let side = band.height() * ICON_SCALE;
        let margin = (band.height() - side) / 2.0;
        let top = band.min.y + margin;

        let undo_min = Vec2::new(band.max.x - margin - side, top);
        let undo_area = Rect::from_corners(undo_min, undo_min + Vec2::splat(side));
        if !with_pause {
            return Self::undo_only(undo_area);
        }

        let pause_min = Vec2::new(band.min.x + margin, top);
        let pause_area = Rect::from_corners(pause_min, pause_min + Vec2::splat(side));
        Self::with_pause(undo_area, pause_area)
    }

    /// The undo icon is hidden while there is nothing to undo.
    pub fn undo_visible(&self, can_undo: bool) -> bool {
        can_undo
    }

    /// Icons the host should draw this frame.
    pub fn visible(&self, can_undo: bool) -> Vec<(Action, Rect)> {
        let mut icons = Vec::with_capacity(2);
        if self.undo_visible(can_undo) {
            icons.push((Action::Undo, self.undo_area));
        }
        if let Some(pause) = self.pause_area {
            icons.push((Action::Pause, pause));
        }
        icons
    }

    /// Resolve a press at `point`. Rectangle edges count as inside.
    pub fn hit(&self, point: Vec2, can_undo: bool) -> Action {
        if can_undo && self.undo_area.contains(point) {
            return Action::Undo;
        }
        match self.pause_area {
            Some(pause) if pause.contains(point) => Action::Pause,
            _ => Action::None,
        }
    }
}

/// Turn mouse clicks and touches on the icons into undo/pause requests.
/// Without input resources or a primary window (headless runs) this does
/// nothing.
pub fn press_action_icons(
    icons: Res<ActionIcons>,
    hand: Res<Hand>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut undo: EventWriter<UndoRequested>,
    mut pause: EventWriter<PauseRequested>,
) {
    let mut presses: Vec<Vec2> = Vec::new();
    if let Some(touches) = touches {
        presses.extend(touches.iter_just_pressed().map(|t| t.position()));
    }
    if mouse.is_some_and(|m| m.just_pressed(MouseButton::Left)) {
        if let Some(pos) = windows.get_single().ok().and_then(Window::cursor_position) {
            presses.push(pos);
        }
    }

    let can_undo = UndoHistory::can_undo(&hand);
    for point in presses {
        match icons.hit(point, can_undo) {
            Action::Undo => {
                undo.send(UndoRequested);
            }
            Action::Pause => {
                pause.send(PauseRequested);
            }
            Action::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::piece::{Piece, PieceKind};

    fn icons() -> ActionIcons {
        ActionIcons::with_pause(
            Rect::new(400.0, 10.0, 450.0, 60.0),
            Rect::new(10.0, 10.0, 60.0, 60.0),
        )
    }

    #[test]
    fn test_undo_hit_requires_can_undo() {
        let icons = icons();
        let inside = Vec2::new(420.0, 30.0);
        assert_eq!(icons.hit(inside, true), Action::Undo);
        assert_eq!(icons.hit(inside, false), Action::None);
    }

    #[test]
    fn test_pause_always_live_and_edges_inclusive() {
        let icons = icons();
        assert_eq!(icons.hit(Vec2::new(10.0, 10.0), false), Action::Pause);
        assert_eq!(icons.hit(Vec2::new(60.0, 60.0), true), Action::Pause);
        assert_eq!(icons.hit(Vec2::new(61.0, 60.0), true), Action::None);
    }

    #[test]
    fn test_undo_only_has_no_pause() {
        let icons = ActionIcons::undo_only(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(icons.hit(Vec2::new(5.0, 5.0), false), Action::None);
        assert_eq!(icons.visible(false), vec![]);
        assert_eq!(icons.visible(true).len(), 1);
    }

    #[test]
    fn test_visible_hides_undo_when_not_actionable() {
        let icons = icons();
        let shown: Vec<Action> = icons.visible(false).into_iter().map(|(a, _)| a).collect();
        assert_eq!(shown, vec![Action::Pause]);
        assert!(!icons.undo_visible(false));
    }

    #[test]
    fn test_layout_places_icons_in_band() {
        let band = Rect::new(0.0, 0.0, 500.0, 100.0);
        let icons = ActionIcons::layout(band, true);
        assert_eq!(icons.undo_area, Rect::new(412.5, 12.5, 487.5, 87.5));
        assert_eq!(icons.pause_area, Some(Rect::new(12.5, 12.5, 87.5, 87.5)));
        assert!(ActionIcons::layout(band, false).pause_area.is_none());
    }

    fn app_with_click_at(point: Vec2, played_one: bool) -> App {
        let mut app = App::new();
        app.add_event::<UndoRequested>()
            .add_event::<PauseRequested>()
            .insert_resource(icons())
            .add_systems(Update, press_action_icons);

        let mut hand = Hand::new(3);
        for slot in hand.slots_mut() {
            *slot = Some(Piece::from_kind(PieceKind::Square(1), 0));
        }
        if played_one {
            hand.take(0);
        }
        app.insert_resource(hand);

        let mut mouse = ButtonInput::<MouseButton>::default();
        mouse.press(MouseButton::Left);
        app.insert_resource(mouse);

        let mut window = Window::default();
        window.set_cursor_position(Some(point));
        app.world_mut().spawn((window, PrimaryWindow));
        app
    }

    fn count<E: Event>(app: &App) -> usize {
        app.world().resource::<Events<E>>().len()
    }

    #[test]
    fn test_click_on_undo_sends_request() {
        let mut app = app_with_click_at(Vec2::new(420.0, 30.0), true);
        app.update();
        assert_eq!(count::<UndoRequested>(&app), 1);
        assert_eq!(count::<PauseRequested>(&app), 0);
    }

    #[test]
    fn test_click_on_undo_with_full_hand_is_ignored() {
        let mut app = app_with_click_at(Vec2::new(420.0, 30.0), false);
        app.update();
        assert_eq!(count::<UndoRequested>(&app), 0);
    }

    #[test]
    fn test_click_on_pause_sends_request() {
        let mut app = app_with_click_at(Vec2::new(30.0, 30.0), false);
        app.update();
        assert_eq!(count::<PauseRequested>(&app), 1);
    }

    #[test]
    fn test_headless_without_input_is_noop() {
        let mut app = App::new();
        app.add_event::<UndoRequested>()
            .add_event::<PauseRequested>()
            .insert_resource(icons())
            .insert_resource(Hand::new(3))
            .add_systems(Update, press_action_icons);
        app.update();
        assert_eq!(count::<UndoRequested>(&app), 0);
    }
}
