use bevy::input::ButtonInput;
use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;
use std::marker::PhantomData;
use tracing::{debug, info};

use crate::debug_overlay::{DebugOverlay, FrameContext};
use crate::draw::DrawSurface;
use crate::settings::Settings;
use crate::targets::TargetLocator;
use game_input::{GamepadConfig, ToggleBinding, gamepad_connection_system};

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebugOverlaySet;

/// Adds the debug overlay to an app whose host provides a `FrameContext`
/// resource each frame, a locator resource `L` and a surface resource `S`.
pub struct DebugOverlayPlugin<L, S> {
    _marker: PhantomData<fn() -> (L, S)>,
}

impl<L, S> Default for DebugOverlayPlugin<L, S> {
    fn default() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<L, S> Plugin for DebugOverlayPlugin<L, S>
where
    L: TargetLocator + Resource,
    S: DrawSurface + Resource,
{
    fn build(&self, app: &mut App) {
        app.init_resource::<GamepadConfig>()
            .init_resource::<LastLoggedTile>()
            .add_systems(Startup, setup_debug_overlay)
            .add_systems(
                Update,
                (
                    gamepad_connection_system,
                    toggle_debug_system,
                    log_cursor_tile_system,
                    draw_debug_overlay_system::<L, S>,
                )
                    .chain()
                    .in_set(DebugOverlaySet),
            );
    }
}

/// Keyboard/controller binding that flips the overlay.
#[derive(Resource, Debug, Clone, Default)]
pub struct DebugToggle(pub ToggleBinding);

#[derive(Resource, Default, Debug, Clone, Copy)]
struct LastLoggedTile(Option<(i32, i32)>);

fn setup_debug_overlay(mut commands: Commands, settings: Option<Res<Settings>>) {
    let settings = settings.map(|s| Settings::clone(&s)).unwrap_or_default();
    let overlay = DebugOverlay::from_settings(&settings);
    let binding = ToggleBinding::toggle_debug(&settings.controls);

    info!(
        enabled = overlay.is_enabled(),
        bindings = ?binding.labels(),
        "debug overlay ready"
    );
    commands.insert_resource(overlay);
    commands.insert_resource(DebugToggle(binding));
}

pub fn toggle_debug_system(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    toggle: Option<Res<DebugToggle>>,
    gamepad_config: Res<GamepadConfig>,
    gamepads: Query<&Gamepad>,
    overlay: Option<ResMut<DebugOverlay>>,
) {
    let (Some(keyboard), Some(toggle), Some(mut overlay)) = (keyboard, toggle, overlay) else {
        return;
    };

    let gamepad = gamepad_config
        .primary_gamepad
        .and_then(|entity| gamepads.get(entity).ok());

    if toggle.0.is_just_pressed(&keyboard, gamepad) {
        let enabled = overlay.toggle();
        info!("Debug overlay {}", if enabled { "enabled" } else { "disabled" });
    }
}

fn log_cursor_tile_system(
    frame: Option<Res<FrameContext>>,
    overlay: Option<Res<DebugOverlay>>,
    mut last: ResMut<LastLoggedTile>,
) {
    let (Some(frame), Some(overlay)) = (frame, overlay) else {
        return;
    };
    if !overlay.is_enabled() {
        return;
    }

    let tile = frame.cursor_tile.floor();
    let tile_i = (tile.x as i32, tile.y as i32);
    if last.0 != Some(tile_i) {
        debug!(
            location = %frame.location,
            screen_x = frame.cursor_position.x,
            screen_y = frame.cursor_position.y,
            tx = tile_i.0,
            ty = tile_i.1,
            "cursor tile"
        );
        last.0 = Some(tile_i);
    }
}

pub fn draw_debug_overlay_system<L, S>(
    overlay: Option<Res<DebugOverlay>>,
    frame: Option<Res<FrameContext>>,
    locator: Option<Res<L>>,
    surface: Option<ResMut<S>>,
) where
    L: TargetLocator + Resource,
    S: DrawSurface + Resource,
{
    let (Some(overlay), Some(frame), Some(locator), Some(mut surface)) =
        (overlay, frame, locator, surface)
    else {
        return;
    };

    overlay.render_frame(&frame, &*locator, &mut *surface);
}
