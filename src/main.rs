use bevy::prelude::*;
use glam::{Vec2, Vec4};

use lookup::debug_overlay::FrameContext;
use lookup::draw::DrawSurface;
use lookup::geometry::{ScreenRect, Viewport, screen_to_tile};
use lookup::plugins::debug_overlay::DebugOverlayPlugin;
use lookup::settings::{Settings, SettingsPlugin};
use lookup::targets::{LocationId, SceneLocator, Subject, TargetKind};
use lookup::DebugOverlay;

/// Surface that logs every primitive instead of drawing it.
#[derive(Resource, Default)]
struct LogSurface;

impl DrawSurface for LogSurface {
    fn draw_rect(&mut self, position: Vec2, size: Vec2, color: Vec4) {
        tracing::info!(?position, ?size, ?color, "rect");
    }

    fn draw_text(&mut self, text: &str, position: Vec2, _color: Vec4) {
        tracing::info!(?position, "text: {}", text);
    }

    fn measure_text(&self, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * 9.0, 18.0)
    }
}

fn demo_scene(location: &LocationId, viewport: &Viewport) -> SceneLocator {
    let tile = |x: f32, y: f32| Vec2::new(x, y);
    let sprite = |x: f32, y: f32, tiles_high: i32| {
        let origin = tile(x, y - (tiles_high - 1) as f32) * 64.0 - viewport.origin();
        ScreenRect::new(origin.x as i32, origin.y as i32, 64, 64 * tiles_high)
    };

    let mut scene = SceneLocator::default();
    scene.insert(
        location.clone(),
        TargetKind::Tree,
        tile(4.0, 5.0),
        sprite(4.0, 5.0, 2),
        Some(Subject::new("Oak Tree").with_type_name("Tree")),
    );
    scene.insert(
        location.clone(),
        TargetKind::Unknown,
        tile(4.0, 4.0),
        sprite(4.0, 4.0, 1),
        None,
    );
    scene.insert(
        location.clone(),
        TargetKind::Crop,
        tile(2.0, 3.0),
        sprite(2.0, 3.0, 1),
        Some(Subject::new("Parsnip").with_description("A spring tuber.")),
    );
    scene
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init()
        .ok();

    let location = LocationId::new("Farm");
    let viewport = Viewport::new(0, 0, 1280, 720);
    let cursor = Vec2::new(280.0, 270.0);
    let frame = FrameContext::new(location.clone(), viewport)
        .with_cursor(screen_to_tile(cursor, &viewport, 64), cursor);

    let mut app = App::new();
    if let Some(path) = std::env::args().nth(1) {
        app.insert_resource(Settings::load_from(std::path::Path::new(&path))?);
    }
    app.add_plugins(MinimalPlugins)
        .add_plugins(bevy::input::InputPlugin)
        .add_plugins((
            SettingsPlugin,
            DebugOverlayPlugin::<SceneLocator, LogSurface>::default(),
        ))
        .insert_resource(demo_scene(&location, &viewport))
        .insert_resource(LogSurface)
        .insert_resource(frame);

    app.update();
    app.world_mut().resource_mut::<DebugOverlay>().set_enabled(true);
    app.update();

    Ok(())
}
