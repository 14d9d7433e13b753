//! Debug view of lookup targeting: which targets are near the cursor, which
//! resolve to a subject, and which one the cursor is currently over.

use bevy::prelude::Resource;
use glam::{Vec2, Vec4};
use tracing::trace;

use crate::draw::{DrawSurface, palette};
use crate::geometry::{ScreenRect, Viewport, tile_to_screen_rect};
use crate::settings_types::Settings;
use crate::targets::{LocationId, Target, TargetLocator};
use game_input::ToggleBinding;

pub const DEFAULT_TILE_SIZE: i32 = 64;
pub const DEFAULT_PIXEL_ZOOM: f32 = 4.0;

/// Host state for one frame.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FrameContext {
    pub location: LocationId,
    pub cursor_tile: Vec2,
    /// Cursor position in screen pixels.
    pub cursor_position: Vec2,
    /// Raw mouse position, which differs from `cursor_position` under UI scaling.
    pub mouse_position: Vec2,
    pub viewport: Viewport,
    pub tile_size: i32,
    pub pixel_zoom: f32,
}

impl FrameContext {
    pub fn new(location: LocationId, viewport: Viewport) -> Self {
        Self {
            location,
            cursor_tile: Vec2::ZERO,
            cursor_position: Vec2::ZERO,
            mouse_position: Vec2::ZERO,
            viewport,
            tile_size: DEFAULT_TILE_SIZE,
            pixel_zoom: DEFAULT_PIXEL_ZOOM,
        }
    }

    /// Sets both the cursor and mouse positions.
    pub fn with_cursor(mut self, tile: Vec2, position: Vec2) -> Self {
        self.cursor_tile = tile;
        self.cursor_position = position;
        self.mouse_position = position;
        self
    }

    pub fn tile_area(&self, tile: Vec2) -> ScreenRect {
        tile_to_screen_rect(tile, &self.viewport, self.tile_size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub color: Vec4,
    pub thickness: i32,
}

/// Fill for a target's tile: green when a subject resolved, red otherwise.
pub fn tile_color(resolved: bool) -> Vec4 {
    if resolved {
        palette::GREEN * 0.5
    } else {
        palette::RED * 0.5
    }
}

/// Sprite border for a target; none when it has no subject.
pub fn border_style(resolved: bool, hot: bool) -> Option<BorderStyle> {
    match (resolved, hot) {
        (false, _) => None,
        (true, true) => Some(BorderStyle {
            color: palette::GREEN,
            thickness: 3,
        }),
        (true, false) => Some(BorderStyle {
            color: palette::GREEN * 0.5,
            thickness: 1,
        }),
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct DebugOverlay {
    enabled: bool,
    warning_text: String,
}

impl DebugOverlay {
    pub fn new(keyboard: Option<&str>, controller: Option<&str>) -> Self {
        Self::with_key_names([keyboard, controller].into_iter().flatten())
    }

    pub fn with_key_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: Vec<String> = names
            .into_iter()
            .filter_map(|s| {
                let name = s.as_ref().trim();
                (!name.is_empty()).then(|| name.to_string())
            })
            .collect();
        Self {
            enabled: false,
            warning_text: format!(
                "Debug info enabled; press {} to disable.",
                keys.join(" or ")
            ),
        }
    }

    pub fn from_binding(binding: &ToggleBinding) -> Self {
        Self::with_key_names(binding.labels())
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut overlay = Self::from_binding(&ToggleBinding::toggle_debug(&settings.controls));
        overlay.enabled = settings.debug.enabled_on_start;
        overlay
    }

    pub fn warning_text(&self) -> &str {
        &self.warning_text
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Flips the flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn status_text(&self, ctx: &FrameContext) -> String {
        format!(
            "{} Cursor tile ({}, {}), position ({}, {}).",
            self.warning_text,
            ctx.cursor_tile.x,
            ctx.cursor_tile.y,
            ctx.cursor_position.x,
            ctx.cursor_position.y
        )
    }

    /// Draws the overlay for one frame. Does nothing while disabled.
    pub fn render_frame<L, S>(&self, ctx: &FrameContext, locator: &L, surface: &mut S)
    where
        L: TargetLocator + ?Sized,
        S: DrawSurface + ?Sized,
    {
        if !self.enabled {
            return;
        }

        surface.draw_hover_box(
            &self.status_text(ctx),
            Vec2::ZERO,
            ctx.viewport.width as f32,
        );

        surface.draw_rect(
            ctx.cursor_position - Vec2::ONE,
            Vec2::splat(ctx.pixel_zoom),
            palette::DARK_RED,
        );

        let cursor_area = ctx.tile_area(ctx.cursor_tile);
        let targets = order_for_drawing(locator.nearby_targets(&ctx.location, ctx.cursor_tile));
        let mut resolved = 0usize;
        for target in &targets {
            let subject = locator.subject_for_target(target);
            let hot = target.sprite_area.intersects(&cursor_area);

            let tile = ctx.tile_area(target.tile);
            surface.draw_rect(tile.origin(), tile.size(), tile_color(subject.is_some()));

            if let Some(style) = border_style(subject.is_some(), hot) {
                resolved += 1;
                draw_border(surface, &target.sprite_area, style);
            }
        }

        let hovered =
            locator.subject_at(&ctx.location, ctx.cursor_tile, ctx.cursor_position);
        if let Some(subject) = &hovered {
            surface.draw_hover_box(
                &subject.name,
                ctx.mouse_position + Vec2::splat(ctx.tile_size as f32 / 2.0),
                ctx.viewport.width as f32 / 4.0,
            );
        }

        trace!(
            location = %ctx.location,
            targets = targets.len(),
            resolved,
            hovered = hovered.as_ref().map(|s| s.name.as_str()),
            "debug overlay frame"
        );
    }
}

/// Puts unknown targets first so a known target is always drawn on top of an
/// unknown one it overlaps. Stable within each group.
pub fn order_for_drawing(mut targets: Vec<Target>) -> Vec<Target> {
    targets.sort_by_key(|t| t.kind.is_known());
    targets
}

fn draw_border<S: DrawSurface + ?Sized>(surface: &mut S, area: &ScreenRect, style: BorderStyle) {
    let origin = area.origin();
    let size = area.size();
    let thickness = style.thickness as f32;
    // top, left, right, bottom
    surface.draw_rect(origin, Vec2::new(size.x, thickness), style.color);
    surface.draw_rect(origin, Vec2::new(thickness, size.y), style.color);
    surface.draw_rect(
        origin + Vec2::new(size.x, 0.0),
        Vec2::new(thickness, size.y),
        style.color,
    );
    surface.draw_rect(
        origin + Vec2::new(0.0, size.y),
        Vec2::new(size.x, thickness),
        style.color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::TargetKind;

    fn target(id: u64, kind: TargetKind) -> Target {
        Target::new(id, kind, Vec2::ZERO, ScreenRect::default())
    }

    #[test]
    fn test_warning_text_keyboard_only() {
        let overlay = DebugOverlay::new(Some("F3"), None);
        assert_eq!(
            overlay.warning_text(),
            "Debug info enabled; press F3 to disable."
        );
    }

    #[test]
    fn test_warning_text_both_bindings() {
        let overlay = DebugOverlay::new(Some("F3"), Some("Right Stick"));
        assert_eq!(
            overlay.warning_text(),
            "Debug info enabled; press F3 or Right Stick to disable."
        );
    }

    #[test]
    fn test_warning_text_skips_blank_names() {
        let overlay = DebugOverlay::new(Some(""), Some("Right Stick"));
        assert_eq!(
            overlay.warning_text(),
            "Debug info enabled; press Right Stick to disable."
        );
        assert_eq!(
            DebugOverlay::new(Some("F3"), Some("  ")).warning_text(),
            "Debug info enabled; press F3 to disable."
        );
    }

    #[test]
    fn test_from_settings_uses_display_names() {
        let mut settings = Settings::default();
        settings.controls.keyboard.toggle_debug = "KeyL".to_string();
        settings.controls.controller.toggle_debug = Some("Gamepad:RightThumb".to_string());
        settings.debug.enabled_on_start = true;

        let overlay = DebugOverlay::from_settings(&settings);
        assert!(overlay.is_enabled());
        assert_eq!(
            overlay.warning_text(),
            "Debug info enabled; press L or Right Stick to disable."
        );
    }

    #[test]
    fn test_starts_disabled_and_toggles() {
        let mut overlay = DebugOverlay::new(Some("F3"), None);
        assert!(!overlay.is_enabled());
        assert!(overlay.toggle());
        assert!(!overlay.toggle());
    }

    #[test]
    fn test_status_text_formats_whole_numbers() {
        let overlay = DebugOverlay::new(Some("F3"), None);
        let ctx = FrameContext::new(LocationId::new("Farm"), Viewport::new(0, 0, 1280, 720))
            .with_cursor(Vec2::new(3.0, 4.0), Vec2::new(112.0, 208.0));
        assert!(
            overlay
                .status_text(&ctx)
                .contains("Cursor tile (3, 4), position (112, 208).")
        );
    }

    #[test]
    fn test_order_puts_unknown_first_and_is_stable() {
        let ordered = order_for_drawing(vec![
            target(1, TargetKind::Crop),
            target(2, TargetKind::Unknown),
            target(3, TargetKind::Villager),
            target(4, TargetKind::Unknown),
        ]);
        let ids: Vec<u64> = ordered.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_style_table() {
        assert_eq!(tile_color(true), palette::GREEN * 0.5);
        assert_eq!(tile_color(false), palette::RED * 0.5);
        assert_eq!(border_style(false, true), None);
        assert_eq!(border_style(false, false), None);
        assert_eq!(
            border_style(true, true),
            Some(BorderStyle {
                color: palette::GREEN,
                thickness: 3
            })
        );
        assert_eq!(
            border_style(true, false),
            Some(BorderStyle {
                color: palette::GREEN * 0.5,
                thickness: 1
            })
        );
    }
}
