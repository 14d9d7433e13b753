#![allow(dead_code)]

use glam::{Vec2, Vec4};
use lookup::debug_overlay::{DebugOverlay, FrameContext};
use lookup::draw::DrawSurface;
use lookup::geometry::{ScreenRect, Viewport};
use lookup::targets::{LocationId, Subject, Target, TargetKind, TargetLocator};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect {
        position: Vec2,
        size: Vec2,
        color: Vec4,
    },
    Text {
        text: String,
        position: Vec2,
    },
    HoverBox {
        text: String,
        position: Vec2,
        max_width: f32,
    },
}

impl DrawCall {
    pub fn render(&self) -> String {
        match self {
            DrawCall::Rect {
                position,
                size,
                color,
            } => format!(
                "rect pos=({:.0}, {:.0}) size=({:.0}, {:.0}) rgba=({:.2}, {:.2}, {:.2}, {:.2})",
                position.x, position.y, size.x, size.y, color.x, color.y, color.z, color.w
            ),
            DrawCall::Text { text, position } => {
                format!("text pos=({:.0}, {:.0}) {:?}", position.x, position.y, text)
            }
            DrawCall::HoverBox {
                text,
                position,
                max_width,
            } => format!(
                "box pos=({:.0}, {:.0}) max_width={:.0} {:?}",
                position.x, position.y, max_width, text
            ),
        }
    }
}

/// Records primitives in call order. Hover boxes are recorded as one call.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl DrawSurface for RecordingSurface {
    fn draw_rect(&mut self, position: Vec2, size: Vec2, color: Vec4) {
        self.calls.push(DrawCall::Rect {
            position,
            size,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, _color: Vec4) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            position,
        });
    }

    fn measure_text(&self, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * 8.0, 16.0)
    }

    fn draw_hover_box(&mut self, text: &str, position: Vec2, max_width: f32) {
        self.calls.push(DrawCall::HoverBox {
            text: text.to_string(),
            position,
            max_width,
        });
    }
}

/// Returns a fixed target list regardless of where the cursor is.
#[derive(Default)]
pub struct FakeLocator {
    pub targets: Vec<(Target, Option<Subject>)>,
    pub at_cursor: Option<Subject>,
}

impl FakeLocator {
    pub fn with_target(
        mut self,
        id: u64,
        kind: TargetKind,
        tile: (f32, f32),
        sprite: ScreenRect,
        subject: Option<&str>,
    ) -> Self {
        self.targets.push((
            Target::new(id, kind, Vec2::new(tile.0, tile.1), sprite),
            subject.map(Subject::new),
        ));
        self
    }

    pub fn with_subject_at_cursor(mut self, name: &str) -> Self {
        self.at_cursor = Some(Subject::new(name));
        self
    }
}

impl TargetLocator for FakeLocator {
    fn nearby_targets(&self, _location: &LocationId, _cursor_tile: Vec2) -> Vec<Target> {
        self.targets.iter().map(|(t, _)| t.clone()).collect()
    }

    fn subject_for_target(&self, target: &Target) -> Option<Subject> {
        self.targets
            .iter()
            .find(|(t, _)| t.id == target.id)
            .and_then(|(_, s)| s.clone())
    }

    fn subject_at(
        &self,
        _location: &LocationId,
        _cursor_tile: Vec2,
        _cursor_position: Vec2,
    ) -> Option<Subject> {
        self.at_cursor.clone()
    }
}

pub fn frame(tile: (f32, f32), position: (f32, f32)) -> FrameContext {
    FrameContext::new(LocationId::new("Farm"), Viewport::new(0, 0, 1280, 720))
        .with_cursor(Vec2::new(tile.0, tile.1), Vec2::new(position.0, position.1))
}

pub fn enabled_overlay() -> DebugOverlay {
    let mut overlay = DebugOverlay::new(Some("F3"), None);
    overlay.set_enabled(true);
    overlay
}

pub fn render(overlay: &DebugOverlay, ctx: &FrameContext, locator: &FakeLocator) -> Vec<DrawCall> {
    let mut surface = RecordingSurface::default();
    overlay.render_frame(ctx, locator, &mut surface);
    surface.calls
}
