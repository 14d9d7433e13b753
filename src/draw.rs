//! Drawing primitives the host surface provides, plus the hover text box built on them.

use glam::{Vec2, Vec4};

/// Premultiplied RGBA colours. Scale with `*` to fade, as `GREEN * 0.5`.
pub mod palette {
    use glam::Vec4;

    pub const GREEN: Vec4 = Vec4::new(0.0, 128.0 / 255.0, 0.0, 1.0);
    pub const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
    pub const DARK_RED: Vec4 = Vec4::new(139.0 / 255.0, 0.0, 0.0, 1.0);
    pub const WHITE: Vec4 = Vec4::ONE;
    pub const HOVER_BACKGROUND: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.75);
}

/// Padding between the hover box edge and its text.
pub const HOVER_BOX_PADDING: f32 = 12.0;

pub trait DrawSurface {
    /// Fills an axis-aligned rectangle.
    fn draw_rect(&mut self, position: Vec2, size: Vec2, color: Vec4);

    fn draw_text(&mut self, text: &str, position: Vec2, color: Vec4);

    fn measure_text(&self, text: &str) -> Vec2;

    /// Draws `text` in a translucent box anchored at `position`, wrapped so the
    /// box is no wider than `max_width`.
    fn draw_hover_box(&mut self, text: &str, position: Vec2, max_width: f32) {
        let layout = HoverBoxLayout::new(text, position, max_width, |s| self.measure_text(s));
        self.draw_rect(layout.position, layout.size, palette::HOVER_BACKGROUND);
        for (line, line_position) in &layout.lines {
            self.draw_text(line, *line_position, palette::WHITE);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoverBoxLayout {
    pub position: Vec2,
    pub size: Vec2,
    pub lines: Vec<(String, Vec2)>,
}

impl HoverBoxLayout {
    pub fn new(
        text: &str,
        position: Vec2,
        max_width: f32,
        measure: impl Fn(&str) -> Vec2,
    ) -> Self {
        let inner_width = (max_width - HOVER_BOX_PADDING * 2.0).max(0.0);
        let wrapped = wrap_text(text, inner_width, |s| measure(s).x);

        let mut lines = Vec::with_capacity(wrapped.len());
        let mut cursor = position + Vec2::splat(HOVER_BOX_PADDING);
        let mut content = Vec2::ZERO;
        for line in wrapped {
            let size = measure(&line);
            lines.push((line, cursor));
            cursor.y += size.y;
            content.x = content.x.max(size.x);
            content.y += size.y;
        }

        let size = (content + Vec2::splat(HOVER_BOX_PADDING * 2.0)).min(Vec2::new(
            max_width.max(HOVER_BOX_PADDING * 2.0),
            f32::INFINITY,
        ));
        Self {
            position,
            size,
            lines,
        }
    }
}

/// Greedy word wrap. A word wider than `max_width` gets a line to itself.
pub fn wrap_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }
    lines
}
