//! Screen-space rectangles and tile/pixel conversion for a square tile grid.

use glam::Vec2;

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ScreenRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Overlap test with exclusive edges: rectangles that only touch do not intersect.
    pub fn intersects(&self, other: &ScreenRect) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left() as f32
            && point.x < self.right() as f32
            && point.y >= self.top() as f32
            && point.y < self.bottom() as f32
    }
}

/// Visible part of the world, in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Screen rectangle covered by `tile`. Fractional tiles are truncated after scaling.
pub fn tile_to_screen_rect(tile: Vec2, viewport: &Viewport, tile_size: i32) -> ScreenRect {
    let coord = tile * tile_size as f32 - viewport.origin();
    ScreenRect::new(coord.x as i32, coord.y as i32, tile_size, tile_size)
}

pub fn screen_to_tile(screen: Vec2, viewport: &Viewport, tile_size: i32) -> Vec2 {
    ((screen + viewport.origin()) / tile_size as f32).floor()
}
