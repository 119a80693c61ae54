use bevy::prelude::*;

/// Axis-aligned rectangle in world space, used as the starfield extents.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Aabb {
    /// Build from an origin corner and a size, like a scene rect.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min_x: x,
            max_x: x + w,
            min_y: y,
            max_y: y + h,
        }
    }

    #[allow(dead_code)] // used in tests
    pub fn from_center(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min_x: x - w / 2.0,
            max_x: x + w / 2.0,
            min_y: y - h / 2.0,
            max_y: y + h / 2.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Boundary counts as inside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Euclidean distance from a point to the nearest edge or corner.
    ///
    /// Per-axis overflow is clamped to zero, so any point inside or on the
    /// boundary yields exactly 0.
    pub fn distance_to(&self, point: Vec2) -> f32 {
        let dx = (self.min_x - point.x).max(point.x - self.max_x).max(0.0);
        let dy = (self.min_y - point.y).max(point.y - self.max_y).max(0.0);
        (dx * dx + dy * dy).sqrt()
    }
}
