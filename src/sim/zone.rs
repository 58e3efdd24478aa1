//! Headquarters zones
//!
//! Stationary rectangles enemies bounce off. The rotation is display-only;
//! collision always runs against the axis-aligned rect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Closest point of the rect to `p`, clamping on both axes
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.x + self.w),
            p.y.clamp(self.y, self.y + self.h),
        )
    }
}

/// A stationary zone with a display rotation and a place label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Headquarters {
    pub id: u32,
    pub rect: Rect,
    /// Display rotation in degrees; collision ignores it
    pub rotation: f32,
    /// 1-based label shown on the zone
    pub place: u32,
    /// True while any enemy overlaps the rect, refreshed every tick
    pub is_colliding: bool,
}

impl Headquarters {
    pub fn new(id: u32, rect: Rect, rotation: f32, place: u32) -> Self {
        Self {
            id,
            rect,
            rotation,
            place,
            is_colliding: false,
        }
    }
}
