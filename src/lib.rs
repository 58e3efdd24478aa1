//! Swarm Arena - a pointer-chase survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, the per-frame tick)
//! - `assets`: Sprite-sheet metadata shared with the renderer
//! - `render`: Renderer capability and the per-frame draw pass

pub mod assets;
pub mod render;
pub mod sim;

pub use sim::{World, WorldConfig, tick};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Longest step a single frame may integrate (seconds), so a stalled
    /// frame driver cannot teleport entities across the arena
    pub const MAX_FRAME_STEP: f32 = 0.1;
    /// Wall bounce multiplier, above 1 so every bounce adds speed
    pub const WALL_RESTITUTION: f32 = 1.2;
    /// Session seconds before enemies start moving
    pub const WARMUP_DELAY: f64 = 1.0;

    /// Player body radius (pixels)
    pub const PLAYER_RADIUS: f32 = 25.0;
    /// Player steering speed (pixels per second)
    pub const PLAYER_SPEED: f32 = 70.0;
    /// Distance to the destination below which the player stops moving
    pub const ARRIVE_RADIUS: f32 = 2.0;

    /// Enemy launch speed at spawn (pixels per second)
    pub const ENEMY_START_SPEED: f32 = 100.0;
    /// Cruising ceiling enemy speed decays toward after wall bounces
    pub const ENEMY_MAX_SPEED: f32 = 200.0;
    /// Per-tick fraction of the excess speed shed above the ceiling
    pub const ENEMY_SPEED_DECAY: f32 = 0.05;
    /// Swarm size when the config does not say otherwise
    pub const DEFAULT_ENEMY_COUNT: usize = 12;

    /// Sprite animation frame interval (milliseconds)
    pub const FRAME_INTERVAL_MS: f64 = 120.0;
}

/// Bearing in radians from `from` to `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Point `distance` away from `origin` along `angle` (radians)
#[inline]
pub fn project_point(origin: Vec2, distance: f32, angle: f32) -> Vec2 {
    origin + Vec2::from_angle(angle) * distance
}

/// Map degrees from the atan2 range (-180, 180] onto [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    if degrees < 0.0 {
        360.0 - degrees.abs()
    } else {
        degrees
    }
}
