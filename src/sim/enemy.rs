//! Autonomous swarm enemies
//!
//! Each enemy drifts in a straight line, gaining speed off walls and shedding
//! it back toward a cruising ceiling. Touching the player neutralizes the
//! enemy: it freezes in place for the rest of the session as a marker.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{self, GridLayout};
use super::kinematics::Kinematics;
use crate::consts::{ENEMY_MAX_SPEED, ENEMY_SPEED_DECAY, ENEMY_START_SPEED, FRAME_INTERVAL_MS};

/// Size classes; the radius doubles as the sprite scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemySize {
    Small,
    Medium,
    Large,
}

impl EnemySize {
    pub fn radius(self) -> f32 {
        match self {
            EnemySize::Small => 20.0,
            EnemySize::Medium => 25.0,
            EnemySize::Large => 30.0,
        }
    }

    /// Near-uniform thirds over a 1..=99 roll
    fn from_roll(roll: u32) -> Self {
        if roll < 34 {
            EnemySize::Small
        } else if roll < 67 {
            EnemySize::Medium
        } else {
            EnemySize::Large
        }
    }
}

/// One swarm member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kin: Kinematics,
    pub size: EnemySize,
    /// Cruising ceiling the speed decays toward from above
    pub max_speed: f32,
    /// Set when this enemy catches the player; never cleared
    pub killer: bool,
    /// Sprite animation phase, wrapped by the draw pass
    pub frame: u32,
    /// Timestamp of the last frame advance (milliseconds)
    pub last_frame_ms: f64,
}

impl Enemy {
    /// Spawn into the 1-based `place` of the grid, aimed at a random point
    /// of the arena
    pub fn spawn(
        id: u32,
        place: usize,
        layout: &GridLayout,
        width: f32,
        height: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let size = EnemySize::from_roll(rng.random_range(1..=99));
        let radius = size.radius();

        let cell = grid::cell_column_major(place, layout.rows);
        let cell_w = width / layout.cols as f32;
        let cell_h = height / layout.rows as f32;
        let position = Vec2::new(
            cell.col as f32 * cell_w - cell_w / 2.0,
            cell.row as f32 * cell_h - cell_h / 2.0,
        );

        let target = random_target(width, height, radius, rng);
        let mut dx = target.x - position.x;
        if dx == 0.0 {
            dx = 1.0;
        }
        let mut dy = target.y - position.y;
        if dy == 0.0 {
            dy = 1.0;
        }
        let angle = dy.atan2(dx);

        Self {
            id,
            kin: Kinematics::with_heading(position, radius, angle, ENEMY_START_SPEED),
            size,
            max_speed: ENEMY_MAX_SPEED,
            killer: false,
            frame: 0,
            last_frame_ms: 0.0,
        }
    }

    /// One autonomous step: resync the cached heading and speed from
    /// velocity, shed excess speed above the ceiling, rebuild velocity,
    /// integrate
    pub fn advance(&mut self, dt: f32) {
        self.kin.sync_angle();
        self.kin.sync_speed();
        if self.kin.speed > self.max_speed {
            self.kin.speed -= (self.kin.speed - self.max_speed) * ENEMY_SPEED_DECAY;
        }
        self.kin.rebuild_velocity();
        self.kin.integrate(dt);
    }

    /// Step the sprite phase. Frozen before the session starts and after
    /// the enemy is neutralized.
    pub fn advance_frame(&mut self, timestamp_ms: f64, started: bool) {
        if !started || self.killer {
            return;
        }
        if timestamp_ms - self.last_frame_ms > FRAME_INTERVAL_MS {
            self.frame = self.frame.wrapping_add(1);
            self.last_frame_ms = timestamp_ms;
        }
    }
}

/// Random integer point in [radius, dimension] on each axis
fn random_target(width: f32, height: f32, radius: f32, rng: &mut impl Rng) -> Vec2 {
    let lo = radius as i32;
    let x_hi = (width as i32).max(lo);
    let y_hi = (height as i32).max(lo);
    Vec2::new(
        rng.random_range(lo..=x_hi) as f32,
        rng.random_range(lo..=y_hi) as f32,
    )
}
