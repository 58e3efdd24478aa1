//! Shared motion state for circular entities
//!
//! Player and enemies move the same way: a position/velocity pair plus a
//! cached heading and scalar speed derived from the velocity. The caches can
//! lag for the rest of a tick after a collision handler rewrites velocity;
//! the next autonomous update resyncs them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_STEP, WALL_RESTITUTION};

/// Mass from radius via a volumetric formula, so bigger circles absorb more
/// of a collision impulse
#[inline]
pub fn mass_for_radius(radius: f32) -> f32 {
    (4.0 / 3.0) * std::f32::consts::PI * (radius / 10.0).powi(3)
}

/// Motion state shared by every circular entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading in radians, cached from velocity
    pub angle: f32,
    /// Scalar speed, cached from velocity
    pub speed: f32,
    pub radius: f32,
    pub mass: f32,
}

impl Kinematics {
    /// At rest at `position`
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            angle: 0.0,
            speed: 0.0,
            radius,
            mass: mass_for_radius(radius),
        }
    }

    /// Moving at `speed` along `angle`
    pub fn with_heading(position: Vec2, radius: f32, angle: f32, speed: f32) -> Self {
        let mut kin = Self::new(position, radius);
        kin.angle = angle;
        kin.speed = speed;
        kin.rebuild_velocity();
        kin
    }

    /// Re-derive the cached heading from velocity
    pub fn sync_angle(&mut self) {
        self.angle = self.velocity.y.atan2(self.velocity.x);
    }

    /// Re-derive the cached speed from velocity
    pub fn sync_speed(&mut self) {
        self.speed = self.velocity.length();
    }

    /// Rebuild velocity from the cached heading and speed
    pub fn rebuild_velocity(&mut self) {
        self.velocity = Vec2::new(self.angle.cos(), self.angle.sin()) * self.speed;
    }

    /// Advance position by one frame, capping the step at `MAX_FRAME_STEP`
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt.min(MAX_FRAME_STEP);
    }

    /// Clamp the body back into the arena and bounce the offending velocity
    /// component, amplified by the wall restitution
    pub fn bounce_off_walls(&mut self, width: f32, height: f32) {
        if self.position.x < self.radius {
            self.velocity.x = self.velocity.x.abs() * WALL_RESTITUTION;
            self.position.x = self.radius;
        } else if self.position.x > width - self.radius {
            self.velocity.x = -self.velocity.x.abs() * WALL_RESTITUTION;
            self.position.x = width - self.radius;
        }

        if self.position.y < self.radius {
            self.velocity.y = self.velocity.y.abs() * WALL_RESTITUTION;
            self.position.y = self.radius;
        } else if self.position.y > height - self.radius {
            self.velocity.y = -self.velocity.y.abs() * WALL_RESTITUTION;
            self.position.y = height - self.radius;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mass_grows_with_radius() {
        let small = mass_for_radius(20.0);
        let medium = mass_for_radius(25.0);
        let large = mass_for_radius(30.0);
        assert!((small - 33.5103).abs() < 1e-3);
        assert!(small < medium && medium < large);
    }

    #[test]
    fn test_with_heading_builds_matching_velocity() {
        let kin = Kinematics::with_heading(Vec2::ZERO, 10.0, std::f32::consts::FRAC_PI_2, 50.0);
        assert!(kin.velocity.x.abs() < 1e-4);
        assert!((kin.velocity.y - 50.0).abs() < 1e-4);
        assert_eq!(kin.speed, 50.0);
    }

    #[test]
    fn test_sync_round_trips_through_velocity() {
        let mut kin = Kinematics::with_heading(Vec2::ZERO, 10.0, 1.1, 80.0);
        kin.angle = 0.0;
        kin.speed = 0.0;
        kin.sync_angle();
        kin.sync_speed();
        assert!((kin.angle - 1.1).abs() < 1e-5);
        assert!((kin.speed - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_integrate_caps_long_frames() {
        let mut kin = Kinematics::new(Vec2::ZERO, 10.0);
        kin.velocity = Vec2::new(100.0, -40.0);
        kin.integrate(5.0);
        assert!((kin.position.x - 10.0).abs() < 1e-4);
        assert!((kin.position.y + 4.0).abs() < 1e-4);

        kin.integrate(0.05);
        assert!((kin.position.x - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_walls_clamp_and_amplify() {
        let mut kin = Kinematics::new(Vec2::new(5.0, 300.0), 10.0);
        kin.velocity = Vec2::new(-50.0, 0.0);
        kin.bounce_off_walls(600.0, 600.0);
        assert_eq!(kin.position.x, 10.0);
        assert!((kin.velocity.x - 60.0).abs() < 1e-3);

        let mut kin = Kinematics::new(Vec2::new(595.0, 300.0), 10.0);
        kin.velocity = Vec2::new(80.0, 0.0);
        kin.bounce_off_walls(600.0, 600.0);
        assert_eq!(kin.position.x, 590.0);
        assert!((kin.velocity.x + 96.0).abs() < 1e-3);
    }

    #[test]
    fn test_walls_handle_both_axes_in_one_call() {
        let mut kin = Kinematics::new(Vec2::new(5.0, 598.0), 10.0);
        kin.velocity = Vec2::new(-20.0, 30.0);
        kin.bounce_off_walls(600.0, 600.0);
        assert_eq!(kin.position, Vec2::new(10.0, 590.0));
        assert!(kin.velocity.x > 0.0 && kin.velocity.y < 0.0);
    }

    proptest! {
        #[test]
        fn prop_walls_always_land_inside_the_arena(
            x in -100.0f32..1100.0,
            y in -100.0f32..1100.0,
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            radius in 5.0f32..30.0,
        ) {
            let mut kin = Kinematics::new(Vec2::new(x, y), radius);
            kin.velocity = Vec2::new(vx, vy);
            kin.bounce_off_walls(1000.0, 1000.0);

            prop_assert!(kin.position.x >= radius && kin.position.x <= 1000.0 - radius);
            prop_assert!(kin.position.y >= radius && kin.position.y <= 1000.0 - radius);

            if x < radius {
                prop_assert_eq!(kin.position.x, radius);
                prop_assert!(kin.velocity.x >= 0.0);
            } else if x > 1000.0 - radius {
                prop_assert_eq!(kin.position.x, 1000.0 - radius);
                prop_assert!(kin.velocity.x <= 0.0);
            }
        }
    }
}
