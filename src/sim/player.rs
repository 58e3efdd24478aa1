//! The player-controlled circle
//!
//! Steering is goal-seeking: the heading always points at the destination
//! the input collaborator last supplied, and motion stops inside a small
//! arrival dead-zone so the body does not jitter on top of the pointer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::kinematics::Kinematics;
use crate::angle_to;
use crate::consts::{ARRIVE_RADIUS, PLAYER_RADIUS, PLAYER_SPEED};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub kin: Kinematics,
    /// Arena point the input collaborator last pointed at
    pub destination: Vec2,
    /// Straight-line distance to the destination, refreshed each step
    pub distance_to_destination: f32,
}

impl Player {
    /// Starts at the arena center with the destination on top of itself
    pub fn new(id: u32, name: impl Into<String>, width: f32, height: f32) -> Self {
        let center = Vec2::new(width / 2.0, height / 2.0);
        let mut kin = Kinematics::new(center, PLAYER_RADIUS);
        kin.speed = PLAYER_SPEED;
        Self {
            id,
            name: name.into(),
            kin,
            destination: center,
            distance_to_destination: 0.0,
        }
    }

    /// One steering step toward the destination. Position only changes
    /// while outside the arrival dead-zone.
    pub fn advance(&mut self, dt: f32) {
        self.kin.angle = angle_to(self.kin.position, self.destination);
        self.distance_to_destination = self.kin.position.distance(self.destination);
        self.kin.rebuild_velocity();
        if self.distance_to_destination > ARRIVE_RADIUS {
            self.kin.integrate(dt);
        }
    }
}
