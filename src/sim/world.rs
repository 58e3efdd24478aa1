//! World state and session bootstrap
//!
//! Everything a snapshot needs for deterministic replay lives here. The
//! entity collections are built once at construction and never change size
//! afterwards; randomness is spent entirely during spawn.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::grid::GridLayout;
use super::player::Player;
use super::zone::{Headquarters, Rect};
use crate::consts::{DEFAULT_ENEMY_COUNT, WARMUP_DELAY};

/// Zone centers as arena fractions, plus display rotation in degrees
const ZONE_SPOTS: [(f32, f32, f32); 3] = [
    (0.22, 0.30, -15.0),
    (0.75, 0.22, 10.0),
    (0.50, 0.70, 0.0),
];
/// Zone side as a fraction of the short arena dimension
const ZONE_SIDE: f32 = 0.18;

/// Per-session bootstrap values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub player_name: String,
    pub enemy_count: usize,
    /// Seed for spawn-time randomness; same seed, same board
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 900.0,
            player_name: "player".to_string(),
            enemy_count: DEFAULT_ENEMY_COUNT,
            seed: 0,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub seed: u64,
    pub enemies: Vec<Enemy>,
    pub zones: Vec<Headquarters>,
    pub player: Player,
    /// Timestamp of the previous tick (milliseconds)
    pub last_timestamp_ms: f64,
    /// Seconds covered by the current tick
    pub delta_time: f32,
    /// Accumulated session seconds
    pub elapsed: f64,
    /// Survival seconds accrued while the session is live
    pub score: f64,
    pub(crate) started: bool,
    pub(crate) game_over: bool,
}

impl World {
    pub fn new(config: &WorldConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let layout = GridLayout::for_count(config.enemy_count);

        let player = Player::new(1, config.player_name.clone(), config.width, config.height);
        let mut next_id = 2;

        let mut enemies = Vec::with_capacity(config.enemy_count);
        for place in 1..=config.enemy_count {
            enemies.push(Enemy::spawn(
                next_id,
                place,
                &layout,
                config.width,
                config.height,
                &mut rng,
            ));
            next_id += 1;
        }

        let side = config.width.min(config.height) * ZONE_SIDE;
        let mut zones = Vec::with_capacity(ZONE_SPOTS.len());
        for (i, &(fx, fy, rotation)) in ZONE_SPOTS.iter().enumerate() {
            let center = Vec2::new(config.width * fx, config.height * fy);
            let rect = Rect::new(center.x - side / 2.0, center.y - side / 2.0, side, side);
            zones.push(Headquarters::new(next_id, rect, rotation, i as u32 + 1));
            next_id += 1;
        }

        log::debug!(
            "world ready: {} enemies in a {}x{} grid, {} zones, seed {}",
            enemies.len(),
            layout.rows,
            layout.cols,
            zones.len(),
            config.seed
        );

        Self {
            width: config.width,
            height: config.height,
            seed: config.seed,
            enemies,
            zones,
            player,
            last_timestamp_ms: 0.0,
            delta_time: 0.0,
            elapsed: 0.0,
            score: 0.0,
            started: false,
            game_over: false,
        }
    }

    /// Point the player somewhere new; called by the input collaborator
    pub fn set_player_destination(&mut self, destination: Vec2) {
        self.player.destination = destination;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Frames per second implied by the last delta
    pub fn fps(&self) -> u32 {
        if self.delta_time > 0.0 {
            (1.0 / self.delta_time).round() as u32
        } else {
            0
        }
    }

    /// Advance the session clock from a new frame timestamp
    pub(crate) fn update_clock(&mut self, timestamp_ms: f64) {
        self.delta_time = ((timestamp_ms - self.last_timestamp_ms) / 1000.0) as f32;
        self.last_timestamp_ms = timestamp_ms;
        self.elapsed += f64::from(self.delta_time);
    }

    /// One-way started transition after the warm-up delay, plus survival
    /// score accrual while the session is live
    pub(crate) fn update_session(&mut self) {
        if !self.started && self.elapsed > WARMUP_DELAY {
            self.started = true;
            log::debug!("session started after {:.2}s warm-up", self.elapsed);
        }
        if self.started && !self.game_over {
            self.score += f64::from(self.delta_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::tick;
    use std::collections::HashSet;

    fn config(enemy_count: usize, seed: u64) -> WorldConfig {
        WorldConfig {
            enemy_count,
            seed,
            ..WorldConfig::default()
        }
    }

    #[test]
    fn test_same_seed_builds_the_same_board() {
        let a = World::new(&config(12, 7));
        let b = World::new(&config(12, 7));
        for (x, y) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(x.size, y.size);
            assert_eq!(x.kin.position, y.kin.position);
            assert_eq!(x.kin.velocity, y.kin.velocity);
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = World::new(&config(12, 1));
        let b = World::new(&config(12, 2));
        let same = a
            .enemies
            .iter()
            .zip(&b.enemies)
            .all(|(x, y)| x.kin.velocity == y.kin.velocity);
        assert!(!same);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let world = World::new(&config(10, 3));
        let mut ids = HashSet::new();
        ids.insert(world.player.id);
        for enemy in &world.enemies {
            ids.insert(enemy.id);
        }
        for zone in &world.zones {
            ids.insert(zone.id);
        }
        assert_eq!(ids.len(), 1 + world.enemies.len() + world.zones.len());
    }

    #[test]
    fn test_zones_sit_inside_the_arena() {
        let world = World::new(&config(12, 0));
        assert_eq!(world.zones.len(), 3);
        for (i, zone) in world.zones.iter().enumerate() {
            assert_eq!(zone.place, i as u32 + 1);
            assert!(!zone.is_colliding);
            assert!(zone.rect.x >= 0.0 && zone.rect.y >= 0.0);
            assert!(zone.rect.x + zone.rect.w <= world.width);
            assert!(zone.rect.y + zone.rect.h <= world.height);
        }
    }

    #[test]
    fn test_zero_enemies_still_builds() {
        let mut world = World::new(&config(0, 0));
        assert!(world.enemies.is_empty());
        tick(&mut world, 16.0);
        assert!(!world.is_game_over());
    }

    #[test]
    fn test_fps_follows_the_last_delta() {
        let mut world = World::new(&config(0, 0));
        assert_eq!(world.fps(), 0);
        world.update_clock(20.0);
        assert_eq!(world.fps(), 50);
    }

    #[test]
    fn test_snapshot_resumes_identically() {
        let mut world = World::new(&config(12, 7));
        tick(&mut world, 0.0);
        tick(&mut world, 1100.0);
        tick(&mut world, 1116.0);

        let json = serde_json::to_string(&world).expect("world serializes");
        let mut restored: World = serde_json::from_str(&json).expect("world deserializes");

        for ts in [1133.0, 1150.0, 1167.0] {
            tick(&mut world, ts);
            tick(&mut restored, ts);
        }
        for (a, b) in world.enemies.iter().zip(&restored.enemies) {
            assert_eq!(a.kin.position, b.kin.position);
            assert_eq!(a.kin.velocity, b.kin.velocity);
        }
        assert_eq!(world.player.kin.position, restored.player.kin.position);
        assert_eq!(world.score, restored.score);
    }
}
