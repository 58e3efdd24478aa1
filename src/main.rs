//! Headless demo session
//!
//! Drives a full session at a fixed 60 Hz cadence with a scripted pointer
//! and prints a JSON summary. The real embedding owns the frame loop and
//! the pixels; this binary exercises the same entry points end to end.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;
use serde::Serialize;

use swarm_arena::assets::{AssetCache, SpriteKey, SpriteSheet};
use swarm_arena::render::{DrawList, draw_world};
use swarm_arena::sim::{EnemySize, World, WorldConfig, tick};

/// Simulated frame cadence (milliseconds)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Session length cap (seconds)
const MAX_SECONDS: f64 = 60.0;

#[derive(Serialize)]
struct SessionSummary {
    seed: u64,
    elapsed_secs: f64,
    score: u64,
    game_over: bool,
    enemies: usize,
    draw_commands: usize,
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(seed_from_clock);

    let config = WorldConfig {
        seed,
        ..WorldConfig::default()
    };
    let mut world = World::new(&config);
    let assets = demo_assets();

    log::info!(
        "session start: {}x{} arena, {} enemies, seed {}",
        config.width,
        config.height,
        config.enemy_count,
        seed
    );

    let center = Vec2::new(config.width / 2.0, config.height / 2.0);
    let orbit = config.width.min(config.height) * 0.3;

    let mut frame_buffer = DrawList::new();
    let total_frames = (MAX_SECONDS * 1000.0 / FRAME_MS) as u64;
    for frame in 0..total_frames {
        let timestamp_ms = frame as f64 * FRAME_MS;

        // scripted pointer: a slow circle around the arena center
        let phase = (timestamp_ms / 1000.0 * 0.6) as f32;
        world.set_player_destination(center + Vec2::from_angle(phase) * orbit);

        tick(&mut world, timestamp_ms);

        frame_buffer.clear();
        draw_world(&world, &assets, &mut frame_buffer);

        if world.is_game_over() {
            break;
        }
    }

    if !world.is_game_over() {
        log::info!("survived the full {MAX_SECONDS:.0}s session");
    }

    let summary = SessionSummary {
        seed,
        elapsed_secs: world.elapsed,
        score: world.score as u64,
        game_over: world.is_game_over(),
        enemies: world.enemies.len(),
        draw_commands: frame_buffer.commands.len(),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("summary serialization failed: {err}"),
    }
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Sheet geometry the demo pretends to have loaded
fn demo_assets() -> AssetCache {
    let mut cache = AssetCache::new();
    cache.insert(SpriteKey::Player, SpriteSheet::new(1, 1, 64.0, 64.0));
    cache.insert(SpriteKey::Enemy(EnemySize::Small), SpriteSheet::new(1, 4, 256.0, 64.0));
    cache.insert(SpriteKey::Enemy(EnemySize::Medium), SpriteSheet::new(1, 4, 256.0, 64.0));
    cache.insert(SpriteKey::Enemy(EnemySize::Large), SpriteSheet::new(1, 4, 256.0, 64.0));
    cache.insert(SpriteKey::Headquarters, SpriteSheet::new(1, 1, 128.0, 128.0));
    cache
}
