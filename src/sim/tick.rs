//! Per-frame session update
//!
//! The frame driver owns the loop and calls `tick` once per animation frame
//! with a monotonically increasing timestamp. Step order inside a tick is
//! load-bearing: enemies integrate and resolve before the zone flags
//! refresh, and the player only moves after every enemy has had its say.

use super::collision;
use super::world::World;

/// Advance the whole session by one frame
pub fn tick(world: &mut World, timestamp_ms: f64) {
    world.update_clock(timestamp_ms);
    world.update_session();

    step_enemies(world, timestamp_ms);
    refresh_zone_flags(world);
    step_player(world);
}

/// Enemy pass: autonomous motion, wall and zone bounces, the strict i < j
/// pair sweep, the terminal player check, and the sprite phase
fn step_enemies(world: &mut World, timestamp_ms: f64) {
    let dt = world.delta_time;
    let started = world.started;
    let (width, height) = (world.width, world.height);
    let count = world.enemies.len();

    for i in 0..count {
        {
            let enemy = &mut world.enemies[i];
            if started && !enemy.killer {
                enemy.advance(dt);
            }
            enemy.kin.bounce_off_walls(width, height);
            for zone in &world.zones {
                collision::resolve_circle_rect(&mut enemy.kin, &zone.rect);
            }
        }

        // Later pairs see velocity changes from earlier ones this tick
        for j in (i + 1)..count {
            let (head, tail) = world.enemies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            if collision::circles_overlap(&a.kin, &b.kin) {
                collision::resolve_circle_circle(&mut a.kin, &mut b.kin);
            }
        }

        if !world.game_over && collision::circles_overlap(&world.enemies[i].kin, &world.player.kin)
        {
            world.game_over = true;
            world.enemies[i].killer = true;
            log::info!(
                "game over: enemy {} caught {} after {:.1}s",
                world.enemies[i].id,
                world.player.name,
                world.elapsed
            );
        }

        world.enemies[i].advance_frame(timestamp_ms, started);
    }
}

/// A zone lights up while any enemy overlaps it, judged on post-update
/// positions
fn refresh_zone_flags(world: &mut World) {
    for zone in &mut world.zones {
        zone.is_colliding = world
            .enemies
            .iter()
            .any(|enemy| collision::circle_rect_overlap(&enemy.kin, &zone.rect));
    }
}

/// The player keeps steering until the session ends
fn step_player(world: &mut World) {
    if world.game_over {
        return;
    }
    let dt = world.delta_time;
    world.player.advance(dt);
    world.player.kin.bounce_off_walls(world.width, world.height);
}
