//! Renderer capability and the per-frame draw pass
//!
//! The core never touches pixels. A frame is described as a sequence of
//! calls against the `Renderer` trait and the embedding surface decides
//! what they mean. `DrawList` records the calls for tests and headless
//! runs.

use glam::Vec2;

use crate::assets::{AssetCache, FrameRect, SpriteKey};
use crate::normalize_degrees;
use crate::sim::world::World;

/// Arena background fill
pub const BOARD_COLOR: &str = "#40ca98";
/// HUD text and idle zone labels
pub const TEXT_COLOR: &str = "#ffffff";
/// Zone labels while an enemy overlaps the zone
pub const ZONE_ALERT_COLOR: &str = "#0099b0";
/// Destination ring, heading dot, and killer marker
pub const MARKER_COLOR: &str = "red";

/// Drawing operations the embedding surface must provide. Rotations are in
/// degrees and sprites are centered on their position.
pub trait Renderer {
    fn fill_background(&mut self, color: &str);
    fn draw_sprite(&mut self, key: SpriteKey, src: FrameRect, center: Vec2, rotation_deg: f32, size: Vec2);
    fn draw_text(&mut self, text: &str, pos: Vec2, color: &str, px: f32);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: &str);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background {
        color: String,
    },
    Sprite {
        key: SpriteKey,
        src: FrameRect,
        center: Vec2,
        rotation_deg: f32,
        size: Vec2,
    },
    Text {
        text: String,
        pos: Vec2,
        color: String,
        px: f32,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
}

/// Renderer that records commands instead of drawing them
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for DrawList {
    fn fill_background(&mut self, color: &str) {
        self.commands.push(DrawCommand::Background {
            color: color.to_string(),
        });
    }

    fn draw_sprite(&mut self, key: SpriteKey, src: FrameRect, center: Vec2, rotation_deg: f32, size: Vec2) {
        self.commands.push(DrawCommand::Sprite {
            key,
            src,
            center,
            rotation_deg,
            size,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: &str, px: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color: color.to_string(),
            px,
        });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }
}

/// Emit one frame's draw calls: board, HUD, enemies, zones, player
pub fn draw_world(world: &World, assets: &AssetCache, out: &mut dyn Renderer) {
    out.fill_background(BOARD_COLOR);

    out.draw_text(&format!("FPS: {}", world.fps()), Vec2::new(10.0, 24.0), TEXT_COLOR, 16.0);
    out.draw_text(
        &format!("Score: {}", world.score as u64),
        Vec2::new(10.0, 44.0),
        TEXT_COLOR,
        16.0,
    );

    for enemy in &world.enemies {
        let key = SpriteKey::Enemy(enemy.size);
        if let Some(sheet) = assets.get(key) {
            out.draw_sprite(
                key,
                sheet.frame_rect(enemy.frame),
                enemy.kin.position,
                normalize_degrees(enemy.kin.angle.to_degrees()),
                Vec2::splat(enemy.kin.radius * 2.2),
            );
        }
        if enemy.killer {
            out.draw_circle(enemy.kin.position, enemy.kin.radius + 4.0, MARKER_COLOR);
        }
    }

    for zone in &world.zones {
        if let Some(sheet) = assets.get(SpriteKey::Headquarters) {
            out.draw_sprite(
                SpriteKey::Headquarters,
                sheet.frame_rect(0),
                zone.rect.center(),
                zone.rotation,
                Vec2::new(zone.rect.w, zone.rect.h),
            );
        }
        let label_color = if zone.is_colliding { ZONE_ALERT_COLOR } else { TEXT_COLOR };
        out.draw_text(
            &zone.place.to_string(),
            zone.rect.center() - Vec2::new(13.0, 12.0),
            label_color,
            18.0,
        );
    }

    let player = &world.player;
    out.draw_circle(player.destination, player.kin.radius - 4.0, MARKER_COLOR);
    if player.kin.speed > 0.0 {
        let heading_dot = player.destination + player.kin.velocity / player.kin.speed * 3.0;
        out.draw_circle(heading_dot, 1.0, MARKER_COLOR);
    }
    if let Some(sheet) = assets.get(SpriteKey::Player) {
        // player art faces up, so the heading needs a quarter turn
        out.draw_sprite(
            SpriteKey::Player,
            sheet.frame_rect(0),
            player.kin.position,
            normalize_degrees(player.kin.angle.to_degrees() + 90.0),
            Vec2::splat(player.kin.radius * 2.2),
        );
    }
}
