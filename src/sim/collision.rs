//! Collision detection and response
//!
//! Two shapes matter here: moving circles against each other, and circles
//! against the stationary headquarters rects. Circle pairs exchange a
//! mass-weighted impulse along the collision normal; rect hits push the
//! circle back out and mirror its heading about the contact bearing.

use glam::Vec2;

use super::kinematics::Kinematics;
use super::zone::Rect;
use crate::{angle_to, project_point};

/// True when two circles touch or overlap
pub fn circles_overlap(a: &Kinematics, b: &Kinematics) -> bool {
    a.position.distance(b.position) <= a.radius + b.radius
}

/// Elastic impulse exchange between two overlapping circles.
///
/// The normal points from `a` to `b`, so the relative velocity projected on
/// it is positive while the pair is closing. Separating pairs are left
/// alone, as are coincident centers (no usable normal).
pub fn resolve_circle_circle(a: &mut Kinematics, b: &mut Kinematics) {
    let delta = b.position - a.position;
    let distance = delta.length();
    if distance <= f32::EPSILON {
        return;
    }
    let normal = delta / distance;

    let closing = (a.velocity - b.velocity).dot(normal);
    if closing < 0.0 {
        return;
    }

    let impulse = 2.0 * closing / (a.mass + b.mass);
    a.velocity -= impulse * b.mass * normal;
    b.velocity += impulse * a.mass * normal;
}

/// True when the circle touches or overlaps the rect
pub fn circle_rect_overlap(kin: &Kinematics, rect: &Rect) -> bool {
    kin.position.distance(rect.nearest_point(kin.position)) <= kin.radius
}

/// Push an overlapping circle back out of the rect and mirror its heading
/// about the contact bearing. Velocity is rebuilt from the cached speed,
/// which may lag behind a wall bounce from earlier in the same tick.
pub fn resolve_circle_rect(kin: &mut Kinematics, rect: &Rect) {
    if !circle_rect_overlap(kin, rect) {
        return;
    }

    let nearest = rect.nearest_point(kin.position);
    let distance = kin.position.distance(nearest);
    let bearing = angle_to(kin.position, nearest);

    let penetration = distance - kin.radius;
    if penetration < 0.0 {
        kin.position = project_point(kin.position, penetration, bearing);
    }

    let mirrored = 2.0 * bearing - kin.angle;
    kin.velocity = Vec2::new(-mirrored.cos(), -mirrored.sin()) * kin.speed;
}
