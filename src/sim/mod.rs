//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG, consumed at spawn time only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod grid;
pub mod kinematics;
pub mod player;
pub mod tick;
pub mod world;
pub mod zone;

pub use collision::{circle_rect_overlap, circles_overlap, resolve_circle_circle, resolve_circle_rect};
pub use enemy::{Enemy, EnemySize};
pub use grid::{Cell, GridLayout};
pub use kinematics::Kinematics;
pub use player::Player;
pub use tick::tick;
pub use world::{World, WorldConfig};
pub use zone::{Headquarters, Rect};
