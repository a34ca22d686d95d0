//! Circle-overlap collision detection
//!
//! Asteroids are treated as perfect circles whose radius is their tier times
//! a per-use scale. The detector holds no state and never mutates.

use glam::Vec2;

use super::state::SpaceObject;
use crate::tuning::Tuning;

/// True if `point` lies strictly inside the circle at `center`
#[inline]
pub fn point_in_circle(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance_squared(point) < radius * radius
}

/// Death check: ship position against an asteroid's ship-scaled radius
#[inline]
pub fn ship_hits_asteroid(ship: &SpaceObject, asteroid: &SpaceObject, tuning: &Tuning) -> bool {
    asteroid.is_alive()
        && point_in_circle(asteroid.pos, tuning.ship_hit_radius(asteroid.tier), ship.pos)
}

/// Damage check: bullet position against an asteroid's bullet-scaled radius
#[inline]
pub fn bullet_hits_asteroid(bullet: &SpaceObject, asteroid: &SpaceObject, tuning: &Tuning) -> bool {
    bullet.is_alive()
        && asteroid.is_alive()
        && point_in_circle(asteroid.pos, tuning.bullet_hit_radius(asteroid.tier), bullet.pos)
}
