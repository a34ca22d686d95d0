//! Game state and core simulation types
//!
//! The [`World`] owns every piece of mutable simulation state. Nothing is
//! global: the orchestrator holds one world and passes it by reference into
//! each per-frame operation.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::torus::Field;
use crate::tuning::Tuning;

/// The ship never uses its tier for collisions; it only has to be live
pub const SHIP_TIER: u32 = 1;

/// Whether an entity takes part in the rest of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Alive,
    /// Ignored by later collision checks, purged at end of frame
    PendingRemoval,
}

/// Ship, asteroid, or bullet. Role comes from which collection holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceObject {
    /// Collision tier for ship/asteroids, fixed small radius for bullets
    pub tier: u32,
    pub pos: Vec2,
    /// Units per second
    pub vel: Vec2,
    /// Radians; 0 faces up the screen
    pub heading: f32,
    pub status: Status,
}

impl SpaceObject {
    pub fn new(tier: u32, pos: Vec2, vel: Vec2, heading: f32) -> Self {
        Self {
            tier,
            pos,
            vel,
            heading,
            status: Status::Alive,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.status == Status::Alive
    }

    /// Flag for removal at the end of the frame
    #[inline]
    pub fn mark_dead(&mut self) {
        self.status = Status::PendingRemoval;
    }
}

/// Things that happened during a frame, for hosts (sound, HUD) to react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// World was reset (new run)
    Reset,
    BulletFired { pos: Vec2 },
    /// An asteroid was shot; `split` is true if it left two children
    AsteroidDestroyed { tier: u32, pos: Vec2, split: bool },
    /// Every asteroid destroyed; `wave` counts clears this run
    WaveCleared { wave: u32, bonus: u64 },
    /// Ship overlapped an asteroid; the run resets next frame
    ShipDestroyed { score: u64 },
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct World {
    /// Wrap bounds (host field dimensions)
    pub field: Field,
    pub tuning: Tuning,
    pub ship: SpaceObject,
    pub asteroids: Vec<SpaceObject>,
    pub bullets: Vec<SpaceObject>,
    pub score: u64,
    /// Waves cleared this run
    pub wave: u32,
    /// Set on collision with an asteroid; consumed at the start of next tick
    pub ship_destroyed: bool,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    /// Fragments created during the collision scan, merged after it
    pub(crate) staged: Vec<SpaceObject>,
}

impl World {
    /// Create a world and seed the first two asteroids
    pub fn new(field: Field, tuning: Tuning, seed: u64) -> Self {
        let mut world = Self {
            field,
            tuning,
            ship: SpaceObject::new(SHIP_TIER, Vec2::ZERO, Vec2::ZERO, 0.0),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            wave: 0,
            ship_destroyed: false,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            staged: Vec::new(),
        };
        world.reset();
        world
    }

    /// Start a fresh run: recenter ship, zero score, two starting asteroids
    pub fn reset(&mut self) {
        let tier = self.tuning.asteroid_start_tier;
        self.ship = SpaceObject::new(SHIP_TIER, self.field.center(), Vec2::ZERO, 0.0);

        self.bullets.clear();
        self.asteroids.clear();
        self.staged.clear();

        // Both start on the same side, above and below the ship
        let side = if self.rng.random_bool(0.5) {
            0.0
        } else {
            3.0 * self.field.width / 4.0
        };
        let (w, h) = (self.field.width, self.field.height);
        self.asteroids.push(SpaceObject::new(
            tier,
            Vec2::new(side, h / 4.0),
            Vec2::new(12.0, -6.0),
            0.0,
        ));
        self.asteroids.push(SpaceObject::new(
            tier,
            Vec2::new(side, h / 4.0 * 3.0),
            Vec2::new(-8.0, 3.0),
            0.0,
        ));

        self.score = 0;
        self.wave = 0;
        self.ship_destroyed = false;
        self.events.push(GameEvent::Reset);
        log::info!("World reset ({}x{} field)", w, h);
    }

    /// Fire one bullet from the ship along its heading
    pub fn fire_bullet(&mut self) {
        let tuning = &self.tuning;
        let dir = crate::heading_to_vec(self.ship.heading);
        let bullet = SpaceObject::new(
            tuning.bullet_tier,
            self.ship.pos,
            dir * tuning.bullet_speed,
            tuning.bullet_start_heading,
        );
        self.events.push(GameEvent::BulletFired { pos: bullet.pos });
        self.bullets.push(bullet);
    }
}

/// Uniform angle in `[0, τ)`, always a valid trig argument
#[inline]
pub fn random_angle(rng: &mut impl Rng) -> f32 {
    rng.random_range(0.0..std::f32::consts::TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::new(Field::new(960.0, 540.0), Tuning::default(), 12345)
    }

    #[test]
    fn test_reset_layout() {
        let world = world();
        assert_eq!(world.ship.pos, Vec2::new(480.0, 270.0));
        assert_eq!(world.ship.vel, Vec2::ZERO);
        assert_eq!(world.ship.heading, 0.0);
        assert_eq!(world.score, 0);
        assert!(world.bullets.is_empty());
        assert_eq!(world.asteroids.len(), 2);
        assert!(world.asteroids.iter().all(|a| a.tier == 16 && a.is_alive()));
        assert_eq!(world.events, vec![GameEvent::Reset]);
    }

    #[test]
    fn test_starting_asteroids_clear_of_ship() {
        for seed in 0..32 {
            let world = World::new(Field::new(960.0, 540.0), Tuning::default(), seed);
            for a in &world.asteroids {
                let radius = world.tuning.ship_hit_radius(a.tier);
                assert!(a.pos.distance(world.ship.pos) >= radius);
            }
        }
    }

    #[test]
    fn test_fire_bullet_straight_up() {
        let mut world = world();
        world.fire_bullet();
        assert_eq!(world.bullets.len(), 1);
        let bullet = &world.bullets[0];
        assert_eq!(bullet.pos, world.ship.pos);
        assert!(bullet.vel.x.abs() < 1e-4);
        assert!((bullet.vel.y + 750.0).abs() < 1e-4);
        assert_eq!(bullet.tier, 4);
    }

    #[test]
    fn test_mark_dead() {
        let mut obj = SpaceObject::new(8, Vec2::ZERO, Vec2::ZERO, 0.0);
        assert!(obj.is_alive());
        obj.mark_dead();
        assert!(!obj.is_alive());
        assert_eq!(obj.status, Status::PendingRemoval);
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = world();
        let b = world();
        assert_eq!(a.asteroids, b.asteroids);
    }

    #[test]
    fn test_random_angle_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..1000 {
            let angle = random_angle(&mut rng);
            assert!((0.0..std::f32::consts::TAU).contains(&angle));
        }
    }
}
