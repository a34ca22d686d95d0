//! Per-frame playing routine
//!
//! Advances the world by one host frame. Stage order matters: motion and
//! wrapping first, then collision detection, then fragmentation and purge.
//! Rendering happens afterwards, outside the simulation.

use super::collision::ship_hits_asteroid;
use super::lifecycle;
use super::motion::{drift, integrate, steer, thrust_accel};
use super::state::{GameEvent, World};

/// Player commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Turn counter-clockwise (held)
    pub turn_left: bool,
    /// Turn clockwise (held)
    pub turn_right: bool,
    /// Accelerate along heading (held)
    pub thrust: bool,
    /// Fire one bullet (pressed this frame)
    pub fire: bool,
}

impl TickInput {
    /// Combined turn axis: -1 left, +1 right, 0 when both or neither are held
    pub fn turn(&self) -> f32 {
        match (self.turn_left, self.turn_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Advance the world by `dt` seconds
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    world.events.clear();

    // Death last frame: start over before simulating this one
    if world.ship_destroyed {
        world.reset();
    }

    // Steer and thrust
    steer(&mut world.ship, input.turn(), world.tuning.ship_turn_rate, dt);
    let accel = thrust_accel(world.ship.heading, world.tuning.ship_thrust, input.thrust);
    integrate(&mut world.ship, accel, dt);
    world.ship.pos = world.field.wrap(world.ship.pos);

    check_ship_collision(world);

    if input.fire {
        world.fire_bullet();
    }

    // Asteroids drift and wrap
    let spin = world.tuning.asteroid_spin;
    for asteroid in &mut world.asteroids {
        drift(asteroid, spin, dt);
        asteroid.pos = world.field.wrap(asteroid.pos);
    }

    // Bullets fly straight and are never wrapped
    let spin = world.tuning.bullet_spin;
    for bullet in &mut world.bullets {
        drift(bullet, spin, dt);
    }

    lifecycle::resolve(world);
}

/// Flag the run as over if the ship overlaps any asteroid
pub fn check_ship_collision(world: &mut World) -> bool {
    if world.ship_destroyed {
        return true;
    }

    let hit = world
        .asteroids
        .iter()
        .any(|a| ship_hits_asteroid(&world.ship, a, &world.tuning));
    if hit {
        world.ship_destroyed = true;
        log::info!("💥 Ship destroyed, final score {}", world.score);
        world.events.push(GameEvent::ShipDestroyed { score: world.score });
    }
    hit
}
