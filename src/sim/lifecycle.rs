//! Fragmentation and population management
//!
//! Turns bullet hits into population changes without disturbing the scan
//! that found them. Children are staged while bullets and asteroids are
//! being compared, merged afterwards, and everything marked dead is purged
//! at the end of the frame. If that empties the field a new wave spawns.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use rand::Rng;

use super::collision::bullet_hits_asteroid;
use super::state::{GameEvent, SpaceObject, World, random_angle};
use super::torus::Field;
use crate::heading_to_vec;
use crate::tuning::Tuning;

/// Run every end-of-frame population step in order
pub fn resolve(world: &mut World) {
    apply_bullet_hits(world);
    merge_staged(world);
    purge(world);
    spawn_wave_if_cleared(world);
}

/// Compare every live bullet against every live asteroid.
///
/// A hit kills the bullet and the asteroid, awards the kill reward and, if
/// the asteroid is big enough, stages two children. A bullet stops at its
/// first hit. Returns the number of asteroids destroyed.
pub fn apply_bullet_hits(world: &mut World) -> usize {
    let World {
        field,
        tuning,
        asteroids,
        bullets,
        staged,
        events,
        score,
        rng,
        ..
    } = world;

    let mut kills = 0;
    for bullet in bullets.iter_mut() {
        for asteroid in asteroids.iter_mut() {
            if !bullet_hits_asteroid(bullet, asteroid, tuning) {
                continue;
            }

            bullet.mark_dead();
            asteroid.mark_dead();

            let split = tuning.fragments(asteroid.tier);
            if split {
                stage_fragments(asteroid, tuning, field, rng, staged);
            }

            *score += tuning.kill_reward;
            kills += 1;
            log::debug!(
                "Asteroid tier {} destroyed at ({:.0}, {:.0}), split={}",
                asteroid.tier,
                asteroid.pos.x,
                asteroid.pos.y,
                split
            );
            events.push(GameEvent::AsteroidDestroyed {
                tier: asteroid.tier,
                pos: asteroid.pos,
                split,
            });
            break;
        }
    }
    kills
}

/// Push the two children of `parent` onto `out`.
///
/// Callers must have checked `tuning.fragments(parent.tier)`; with a
/// threshold of at least 1 the halved tier is never zero.
pub fn stage_fragments(
    parent: &SpaceObject,
    tuning: &Tuning,
    field: &Field,
    rng: &mut impl Rng,
    out: &mut Vec<SpaceObject>,
) {
    debug_assert!(tuning.fragments(parent.tier));

    let tier = parent.tier / 2;
    let offset = Vec2::splat(parent.tier as f32 * tuning.fragment_offset);

    for pos in [parent.pos + offset, parent.pos - offset] {
        let angle = random_angle(rng);
        let vel = Vec2::new(angle.sin(), angle.cos()) * tuning.fragment_speed;
        let heading = random_angle(rng);
        out.push(SpaceObject::new(tier, field.wrap(pos), vel, heading));
    }
}

/// Append staged children now that the collision scan is over
pub fn merge_staged(world: &mut World) {
    world.asteroids.append(&mut world.staged);
}

/// Drop dead asteroids and dead or escaped bullets
pub fn purge(world: &mut World) {
    world.asteroids.retain(SpaceObject::is_alive);

    let field = world.field;
    let margin = world.tuning.bullet_exit_margin;
    world
        .bullets
        .retain(|b| b.is_alive() && field.contains_with_margin(b.pos, margin));
}

/// Award the wave bonus and spawn two fresh asteroids beside the ship.
///
/// New asteroids appear `wave_spawn_distance` away, perpendicular to the
/// ship's heading on either side, so they never spawn on top of it as long
/// as the tuning passed [`Tuning::validate_field`] for this field.
/// Returns true if a wave was cleared.
pub fn spawn_wave_if_cleared(world: &mut World) -> bool {
    if !world.asteroids.is_empty() {
        return false;
    }

    let tuning = &world.tuning;
    world.score += tuning.wave_bonus;
    world.wave += 1;
    world.bullets.clear();

    let ship = &world.ship;
    let tier = tuning.asteroid_start_tier;
    let facing = heading_to_vec(ship.heading) * tuning.wave_spawn_speed;
    // Second spawn travels against the ship's facing, mirroring the first
    for (side, vel) in [(-FRAC_PI_2, facing), (FRAC_PI_2, -facing)] {
        let pos = ship.pos + heading_to_vec(ship.heading + side) * tuning.wave_spawn_distance;
        world
            .asteroids
            .push(SpaceObject::new(tier, world.field.wrap(pos), vel, 0.0));
    }

    log::info!("🌊 Wave {} cleared, score {}", world.wave, world.score);
    world.events.push(GameEvent::WaveCleared {
        wave: world.wave,
        bonus: world.tuning.wave_bonus,
    });
    true
}
