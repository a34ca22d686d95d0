//! Motion integration
//!
//! Acceleration is applied only for the frame in which thrust is held, so
//! position uses `s = v·t - ½·a·t²` with the already-updated velocity. With
//! zero acceleration this collapses to plain constant-velocity motion.

use glam::Vec2;

use super::state::SpaceObject;
use crate::{heading_to_vec, normalize_angle};

/// Advance one entity by `dt` under acceleration `accel`
#[inline]
pub fn integrate(obj: &mut SpaceObject, accel: Vec2, dt: f32) {
    // v = u + at
    obj.vel += accel * dt;
    // s = vt - ½at²
    obj.pos += obj.vel * dt - 0.5 * accel * dt * dt;
}

/// Ship acceleration for a heading (zero when not thrusting)
#[inline]
pub fn thrust_accel(heading: f32, thrust: f32, thrusting: bool) -> Vec2 {
    if thrusting {
        heading_to_vec(heading) * thrust
    } else {
        Vec2::ZERO
    }
}

/// Turn the ship directly; `turn` is -1 (left), 0, or +1 (right)
#[inline]
pub fn steer(ship: &mut SpaceObject, turn: f32, rate: f32, dt: f32) {
    if turn != 0.0 {
        ship.heading = normalize_angle(ship.heading + turn * rate * dt);
    }
}

/// Constant drift plus a cosmetic spin
#[inline]
pub fn drift(obj: &mut SpaceObject, spin: f32, dt: f32) {
    integrate(obj, Vec2::ZERO, dt);
    obj.heading += spin * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn ship() -> SpaceObject {
        SpaceObject::new(1, Vec2::new(480.0, 270.0), Vec2::ZERO, 0.0)
    }

    #[test]
    fn test_coasting_is_linear() {
        let mut obj = SpaceObject::new(16, Vec2::new(10.0, 10.0), Vec2::new(12.0, -6.0), 0.0);
        integrate(&mut obj, Vec2::ZERO, 0.5);
        assert_eq!(obj.pos, Vec2::new(16.0, 7.0));
        assert_eq!(obj.vel, Vec2::new(12.0, -6.0));
    }

    #[test]
    fn test_thrust_from_rest() {
        // From rest, one thrusted frame moves ½at²
        let mut s = ship();
        let accel = thrust_accel(s.heading, 100.0, true);
        integrate(&mut s, accel, 0.1);
        assert!(s.vel.x.abs() < 1e-5);
        assert!((s.vel.y + 10.0).abs() < 1e-4);
        assert!((s.pos.y - (270.0 - 0.5)).abs() < 1e-4);
    }

    #[test]
    fn test_thrust_follows_heading() {
        let accel = thrust_accel(FRAC_PI_2, 100.0, true);
        assert!((accel.x - 100.0).abs() < 1e-4);
        assert!(accel.y.abs() < 1e-4);
        assert_eq!(thrust_accel(FRAC_PI_2, 100.0, false), Vec2::ZERO);
    }

    #[test]
    fn test_steer_left_and_right() {
        let mut s = ship();
        steer(&mut s, 1.0, 5.0, 0.1);
        assert!((s.heading - 0.5).abs() < 1e-6);
        steer(&mut s, -1.0, 5.0, 0.2);
        assert!((s.heading + 0.5).abs() < 1e-6);
        steer(&mut s, 0.0, 5.0, 1.0);
        assert!((s.heading + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_drift_spins_heading() {
        let mut a = SpaceObject::new(16, Vec2::ZERO, Vec2::new(4.0, 0.0), 0.0);
        drift(&mut a, 0.5, 2.0);
        assert_eq!(a.pos, Vec2::new(8.0, 0.0));
        assert!((a.heading - 1.0).abs() < 1e-6);
    }
}
