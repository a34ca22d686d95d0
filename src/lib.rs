//! Asteroids - a wrap-around arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, wrapping, collisions, fragmentation)
//! - `renderer`: Wireframe transform pipeline and the host drawing seam
//! - `input`: Host keyboard seam (pressed vs held)
//! - `app`: Menu / playing / paused state machine
//! - `tuning`: Data-driven game balance
//! - `settings`: Window and debug preferences

pub mod app;
pub mod error;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use app::{Game, Screen};
pub use error::ConfigError;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default play-field dimensions (field units == pixels at scale 1)
    pub const FIELD_WIDTH: f32 = 960.0;
    pub const FIELD_HEIGHT: f32 = 540.0;
    pub const PIXEL_SCALE: u32 = 1;

    /// Ship steering and thrust
    pub const SHIP_TURN_RATE: f32 = 5.0; // radians per second
    pub const SHIP_THRUST: f32 = 100.0; // units/s²

    /// Bullets
    pub const BULLET_SPEED: f32 = 750.0;
    pub const BULLET_TIER: u32 = 4;
    pub const BULLET_SPIN: f32 = -1.0;
    pub const BULLET_START_HEADING: f32 = 100.0;
    /// Bullets closer than this to any edge are purged
    pub const BULLET_EXIT_MARGIN: f32 = 1.0;

    /// Asteroids
    pub const ASTEROID_SPIN: f32 = 0.5;
    pub const ASTEROID_START_TIER: u32 = 16;
    /// Asteroids split only while their tier is strictly above this
    pub const FRAGMENT_THRESHOLD: u32 = 4;
    pub const FRAGMENT_SPEED: f32 = 20.0;
    /// Children spawn at parent ± tier * this, on both axes
    pub const FRAGMENT_OFFSET: f32 = 3.0;
    pub const ASTEROID_MODEL_VERTS: usize = 20;
    pub const ASTEROID_MODEL_MIN_RADIUS: f32 = 8.0;
    pub const ASTEROID_MODEL_MAX_RADIUS: f32 = 12.0;

    /// Collision radius = asteroid tier * scale
    pub const SHIP_COLLISION_SCALE: f32 = 12.0;
    pub const BULLET_COLLISION_SCALE: f32 = 12.0;
    pub const DEBUG_RADIUS_SCALE: f32 = 10.0;

    /// Scoring
    pub const KILL_REWARD: u64 = 100;
    pub const WAVE_BONUS: u64 = 1000;

    /// Wave-clear spawns
    pub const WAVE_SPAWN_DISTANCE: f32 = 300.0;
    pub const WAVE_SPAWN_SPEED: f32 = 25.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit vector a heading points along (heading 0 faces up the screen, -y)
#[inline]
pub fn heading_to_vec(heading: f32) -> Vec2 {
    Vec2::new(heading.sin(), -heading.cos())
}
