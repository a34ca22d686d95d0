//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each collection)
//! - No rendering or platform dependencies

pub mod collision;
pub mod lifecycle;
pub mod motion;
pub mod state;
pub mod tick;
pub mod torus;

pub use collision::{bullet_hits_asteroid, point_in_circle, ship_hits_asteroid};
pub use state::{GameEvent, SHIP_TIER, SpaceObject, Status, World, random_angle};
pub use tick::{TickInput, check_ship_collision, tick};
pub use torus::{Field, wrap_axis};
