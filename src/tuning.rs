//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`] so a JSON file can rebalance
//! the game without a rebuild. Missing fields fall back to [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Field;

/// Gameplay constants consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    /// Heading change while a turn key is held (radians/s)
    pub ship_turn_rate: f32,
    /// Acceleration while thrust is held (units/s²)
    pub ship_thrust: f32,

    // === Bullets ===
    pub bullet_speed: f32,
    /// Also the drawn radius
    pub bullet_tier: u32,
    /// Cosmetic heading drift (radians/s)
    pub bullet_spin: f32,
    pub bullet_start_heading: f32,
    pub bullet_exit_margin: f32,

    // === Asteroids ===
    pub asteroid_spin: f32,
    pub asteroid_start_tier: u32,
    /// Asteroids split only while `tier > fragment_threshold`
    pub fragment_threshold: u32,
    pub fragment_speed: f32,
    pub fragment_offset: f32,
    pub asteroid_model_verts: usize,
    pub asteroid_model_min_radius: f32,
    pub asteroid_model_max_radius: f32,

    // === Collision ===
    pub ship_collision_scale: f32,
    pub bullet_collision_scale: f32,
    /// Only used by the debug overlay
    pub debug_radius_scale: f32,

    // === Scoring ===
    pub kill_reward: u64,
    pub wave_bonus: u64,

    // === Wave clear ===
    pub wave_spawn_distance: f32,
    pub wave_spawn_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_turn_rate: SHIP_TURN_RATE,
            ship_thrust: SHIP_THRUST,

            bullet_speed: BULLET_SPEED,
            bullet_tier: BULLET_TIER,
            bullet_spin: BULLET_SPIN,
            bullet_start_heading: BULLET_START_HEADING,
            bullet_exit_margin: BULLET_EXIT_MARGIN,

            asteroid_spin: ASTEROID_SPIN,
            asteroid_start_tier: ASTEROID_START_TIER,
            fragment_threshold: FRAGMENT_THRESHOLD,
            fragment_speed: FRAGMENT_SPEED,
            fragment_offset: FRAGMENT_OFFSET,
            asteroid_model_verts: ASTEROID_MODEL_VERTS,
            asteroid_model_min_radius: ASTEROID_MODEL_MIN_RADIUS,
            asteroid_model_max_radius: ASTEROID_MODEL_MAX_RADIUS,

            ship_collision_scale: SHIP_COLLISION_SCALE,
            bullet_collision_scale: BULLET_COLLISION_SCALE,
            debug_radius_scale: DEBUG_RADIUS_SCALE,

            kill_reward: KILL_REWARD,
            wave_bonus: WAVE_BONUS,

            wave_spawn_distance: WAVE_SPAWN_DISTANCE,
            wave_spawn_speed: WAVE_SPAWN_SPEED,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values that would let the simulation reach an invalid state
    pub fn validate(&self) -> Result<(), ConfigError> {
        // tier > threshold >= 1 guarantees tier / 2 >= 1
        if self.fragment_threshold < 1 {
            return Err(ConfigError::invalid(
                "fragment_threshold",
                "must be at least 1 so children never reach tier 0",
            ));
        }
        if self.asteroid_start_tier == 0 {
            return Err(ConfigError::invalid("asteroid_start_tier", "must be positive"));
        }
        if self.bullet_tier == 0 {
            return Err(ConfigError::invalid("bullet_tier", "must be positive"));
        }
        if !(self.ship_collision_scale > 0.0) {
            return Err(ConfigError::invalid("ship_collision_scale", "must be positive"));
        }
        if !(self.bullet_collision_scale > 0.0) {
            return Err(ConfigError::invalid("bullet_collision_scale", "must be positive"));
        }
        if self.asteroid_model_verts < 3 {
            return Err(ConfigError::invalid(
                "asteroid_model_verts",
                "a closed polygon needs at least 3 vertices",
            ));
        }
        if !(self.asteroid_model_min_radius > 0.0)
            || self.asteroid_model_max_radius <= self.asteroid_model_min_radius
        {
            return Err(ConfigError::invalid(
                "asteroid_model_max_radius",
                "radius range must be positive and non-empty",
            ));
        }
        if self.wave_spawn_distance <= self.ship_hit_radius(self.asteroid_start_tier) {
            return Err(ConfigError::invalid(
                "wave_spawn_distance",
                "must exceed the ship's hit radius against a starting asteroid",
            ));
        }
        Ok(())
    }

    /// Check that wave spawns stay clear of the ship once wrapped into `field`.
    ///
    /// A spawn offset of `d` along any direction wraps to at least
    /// `min(d, min_side - d)` from the ship, so both must exceed the hit radius.
    pub fn validate_field(&self, field: &Field) -> Result<(), ConfigError> {
        let radius = self.ship_hit_radius(self.asteroid_start_tier);
        let min_side = field.width.min(field.height);
        if min_side - self.wave_spawn_distance <= radius {
            return Err(ConfigError::invalid(
                "wave_spawn_distance",
                "field too small: wrapped wave spawns would land on the ship",
            ));
        }
        Ok(())
    }

    /// Whether an asteroid of this tier splits when shot
    #[inline]
    pub fn fragments(&self, tier: u32) -> bool {
        tier > self.fragment_threshold
    }

    /// Radius inside which the ship dies
    #[inline]
    pub fn ship_hit_radius(&self, tier: u32) -> f32 {
        tier as f32 * self.ship_collision_scale
    }

    /// Radius inside which a bullet hits
    #[inline]
    pub fn bullet_hit_radius(&self, tier: u32) -> f32 {
        tier as f32 * self.bullet_collision_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "kill_reward": 250, "fragment_threshold": 8 }"#)
            .expect("valid tuning");
        assert_eq!(tuning.kill_reward, 250);
        assert_eq!(tuning.fragment_threshold, 8);
        assert_eq!(tuning.wave_bonus, WAVE_BONUS);
        assert_eq!(tuning.asteroid_start_tier, ASTEROID_START_TIER);
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let err = Tuning::from_json(r#"{ "fragment_threshold": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "fragment_threshold",
                ..
            }
        ));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Tuning::from_json("{ kill_reward: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_fragmentation_threshold_is_strict() {
        let tuning = Tuning::default();
        assert!(tuning.fragments(16));
        assert!(tuning.fragments(8));
        assert!(!tuning.fragments(4));
        assert!(!tuning.fragments(2));
    }

    #[test]
    fn test_ship_radius_must_fit_inside_spawn_distance() {
        let err = Tuning::from_json(r#"{ "ship_collision_scale": 20.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "wave_spawn_distance",
                ..
            }
        ));
    }

    #[test]
    fn test_small_field_rejected() {
        let tuning = Tuning::default();
        assert!(tuning.validate_field(&Field::new(960.0, 540.0)).is_ok());
        assert!(tuning.validate_field(&Field::new(800.0, 600.0)).is_ok());

        // 480 - 300 leaves 180, inside the 192 hit radius
        let err = tuning.validate_field(&Field::new(640.0, 480.0)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "wave_spawn_distance",
                ..
            }
        ));
    }

    #[test]
    fn test_collision_radii_scale_by_tier() {
        let tuning = Tuning {
            ship_collision_scale: 12.0,
            bullet_collision_scale: 10.0,
            ..Default::default()
        };
        assert_eq!(tuning.ship_hit_radius(16), 192.0);
        assert_eq!(tuning.bullet_hit_radius(8), 80.0);
    }
}
