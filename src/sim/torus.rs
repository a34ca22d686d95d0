//! Toroidal play-field
//!
//! Positions leaving one edge reappear at the opposite edge. A single
//! adjustment per axis is enough because no entity moves a full field
//! length in one frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Play-field bounds `[0, width) × [0, height)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Field center
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a position back into the field
    #[inline]
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(pos.x, self.width), wrap_axis(pos.y, self.height))
    }

    /// True if `pos` is inside the field shrunk by `margin` on every side
    #[inline]
    pub fn contains_with_margin(&self, pos: Vec2, margin: f32) -> bool {
        pos.x >= margin
            && pos.y >= margin
            && pos.x < self.width - margin
            && pos.y < self.height - margin
    }
}

/// Wrap a single coordinate into `[0, bound)`
#[inline]
pub fn wrap_axis(value: f32, bound: f32) -> f32 {
    if value < 0.0 {
        // -ε + bound can round up to bound in f32
        let wrapped = value + bound;
        if wrapped >= bound { 0.0 } else { wrapped }
    } else if value >= bound {
        value - bound
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_below_zero() {
        assert_eq!(wrap_axis(-5.0, 960.0), 955.0);
        assert!(wrap_axis(-1e-6, 960.0) < 960.0);
    }

    #[test]
    fn test_wrap_at_or_above_bound() {
        assert_eq!(wrap_axis(962.0, 960.0), 2.0);
        assert_eq!(wrap_axis(960.0, 960.0), 0.0);
    }

    #[test]
    fn test_wrap_both_axes() {
        let field = Field::new(960.0, 540.0);
        let wrapped = field.wrap(Vec2::new(-10.0, 545.0));
        assert_eq!(wrapped, Vec2::new(950.0, 5.0));
    }

    #[test]
    fn test_margin_check() {
        let field = Field::new(960.0, 540.0);
        assert!(field.contains_with_margin(Vec2::new(480.0, 1.0), 1.0));
        assert!(!field.contains_with_margin(Vec2::new(480.0, 0.5), 1.0));
        assert!(!field.contains_with_margin(Vec2::new(959.0, 270.0), 1.0));
        assert!(!field.contains_with_margin(Vec2::new(480.0, 539.5), 1.0));
    }

    proptest! {
        #[test]
        fn wrap_is_identity_inside_field(x in 0.0f32..960.0, y in 0.0f32..540.0) {
            let field = Field::new(960.0, 540.0);
            let pos = Vec2::new(x, y);
            prop_assert_eq!(field.wrap(pos), pos);
        }

        #[test]
        fn wrap_lands_inside_field(x in -900.0f32..1900.0, y in -500.0f32..1000.0) {
            let field = Field::new(960.0, 540.0);
            let wrapped = field.wrap(Vec2::new(x, y));
            prop_assert!(wrapped.x >= 0.0 && wrapped.x < 960.0);
            prop_assert!(wrapped.y >= 0.0 && wrapped.y < 540.0);
        }
    }
}
