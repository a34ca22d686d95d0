//! Drawing primitives supplied by the host engine

use std::f32::consts::TAU;

use glam::Vec2;

use super::vertex::Color;

/// Segments used when a host has no native circle outline
pub const CIRCLE_SEGMENTS: u32 = 32;

/// The host's drawing surface, in field coordinates
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Outlined circle (debug overlay). Defaults to a line polygon.
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let point = |i: u32| {
            let theta = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
            center + Vec2::new(theta.cos(), theta.sin()) * radius
        };
        for i in 0..CIRCLE_SEGMENTS {
            self.draw_line(point(i), point(i + 1), color);
        }
    }

    /// Text with its top-left corner at `pos`; `scale` 1.0 is the host's base size
    fn draw_text(&mut self, pos: Vec2, text: &str, color: Color, scale: f32);
}
