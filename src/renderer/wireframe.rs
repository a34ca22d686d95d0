//! Wireframe transform pipeline
//!
//! Models are closed polygons in model space. Each draw rotates about the
//! model origin, then scales, then translates to world position, and emits
//! one line per edge including the closing edge back to the first vertex.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::canvas::Canvas;
use super::vertex::Color;

/// A closed polygon in model space
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    points: Vec<Vec2>,
}

impl Model {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Isosceles triangle pointing up (-y)
    pub fn ship() -> Self {
        Self::new(vec![
            Vec2::new(0.0, -30.0),
            Vec2::new(-20.0, 20.0),
            Vec2::new(20.0, 20.0),
        ])
    }

    /// Jagged near-circle, generated once at startup.
    ///
    /// Every vertex radius lies in `[min_radius, max_radius)` so the circle
    /// used for collisions stays a fair fit for what is drawn.
    pub fn asteroid(rng: &mut impl Rng, verts: usize, min_radius: f32, max_radius: f32) -> Self {
        let points = (0..verts)
            .map(|i| {
                let noise = rng.random_range(min_radius..max_radius);
                let theta = i as f32 / verts as f32 * TAU;
                Vec2::new(noise * theta.sin(), noise * theta.cos())
            })
            .collect();
        Self::new(points)
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Rotate, then scale, then translate one model-space point
#[inline]
pub fn transform_point(p: Vec2, rotation: Vec2, scale: f32, pos: Vec2) -> Vec2 {
    // rotation holds (cos r, sin r)
    let rotated = Vec2::new(
        p.x * rotation.x - p.y * rotation.y,
        p.x * rotation.y + p.y * rotation.x,
    );
    rotated * scale + pos
}

/// Transform every model point into `out` (cleared first)
pub fn transform_into(model: &Model, pos: Vec2, rotation: f32, scale: f32, out: &mut Vec<Vec2>) {
    let rot = Vec2::new(rotation.cos(), rotation.sin());
    out.clear();
    out.extend(
        model
            .points()
            .iter()
            .map(|&p| transform_point(p, rot, scale, pos)),
    );
}

/// Draws models through a reusable scratch buffer
#[derive(Debug, Default)]
pub struct Wireframe {
    scratch: Vec<Vec2>,
}

impl Wireframe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit the transformed closed polygon as line segments
    pub fn draw(
        &mut self,
        canvas: &mut impl Canvas,
        model: &Model,
        pos: Vec2,
        rotation: f32,
        scale: f32,
        color: Color,
    ) {
        transform_into(model, pos, rotation, scale, &mut self.scratch);

        let n = self.scratch.len();
        if n < 2 {
            return;
        }
        for i in 0..n {
            let j = (i + 1) % n;
            canvas.draw_line(self.scratch[i], self.scratch[j], color);
        }
    }
}
