//! Draws a [`World`] onto a [`Canvas`]

use std::fmt::Write;

use glam::Vec2;
use rand::Rng;

use super::canvas::Canvas;
use super::vertex::colors;
use super::wireframe::{Model, Wireframe};
use crate::sim::World;
use crate::tuning::Tuning;

/// Models and scratch space for drawing the playing screen
#[derive(Debug)]
pub struct Scene {
    pub ship_model: Model,
    pub asteroid_model: Model,
    wireframe: Wireframe,
    /// Score line, rewritten in place each frame
    hud: String,
}

impl Scene {
    /// Build models; the asteroid silhouette is randomized once here
    pub fn new(tuning: &Tuning, rng: &mut impl Rng) -> Self {
        Self {
            ship_model: Model::ship(),
            asteroid_model: Model::asteroid(
                rng,
                tuning.asteroid_model_verts,
                tuning.asteroid_model_min_radius,
                tuning.asteroid_model_max_radius,
            ),
            wireframe: Wireframe::new(),
            hud: String::new(),
        }
    }

    /// Draw asteroids, bullets, ship and score
    pub fn draw(&mut self, canvas: &mut impl Canvas, world: &World, debug: bool) {
        canvas.clear(colors::BACKGROUND);

        for a in &world.asteroids {
            if debug {
                let radius = a.tier as f32 * world.tuning.debug_radius_scale;
                canvas.draw_circle(a.pos, radius, colors::DEBUG_CIRCLE);
            }
            self.wireframe.draw(
                canvas,
                &self.asteroid_model,
                a.pos,
                a.heading,
                a.tier as f32,
                colors::ASTEROID,
            );
        }

        for b in &world.bullets {
            canvas.fill_circle(b.pos, b.tier as f32, colors::BULLET);
        }

        let ship = &world.ship;
        self.wireframe
            .draw(canvas, &self.ship_model, ship.pos, ship.heading, 1.0, colors::SHIP);

        self.hud.clear();
        // Writing into a String cannot fail
        let _ = write!(self.hud, "SCORE: {}", world.score);
        canvas.draw_text(Vec2::new(2.0, 2.0), &self.hud, colors::TEXT, 1.0);
    }
}
