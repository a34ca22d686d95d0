//! Vertex types for 2D line rendering

use bytemuck::{Pod, Zeroable};

/// RGBA, 0.0-1.0 per channel
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const SHIP: Color = [1.0, 1.0, 1.0, 1.0];
    pub const ASTEROID: Color = [1.0, 1.0, 0.0, 1.0]; // Yellow
    pub const BULLET: Color = [1.0, 1.0, 1.0, 1.0];
    pub const DEBUG_CIRCLE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}
