//! Vertex-buffer canvas
//!
//! Records a frame as GPU-ready buffers: a line list for wireframes and a
//! triangle list for filled circles. Text is kept as draw records for the
//! host's font renderer.

use std::f32::consts::PI;

use glam::Vec2;

use super::canvas::Canvas;
use super::vertex::{Color, Vertex, colors};

/// Triangles per filled circle
pub const FILL_SEGMENTS: u32 = 12;

/// A queued text draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub pos: Vec2,
    pub text: String,
    pub color: Color,
    pub scale: f32,
}

/// One frame's worth of draw data; reuse across frames to avoid allocation
#[derive(Debug, Clone)]
pub struct LineBatch {
    pub clear_color: Color,
    /// Two vertices per segment
    pub lines: Vec<Vertex>,
    /// Three vertices per triangle
    pub fills: Vec<Vertex>,
    pub texts: Vec<TextItem>,
    /// Text buffers from earlier frames, refilled by `draw_text`
    spare_text: Vec<String>,
}

impl Default for LineBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBatch {
    pub fn new() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            lines: Vec::new(),
            fills: Vec::new(),
            texts: Vec::new(),
            spare_text: Vec::new(),
        }
    }

    /// Number of line segments recorded
    pub fn segment_count(&self) -> usize {
        self.lines.len() / 2
    }

    /// Line-list buffer ready for upload
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    /// Triangle-list buffer ready for upload
    pub fn fill_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.fills)
    }
}

impl Canvas for LineBatch {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.lines.clear();
        self.fills.clear();
        self.spare_text
            .extend(self.texts.drain(..).map(|item| item.text));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.lines.push(Vertex::new(from.x, from.y, color));
        self.lines.push(Vertex::new(to.x, to.y, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.fills.reserve((FILL_SEGMENTS * 3) as usize);

        for i in 0..FILL_SEGMENTS {
            let theta1 = (i as f32 / FILL_SEGMENTS as f32) * 2.0 * PI;
            let theta2 = ((i + 1) as f32 / FILL_SEGMENTS as f32) * 2.0 * PI;

            // Triangle from center to edge
            self.fills.push(Vertex::new(center.x, center.y, color));
            self.fills.push(Vertex::new(
                center.x + radius * theta1.cos(),
                center.y + radius * theta1.sin(),
                color,
            ));
            self.fills.push(Vertex::new(
                center.x + radius * theta2.cos(),
                center.y + radius * theta2.sin(),
                color,
            ));
        }
    }

    fn draw_text(&mut self, pos: Vec2, text: &str, color: Color, scale: f32) {
        let mut buf = self.spare_text.pop().unwrap_or_default();
        buf.clear();
        buf.push_str(text);
        self.texts.push(TextItem {
            pos,
            text: buf,
            color,
            scale,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::canvas::CIRCLE_SEGMENTS;

    #[test]
    fn test_line_buffer_layout() {
        let mut batch = LineBatch::new();
        batch.draw_line(Vec2::ZERO, Vec2::new(10.0, 0.0), colors::SHIP);
        assert_eq!(batch.segment_count(), 1);
        // 2 vertices * (2 + 4) floats * 4 bytes
        assert_eq!(batch.line_bytes().len(), 48);
    }

    #[test]
    fn test_fill_circle_triangles() {
        let mut batch = LineBatch::new();
        batch.fill_circle(Vec2::new(5.0, 5.0), 4.0, colors::BULLET);
        assert_eq!(batch.fills.len(), (FILL_SEGMENTS * 3) as usize);
        assert_eq!(batch.fills[0].position, [5.0, 5.0]);
    }

    #[test]
    fn test_default_outline_circle() {
        let mut batch = LineBatch::new();
        batch.draw_circle(Vec2::ZERO, 10.0, colors::DEBUG_CIRCLE);
        assert_eq!(batch.segment_count(), CIRCLE_SEGMENTS as usize);
    }

    #[test]
    fn test_text_buffers_reused_after_clear() {
        let mut batch = LineBatch::new();
        batch.draw_text(Vec2::ZERO, "SCORE: 100", colors::TEXT, 1.0);
        let ptr = batch.texts[0].text.as_ptr();

        batch.clear(colors::BACKGROUND);
        assert!(batch.texts.is_empty());
        assert_eq!(batch.spare_text.len(), 1);

        batch.draw_text(Vec2::ZERO, "SCORE: 200", colors::TEXT, 1.0);
        assert!(batch.spare_text.is_empty());
        assert_eq!(batch.texts[0].text, "SCORE: 200");
        assert_eq!(batch.texts[0].text.as_ptr(), ptr);
    }

    #[test]
    fn test_clear_resets_buffers() {
        let mut batch = LineBatch::new();
        batch.draw_line(Vec2::ZERO, Vec2::ONE, colors::SHIP);
        batch.draw_text(Vec2::ZERO, "hi", colors::TEXT, 1.0);
        batch.clear(colors::BACKGROUND);
        assert!(batch.lines.is_empty());
        assert!(batch.texts.is_empty());
    }
}
