use macroquad::color::Color;
use macroquad::math::{Rect, Vec2};

/// Drawing primitives the renderers need from the host
///
/// Coordinates are screen pixels. Implemented over macroquad by the binary and
/// by a recording canvas in tests.
pub trait Canvas {
    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline an axis-aligned rectangle
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color);

    /// Circle outline
    fn draw_circle(&mut self, center: Vec2, radius: f32, thickness: f32, color: Color);

    /// Segment starting at `from`, `length` pixels long, pointing along `angle` radians
    fn draw_line(&mut self, from: Vec2, length: f32, angle: f32, color: Color);
}

/// End point of a segment drawn by [`Canvas::draw_line`]
pub fn line_end(from: Vec2, length: f32, angle: f32) -> Vec2 {
    from + Vec2::new(angle.cos(), angle.sin()) * length
}
