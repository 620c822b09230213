use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{Canvas, DrawCmd};

/// Filled disc payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self { center, radius, color }
    }
}

impl Canvas {
    /// Draws a filled disc centred on the whole pixel containing `center`.
    #[inline]
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCmd::Circle(CircleCmd::new(center.truncated(), radius, color)));
    }
}
