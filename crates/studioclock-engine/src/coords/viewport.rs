/// Viewport size in logical pixels.
///
/// Renderers upload this to their viewport uniform to map logical px to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size clamped to at least one pixel per axis, as uploaded to shaders.
    #[inline]
    pub fn uniform_size(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}
