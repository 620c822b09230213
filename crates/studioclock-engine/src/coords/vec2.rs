/// 2D point or offset in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Snaps to whole pixels by truncating toward zero.
    ///
    /// Discs are placed on integer pixel centres so that a mark redrawn in a
    /// later frame lands on exactly the same pixels.
    #[inline]
    pub fn truncated(self) -> Self {
        Self::new(self.x.trunc(), self.y.trunc())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_rounds_toward_zero() {
        assert_eq!(Vec2::new(12.9, 7.1).truncated(), Vec2::new(12.0, 7.0));
        assert_eq!(Vec2::new(-3.7, -0.2).truncated(), Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!Vec2::new(f32::NAN, 0.0).is_finite());
        assert!(Vec2::new(0.0, 1.0).is_finite());
    }
}
