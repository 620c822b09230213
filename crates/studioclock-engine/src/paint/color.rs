/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    /// Creates a color from straight sRGB bytes (`0`–`255`).
    ///
    /// The channels are decoded to linear light, since the surface is
    /// configured with an sRGB format and re-encodes on write.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            srgb_to_linear(r as f32 / 255.0),
            srgb_to_linear(g as f32 / 255.0),
            srgb_to_linear(b as f32 / 255.0),
            a as f32 / 255.0,
        )
    }

    /// Opaque color from sRGB bytes.
    #[inline]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::from_srgb_u8(r, g, b, 255)
    }

    /// Creates a premultiplied color from straight alpha linear components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same color as a `wgpu` clear value.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_survive_linearisation() {
        assert_eq!(Color::opaque(255, 0, 0), Color::from_straight(1.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::opaque(0, 0, 0), Color::from_straight(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::opaque(255, 255, 0).to_array(), [1.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn mid_grey_is_darker_in_linear_space() {
        let c = Color::opaque(128, 128, 128);
        assert!((c.r - 0.2158).abs() < 1e-3);
        assert_eq!(c.r, c.g);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn straight_alpha_is_premultiplied() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.to_array(), [0.5, 0.25, 0.0, 0.5]);
    }
}
