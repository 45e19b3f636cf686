//! RGBA color used by grid styling.

use serde::{Deserialize, Serialize};

/// Linear RGBA, each channel in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha; 0 is fully transparent
    pub a: f32,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    /// Opaque white
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);

    const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a color, clamping every channel into range.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        let unit = |v: f32| v.clamp(0.0, 1.0);
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// Opaque color from clamped RGB.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with alpha replaced.
    #[must_use]
    pub fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_clamped() {
        let c = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!((c.r, c.g, c.b, c.a), (1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Color::rgb(0.3, 0.57, 0.71).a, 1.0);
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::WHITE.with_alpha(0.25);
        assert_eq!(c, Color::new(1.0, 1.0, 1.0, 0.25));
        assert_eq!(Color::BLACK.with_alpha(3.0).a, 1.0);
    }
}
