//! Colors - Avicure Design Tokens
//!
//! Named colour roles shared by every component. Translucent variants are
//! derived with [`AvicureColors::alpha`] instead of being listed separately.

use gpui::{Rgba, rgb};

/// Avicure color palette - All colors are accessed via associated functions
pub struct AvicureColors;

impl AvicureColors {
    // Brand colors
    /// Primary green
    pub fn primary() -> Rgba { rgb(0x2d5f4f) }
    /// Darker primary for text on soft backgrounds
    pub fn primary_dark() -> Rgba { rgb(0x1f4438) }
    /// Secondary green, mostly used translucent
    pub fn primary_soft() -> Rgba { rgb(0x90b8a8) }
    /// Accent brown
    pub fn accent_brown() -> Rgba { rgb(0x6b4e3d) }

    // Background colors
    /// Page background
    pub fn sand() -> Rgba { rgb(0xf5f5f0) }
    /// Card background
    pub fn surface() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn ink() -> Rgba { rgb(0x1a1a1a) }
    /// Secondary text
    pub fn ink_muted() -> Rgba { rgb(0x6b6b6b) }
    /// Text on filled primary or error backgrounds
    pub fn white() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x4caf50) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xf2a541) }
    /// Error - Red
    pub fn error() -> Rgba { rgb(0xf44336) }
}

impl AvicureColors {
    /// Return `color` with its alpha channel replaced by `alpha` (0.0..=1.0)
    pub fn alpha(color: Rgba, alpha: f32) -> Rgba {
        Rgba {
            a: alpha.clamp(0.0, 1.0),
            ..color
        }
    }

    /// Fully transparent
    pub fn transparent() -> Rgba {
        Self::alpha(Self::white(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_keeps_channels_and_clamps() {
        let soft = AvicureColors::alpha(AvicureColors::primary_soft(), 0.4);
        let base = AvicureColors::primary_soft();
        assert_eq!((soft.r, soft.g, soft.b), (base.r, base.g, base.b));
        assert!((soft.a - 0.4).abs() < f32::EPSILON);

        assert_eq!(AvicureColors::alpha(base, 3.0).a, 1.0);
        assert_eq!(AvicureColors::alpha(base, -1.0).a, 0.0);
    }

    #[test]
    fn transparent_is_invisible() {
        assert_eq!(AvicureColors::transparent().a, 0.0);
    }
}
