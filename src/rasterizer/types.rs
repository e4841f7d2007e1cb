//! Core types for the rasterizer

use serde::{Serialize, Deserialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Linear interpolation between two colors.
    ///
    /// Each channel is rounded to the nearest integer and clamped to
    /// [0, 255], so extrapolation (t outside [0, 1]) stays in range
    /// instead of wrapping.
    pub fn lerp(self, other: Color, t: f32) -> Self {
        fn channel(a: u8, b: u8, t: f32) -> u8 {
            (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
        }
        Self {
            r: channel(self.r, other.r, t),
            g: channel(self.g, other.g, t),
            b: channel(self.b, other.b, t),
            a: channel(self.a, other.a, t),
        }
    }

    /// Convert to [u8; 4] for framebuffer writes
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// 2D point with sub-pixel precision
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round to the nearest integer pixel cell
    pub fn rounded(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_midpoint() {
        let c = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(c.r, 128); // 127.5 rounds up
        assert_eq!(c.g, 128);
        assert_eq!(c.b, 128);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::new(10, 20, 30);
        let b = Color::new(200, 100, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_clamps_extrapolation() {
        let a = Color::new(10, 250, 128);
        let b = Color::new(240, 10, 128);
        // t = 2.0 would put r at 470 and g at -230 without clamping
        let c = a.lerp(b, 2.0);
        assert_eq!(c.r, 255);
        assert_eq!(c.g, 0);
        assert_eq!(c.b, 128);

        let d = a.lerp(b, -1.0);
        assert_eq!(d.r, 0);
        assert_eq!(d.g, 255);
    }

    #[test]
    fn test_point_rounding() {
        assert_eq!(Point::new(2.4, 7.6).rounded(), (2, 8));
        assert_eq!(Point::new(-0.6, 0.5).rounded(), (-1, 1));
    }
}
