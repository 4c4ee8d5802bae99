//! RGBA colors and the brand palette.

use crate::error::{AssetError, Result};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#RRGGBB` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(AssetError::Render(format!("invalid hex color: {hex}")));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&h[i..i + 2], 16)
                .map_err(|_| AssetError::Render(format!("invalid hex color: {hex}")))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// `rgb(r,g,b)` for SVG paint attributes. Alpha goes in a separate opacity attribute.
    pub fn to_svg(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    pub fn opacity(self) -> f32 {
        self.a as f32 / 255.0
    }

    pub fn to_image_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

// Social banner palette.
pub const DARK: Color = Color::rgb(5, 5, 7);
pub const DARK2: Color = Color::rgb(10, 10, 18);
pub const BLUE: Color = Color::rgb(59, 130, 246);
pub const BLUE_L: Color = Color::rgb(96, 165, 250);
pub const BLUE_D: Color = Color::rgb(37, 99, 235);
pub const GOLD: Color = Color::rgb(212, 175, 55);
pub const GOLD_D: Color = Color::rgb(184, 134, 11);
pub const GREEN: Color = Color::rgb(16, 185, 129);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const GRAY: Color = Color::rgb(156, 163, 175);
pub const RED: Color = Color::rgb(239, 68, 68);

/// Chrome Web Store palette (dark + gold).
pub mod store {
    use super::Color;

    pub const GOLD: Color = Color::rgb(212, 175, 55);
    pub const DARK: Color = Color::rgb(13, 13, 13);
    pub const DARK2: Color = Color::rgb(26, 26, 26);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#D4AF37").unwrap(), GOLD);
        assert_eq!(Color::from_hex("08090C").unwrap(), Color::rgb(8, 9, 12));
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGHHII").is_err());
    }

    #[test]
    fn test_svg_paint() {
        assert_eq!(BLUE.with_alpha(8).to_svg(), "rgb(59,130,246)");
        assert!((BLUE.with_alpha(51).opacity() - 0.2).abs() < 1e-6);
    }
}
