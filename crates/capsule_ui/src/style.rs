//! Styling for the capsule control.
//!
//! Colors are plain RGBA floats so the host can hand them straight to its
//! render backend. [`SegmentedStyle`] carries the full configuration surface
//! of the control; two presets cover the common light and dark cases.

use crate::error::{UiError, UiResult};

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Muted gray for unselected labels.
    pub const SLATE: Self = Self::rgba(0.55, 0.55, 0.58, 1.0);
    /// Near-white track fill.
    pub const FROST: Self = Self::rgba(0.93, 0.93, 0.95, 1.0);
    /// Near-black text and dark track fill.
    pub const INK: Self = Self::rgba(0.10, 0.10, 0.12, 1.0);
    /// Accent blue for the dark selector pill.
    pub const AZURE: Self = Self::rgba(0.04, 0.52, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from a packed hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    /// Parses a `#RRGGBB` or `#RRGGBBAA` literal, as used in config files.
    pub fn from_hex_str(literal: &str) -> UiResult<Self> {
        let digits = literal
            .strip_prefix('#')
            .ok_or_else(|| UiError::InvalidColor(literal.to_owned()))?;
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| UiError::InvalidColor(literal.to_owned()))?;

        match digits.len() {
            6 => Ok(Self::hex((value << 8) | 0xFF)),
            8 => Ok(Self::hex(value)),
            _ => Err(UiError::InvalidColor(literal.to_owned())),
        }
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Linearly interpolates between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::rgba(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Visual configuration for the segmented control.
///
/// Every field maps to one option of the external configuration surface;
/// setters on the control apply changes immediately to all current segments
/// and the selector.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedStyle {
    /// Fill of the capsule background (the track).
    pub background: Color,
    /// Outer border color.
    pub border: Color,
    /// Label color for unselected segments.
    pub text: Color,
    /// Label color for the selected segment.
    pub selected_text: Color,
    /// Fill of the sliding selector pill.
    pub selector: Color,
    /// Outer border width; 0 disables the border.
    pub border_width: f32,
    /// Label font size.
    pub font_size: f32,
    /// Render labels with the monospace font.
    pub monospace: bool,
}

impl SegmentedStyle {
    /// Light preset: white selector pill over a frosted track.
    pub const FROSTED: Self = Self {
        background: Color::FROST,
        border: Color::TRANSPARENT,
        text: Color::SLATE,
        selected_text: Color::INK,
        selector: Color::WHITE,
        border_width: 0.0,
        font_size: 14.0,
        monospace: false,
    };

    /// Dark preset: azure selector pill over an ink track.
    pub const MIDNIGHT: Self = Self {
        background: Color::INK,
        border: Color::rgba(1.0, 1.0, 1.0, 0.08),
        text: Color::rgba(0.75, 0.78, 0.82, 1.0),
        selected_text: Color::WHITE,
        selector: Color::AZURE,
        border_width: 1.0,
        font_size: 14.0,
        monospace: false,
    };
}

impl Default for SegmentedStyle {
    fn default() -> Self {
        Self::FROSTED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lerp() {
        let black = Color::BLACK;
        let white = Color::WHITE;
        let mid = black.lerp(white, 0.5);

        assert!((mid.r - 0.5).abs() < 0.01);
        assert!((mid.g - 0.5).abs() < 0.01);
        assert!((mid.b - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFF00_00FF);
        assert!((color.r - 1.0).abs() < 0.01);
        assert!((color.g - 0.0).abs() < 0.01);
        assert!((color.b - 0.0).abs() < 0.01);
        assert!((color.a - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_hex_literal_parsing() {
        let opaque = Color::from_hex_str("#FF0000").unwrap();
        assert!((opaque.r - 1.0).abs() < 0.01);
        assert!((opaque.a - 1.0).abs() < 0.01);

        let translucent = Color::from_hex_str("#00FF0080").unwrap();
        assert!((translucent.g - 1.0).abs() < 0.01);
        assert!((translucent.a - 0.502).abs() < 0.01);
    }

    #[test]
    fn test_hex_literal_rejects_garbage() {
        assert!(Color::from_hex_str("FF0000").is_err());
        assert!(Color::from_hex_str("#F00").is_err());
        assert!(Color::from_hex_str("#GGGGGG").is_err());
    }
}
